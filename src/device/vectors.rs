//! Device interrupt vectors for cortex-m-rt.
//!
//! There is no PAC to supply `__INTERRUPTS`, so the table is written out
//! here in the shape svd2rust would generate. Only IRQ 40 (EXTI lines
//! 10-15) is wired up; `device.x` PROVIDEs a DefaultHandler fallback for
//! binaries that never unmask it.

extern "C" {
    fn EXTI15_10_IRQHandler();
}

#[derive(Clone, Copy)]
union Vector {
    _handler: unsafe extern "C" fn(),
    _reserved: u32,
}

#[link_section = ".vector_table.interrupts"]
#[no_mangle]
static __INTERRUPTS: [Vector; 41] = {
    let mut table = [Vector { _reserved: 0 }; 41];
    table[40] = Vector {
        _handler: EXTI15_10_IRQHandler,
    };
    table
};
