//! USER button toggles the LED through EXTI.
//!
//! PC13 is wired to the USER button with an external pull-up, so a press
//! is a falling edge. EXTI line 13 routes it to `EXTI15_10_IRQHandler`,
//! which toggles LD1 on PB0 and counts the press; the main loop has
//! nothing left to do.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod app {
    use core::cell::RefCell;
    use core::sync::atomic::{AtomicU32, Ordering};

    use cortex_m::asm;
    use cortex_m::interrupt::Mutex;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use stm32h753zi_bare_drivers::button::{self, Button};
    use stm32h753zi_bare_drivers::device;

    struct Shared {
        button: Button<'static>,
        exti: &'static device::exti::RegisterBlock,
    }

    // The handler and main share the button state through a critical
    // section; the press counter is handler-written, main-readable.
    static SHARED: Mutex<RefCell<Option<Shared>>> = Mutex::new(RefCell::new(None));
    static PRESS_COUNT: AtomicU32 = AtomicU32::new(0);

    #[entry]
    fn main() -> ! {
        let p = device::Peripherals::take().unwrap();
        let nvic = p.nvic;

        let button = Button::bring_up(p.rcc, p.gpiob, p.gpioc, p.syscfg, p.exti).unwrap();

        // Publish the handler's state before the interrupt can fire.
        let shared = Shared { button, exti: p.exti };
        cortex_m::interrupt::free(|cs| SHARED.borrow(cs).replace(Some(shared)));
        button::enable_interrupt(nvic);

        loop {
            asm::nop();
        }
    }

    /// Vector-table slot 40, EXTI lines 10-15.
    #[no_mangle]
    extern "C" fn EXTI15_10_IRQHandler() {
        cortex_m::interrupt::free(|cs| {
            if let Some(shared) = SHARED.borrow(cs).borrow().as_ref() {
                shared.button.on_interrupt(shared.exti, &PRESS_COUNT);
            }
        });
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {}
