//! Memory-mapped register blocks for the STM32H753, hand-written against
//! RM0433. Only the peripherals these drivers touch are defined.
//!
//! Every register is modelled as a [`reg::Reg`], a transparent wrapper
//! over `volatile_register::RW<u32>`, including the ones hardware treats
//! as read- or write-only, mirroring the `volatile uint32_t` register
//! maps in the vendor headers. Reserved ranges are plain `u32` padding
//! so that every field sits at its documented offset; the offsets are
//! pinned down by the tests below.

use core::sync::atomic::{AtomicBool, Ordering};

pub mod exti;
pub mod gpio;
pub mod nvic;
pub mod rcc;
pub mod reg;
pub mod syscfg;
pub mod usart;

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod vectors;

pub const RCC_BASE: usize = 0x5802_4400;
pub const GPIOB_BASE: usize = 0x5802_0400;
pub const GPIOC_BASE: usize = 0x5802_0800;
pub const GPIOD_BASE: usize = 0x5802_0C00;
pub const SYSCFG_BASE: usize = 0x5800_0400;
pub const EXTI_BASE: usize = 0x5800_0000;
pub const USART3_BASE: usize = 0x4000_4800;
pub const NVIC_ISER_BASE: usize = 0xE000_E100;

/// The 64 MHz internal oscillator, the reset-default kernel clock for
/// both the CPU and USART3.
pub const HSI_HZ: u32 = 64_000_000;

/// All the register blocks the drivers in this crate use.
///
/// The blocks are hardware singletons; `take` hands them out once per
/// reset so that bring-up code runs with exclusive access. Interrupt
/// handlers that need a block after `main` has consumed `Peripherals`
/// either borrow it back through a `cortex_m::interrupt::Mutex` or use
/// [`Peripherals::steal`].
pub struct Peripherals {
    pub rcc: &'static rcc::RegisterBlock,
    pub gpiob: &'static gpio::RegisterBlock,
    pub gpioc: &'static gpio::RegisterBlock,
    pub gpiod: &'static gpio::RegisterBlock,
    pub syscfg: &'static syscfg::RegisterBlock,
    pub exti: &'static exti::RegisterBlock,
    pub usart3: &'static usart::RegisterBlock,
    pub nvic: &'static nvic::RegisterBlock,
}

static TAKEN: AtomicBool = AtomicBool::new(false);

impl Peripherals {
    /// Returns the peripherals the first time it is called, `None` after.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(unsafe { Self::steal() })
        }
    }

    /// Conjure the register blocks regardless of ownership.
    ///
    /// # Safety
    ///
    /// The caller must not break the access discipline the drivers rely
    /// on: configuration only before the matching interrupt is unmasked,
    /// and no ODR writes to a port whose pins an interrupt handler
    /// toggles.
    pub unsafe fn steal() -> Self {
        Peripherals {
            rcc: &*(RCC_BASE as *const rcc::RegisterBlock),
            gpiob: &*(GPIOB_BASE as *const gpio::RegisterBlock),
            gpioc: &*(GPIOC_BASE as *const gpio::RegisterBlock),
            gpiod: &*(GPIOD_BASE as *const gpio::RegisterBlock),
            syscfg: &*(SYSCFG_BASE as *const syscfg::RegisterBlock),
            exti: &*(EXTI_BASE as *const exti::RegisterBlock),
            usart3: &*(USART3_BASE as *const usart::RegisterBlock),
            nvic: &*(NVIC_ISER_BASE as *const nvic::RegisterBlock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    // A one-word slip in the padding would silently corrupt an unrelated
    // peripheral, so the layouts are checked against the RM0433 offsets.

    #[test]
    fn rcc_offsets() {
        assert_eq!(offset_of!(rcc::RegisterBlock, cr), 0x00);
        assert_eq!(offset_of!(rcc::RegisterBlock, d3amr), 0xA8);
        assert_eq!(offset_of!(rcc::RegisterBlock, rsr), 0xD0);
        assert_eq!(offset_of!(rcc::RegisterBlock, ahb4enr), 0xE0);
        assert_eq!(offset_of!(rcc::RegisterBlock, apb1lenr), 0xE8);
        assert_eq!(offset_of!(rcc::RegisterBlock, apb4enr), 0xF4);
    }

    #[test]
    fn gpio_offsets() {
        assert_eq!(offset_of!(gpio::RegisterBlock, moder), 0x00);
        assert_eq!(offset_of!(gpio::RegisterBlock, idr), 0x10);
        assert_eq!(offset_of!(gpio::RegisterBlock, odr), 0x14);
        assert_eq!(offset_of!(gpio::RegisterBlock, bsrr), 0x18);
        assert_eq!(offset_of!(gpio::RegisterBlock, afr), 0x20);
    }

    #[test]
    fn exti_offsets() {
        assert_eq!(offset_of!(exti::RegisterBlock, rtsr1), 0x00);
        assert_eq!(offset_of!(exti::RegisterBlock, ftsr1), 0x04);
        assert_eq!(offset_of!(exti::RegisterBlock, rtsr3), 0x40);
        assert_eq!(offset_of!(exti::RegisterBlock, imr1), 0x80);
        assert_eq!(offset_of!(exti::RegisterBlock, pr1), 0x88);
    }

    #[test]
    fn syscfg_offsets() {
        assert_eq!(offset_of!(syscfg::RegisterBlock, pmcr), 0x04);
        assert_eq!(offset_of!(syscfg::RegisterBlock, exticr), 0x08);
        assert_eq!(offset_of!(syscfg::RegisterBlock, cfgr), 0x18);
        assert_eq!(offset_of!(syscfg::RegisterBlock, pwrcr), 0x2C);
    }

    #[test]
    fn usart_offsets() {
        assert_eq!(offset_of!(usart::RegisterBlock, cr1), 0x00);
        assert_eq!(offset_of!(usart::RegisterBlock, brr), 0x0C);
        assert_eq!(offset_of!(usart::RegisterBlock, isr), 0x1C);
        assert_eq!(offset_of!(usart::RegisterBlock, icr), 0x20);
        assert_eq!(offset_of!(usart::RegisterBlock, rdr), 0x24);
        assert_eq!(offset_of!(usart::RegisterBlock, tdr), 0x28);
    }
}
