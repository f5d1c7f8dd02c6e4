//! USER-button interrupt composition: PC13 falling edge on EXTI line 13
//! toggles the LED on PB0 and counts presses.
//!
//! Bring-up and interrupt unmasking are deliberately two calls. The
//! interrupt handler borrows shared state that `main` publishes after
//! [`Button::bring_up`] returns; unmasking IRQ 40 only afterwards, via
//! [`enable_interrupt`], guarantees the handler never runs against
//! unpublished state.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::device;
use crate::gpio::{Mode, Pin};
use crate::{exti, nvic, rcc, ConfigError};

/// LED on PB0 (LD1 on the Nucleo-144).
pub const LED_PIN: u8 = 0;
/// USER button on PC13; the board provides the pull-up.
pub const BUTTON_PIN: u8 = 13;
/// EXTI line fed by PC13.
pub const BUTTON_LINE: u8 = 13;

/// The configured button/LED pair. Owns the LED pin; the interrupt
/// handler is the only context allowed to write port B's ODR once the
/// interrupt is unmasked.
pub struct Button<'a> {
    led: Pin<'a>,
}

impl<'a> Button<'a> {
    /// Run the full bring-up short of the NVIC: clock gates for GPIOB,
    /// GPIOC and SYSCFG, LED as output, button as input, EXTI line 13
    /// falling-edge with stale pending state cleared and the line
    /// unmasked toward the CPU.
    pub fn bring_up(
        rcc: &'a device::rcc::RegisterBlock,
        gpiob: &'a device::gpio::RegisterBlock,
        gpioc: &'a device::gpio::RegisterBlock,
        syscfg: &'a device::syscfg::RegisterBlock,
        exti_blk: &'a device::exti::RegisterBlock,
    ) -> Result<Self, ConfigError> {
        rcc::enable_clocks(rcc, &[rcc::GPIOB, rcc::GPIOC, rcc::SYSCFG]);

        let led = Pin::new(gpiob, LED_PIN)?;
        led.set_mode(Mode::Output);

        let user_button = Pin::new(gpioc, BUTTON_PIN)?;
        user_button.set_mode(Mode::Input);

        exti::configure_line(syscfg, exti_blk, BUTTON_LINE, exti::Port::C, exti::Edge::Falling)?;

        Ok(Button { led })
    }

    /// Service one `EXTI15_10` invocation.
    ///
    /// For a pending line 13: toggle the LED, bump the counter, clear
    /// the pending bit. Spurious invocations (nothing pending, or only
    /// foreign lines pending) touch nothing.
    pub fn on_interrupt(&self, exti_blk: &device::exti::RegisterBlock, presses: &AtomicU32) {
        exti::service(exti_blk, 1 << BUTTON_LINE, |_line| {
            self.led.toggle();
            presses.fetch_add(1, Ordering::Relaxed);
        });
    }
}

/// Enable IRQ 40 in the NVIC. This is the final bring-up step, to be
/// called only once the handler's shared state is in place.
pub fn enable_interrupt(nvic_blk: &device::nvic::RegisterBlock) {
    nvic::enable_irq(nvic_blk, exti::EXTI15_10_IRQ);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::reg;
    use crate::testing::{block_contains, fake_block};

    struct Board {
        rcc: &'static device::rcc::RegisterBlock,
        gpiob: &'static device::gpio::RegisterBlock,
        gpioc: &'static device::gpio::RegisterBlock,
        syscfg: &'static device::syscfg::RegisterBlock,
        exti: &'static device::exti::RegisterBlock,
        nvic: &'static device::nvic::RegisterBlock,
    }

    fn board() -> Board {
        let b = Board {
            rcc: fake_block(),
            gpiob: fake_block(),
            gpioc: fake_block(),
            syscfg: fake_block(),
            exti: fake_block(),
            nvic: fake_block(),
        };
        // Ports reset to analog mode on this part.
        unsafe {
            b.gpiob.moder.write(0xFFFF_FFFF);
            b.gpioc.moder.write(0xFFFF_FFFF);
        }
        b
    }

    fn bring_up(b: &Board) -> Button<'static> {
        let button = Button::bring_up(b.rcc, b.gpiob, b.gpioc, b.syscfg, b.exti).unwrap();
        enable_interrupt(b.nvic);
        // The stale-pending W1C write parks its mask in the passive fake;
        // real hardware would read back as clear. Reset the word.
        unsafe { b.exti.pr1.write(0) };
        button
    }

    #[test]
    fn full_bring_up_reaches_every_register() {
        let b = board();
        bring_up(&b);

        // Clock gates: GPIOB, GPIOC on AHB4; SYSCFG on APB4.
        assert_eq!(b.rcc.ahb4enr.read() & (1 << 1), 1 << 1);
        assert_eq!(b.rcc.ahb4enr.read() & (1 << 2), 1 << 2);
        assert_eq!(b.rcc.apb4enr.read() & (1 << 1), 1 << 1);

        // PB0 output, PC13 input.
        assert_eq!(b.gpiob.moder.read() & 0b11, 0b01);
        assert_eq!(b.gpioc.moder.read() & (0b11 << 26), 0);

        // Line 13 muxed to port C, falling edge only, unmasked.
        assert_eq!(b.syscfg.exticr[3].read() >> 4 & 0xF, 0b0010);
        assert_eq!(b.exti.ftsr1.read() & (1 << 13), 1 << 13);
        assert_eq!(b.exti.rtsr1.read() & (1 << 13), 0);
        assert_eq!(b.exti.imr1.read() & (1 << 13), 1 << 13);

        // IRQ 40 enabled: ISER[1] bit 8.
        assert_eq!(b.nvic.iser[1].read(), 1 << 8);
    }

    #[test]
    fn clock_gates_open_before_the_first_port_write() {
        let b = board();
        reg::reset_writes();
        Button::bring_up(b.rcc, b.gpiob, b.gpioc, b.syscfg, b.exti).unwrap();

        let log = reg::writes();
        let port_gate = log
            .iter()
            .position(|w| {
                let both = (1 << 1) | (1 << 2);
                w.addr == b.rcc.ahb4enr.addr() && w.value & both == both
            })
            .unwrap();
        let syscfg_gate = log
            .iter()
            .position(|w| w.addr == b.rcc.apb4enr.addr() && w.value & (1 << 1) != 0)
            .unwrap();
        let first_port = log
            .iter()
            .position(|w| block_contains(b.gpiob, w.addr) || block_contains(b.gpioc, w.addr))
            .unwrap();
        let first_syscfg = log
            .iter()
            .position(|w| block_contains(b.syscfg, w.addr))
            .unwrap();
        assert!(port_gate < first_port);
        assert!(syscfg_gate < first_syscfg);
    }

    #[test]
    fn bring_up_twice_leaves_the_same_state() {
        let b = board();
        bring_up(&b);
        let snapshot = (
            b.rcc.ahb4enr.read(),
            b.rcc.apb4enr.read(),
            b.gpiob.moder.read(),
            b.gpioc.moder.read(),
            b.syscfg.exticr[3].read(),
            b.exti.ftsr1.read(),
            b.exti.rtsr1.read(),
            b.exti.imr1.read(),
            b.nvic.iser[1].read(),
        );
        bring_up(&b);
        assert_eq!(
            snapshot,
            (
                b.rcc.ahb4enr.read(),
                b.rcc.apb4enr.read(),
                b.gpiob.moder.read(),
                b.gpioc.moder.read(),
                b.syscfg.exticr[3].read(),
                b.exti.ftsr1.read(),
                b.exti.rtsr1.read(),
                b.exti.imr1.read(),
                b.nvic.iser[1].read(),
            )
        );
    }

    #[test]
    fn press_toggles_led_and_counts() {
        let b = board();
        let button = bring_up(&b);
        let presses = AtomicU32::new(0);

        // Hardware latches the falling edge.
        unsafe { b.exti.pr1.write(1 << 13) };
        button.on_interrupt(b.exti, &presses);

        assert_eq!(b.gpiob.odr.read() & 1, 1);
        assert_eq!(presses.load(Ordering::Relaxed), 1);
        // The pending bit got its W1C write (the passive fake holds the
        // written mask).
        assert_eq!(b.exti.pr1.read(), 1 << 13);

        unsafe { b.exti.pr1.write(1 << 13) };
        button.on_interrupt(b.exti, &presses);
        assert_eq!(b.gpiob.odr.read() & 1, 0);
        assert_eq!(presses.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn spurious_interrupt_touches_nothing() {
        let b = board();
        let button = bring_up(&b);
        let presses = AtomicU32::new(0);

        button.on_interrupt(b.exti, &presses);

        assert_eq!(b.gpiob.odr.read(), 0);
        assert_eq!(presses.load(Ordering::Relaxed), 0);
        assert_eq!(b.exti.pr1.read(), 0);
    }

    #[test]
    fn foreign_pending_line_is_left_alone() {
        let b = board();
        let button = bring_up(&b);
        let presses = AtomicU32::new(0);

        unsafe { b.exti.pr1.write(1 << 11) };
        button.on_interrupt(b.exti, &presses);

        assert_eq!(presses.load(Ordering::Relaxed), 0);
        assert_eq!(b.exti.pr1.read(), 1 << 11);
    }
}
