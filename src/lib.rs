//! Register-level peripheral drivers for the NUCLEO-H753ZI board.
//!
//! Two small driver stacks over hand-written STM32H753 register blocks:
//!
//! - [`button`]: the USER button on PC13 routed through EXTI line 13 to
//!   `EXTI15_10_IRQHandler`, toggling the LED on PB0 and counting presses.
//! - [`echo`]: USART3 on PD8/PD9 (the ST-Link virtual COM port) at
//!   115 200 baud 8N1, polled byte I/O with a character echo loop.
//!
//! There is no PAC or HAL underneath; the register layouts in [`device`]
//! are written out against RM0433 and accessed through
//! [`device::reg::Reg`], a thin wrapper over `volatile_register::RW`.
//! Every driver function takes its register blocks as parameters, so the
//! whole crate is exercised by host-side tests against in-RAM register
//! images that also keep a log of every write.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod device;
pub mod echo;
pub mod exti;
pub mod gpio;
pub mod nvic;
pub mod rcc;
pub mod uart;

/// Configuration-time failure, reported synchronously to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Pin index outside `0..=15`.
    PinIndex,
    /// Alternate-function code outside `0..=15`.
    AlternateFunction,
    /// EXTI line with no GPIO routing on this device.
    ExtiLine,
    /// Baud divisor is zero or does not fit the 16-bit BRR field.
    BaudDivisor,
}
