//! Pin-level GPIO configuration and I/O.

use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};

use crate::device::gpio::RegisterBlock;
use crate::ConfigError;

/// Pin mode, as encoded in the two-bit MODER field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Input = 0b00,
    Output = 0b01,
    Alternate = 0b10,
    Analog = 0b11,
}

/// One pin of one GPIO port.
///
/// Construction validates the index; everything after that operates on
/// the port registers through volatile accesses.
pub struct Pin<'a> {
    port: &'a RegisterBlock,
    index: u8,
}

impl<'a> Pin<'a> {
    pub fn new(port: &'a RegisterBlock, index: u8) -> Result<Self, ConfigError> {
        if index > 15 {
            return Err(ConfigError::PinIndex);
        }
        Ok(Pin { port, index })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    fn mask(&self) -> u32 {
        1 << self.index
    }

    /// Set the pin mode. The two-bit field is cleared and rewritten in a
    /// single register write, so the pin never passes through a stray
    /// intermediate mode.
    pub fn set_mode(&self, mode: Mode) {
        let shift = u32::from(self.index) * 2;
        unsafe {
            self.port
                .moder
                .modify(|v| (v & !(0b11 << shift)) | ((mode as u32) << shift))
        };
    }

    /// Select the alternate-function role (0 to 15) for this pin. Takes
    /// effect only once the pin mode is [`Mode::Alternate`].
    pub fn set_alternate(&self, role: u8) -> Result<(), ConfigError> {
        if role > 15 {
            return Err(ConfigError::AlternateFunction);
        }
        let reg = usize::from(self.index / 8);
        let shift = u32::from(self.index % 8) * 4;
        unsafe {
            self.port.afr[reg].modify(|v| (v & !(0xF << shift)) | (u32::from(role) << shift))
        };
        Ok(())
    }

    /// Drive the pin high through BSRR, atomically.
    pub fn set_high(&self) {
        unsafe { self.port.bsrr.write(self.mask()) };
    }

    /// Drive the pin low through BSRR, atomically.
    pub fn set_low(&self) {
        unsafe { self.port.bsrr.write(self.mask() << 16) };
    }

    /// Flip the output latch with a read-modify-write on ODR.
    ///
    /// Not atomic: the caller must be the only context writing this
    /// port's ODR while toggling (the interrupt-handler discipline the
    /// button driver documents). Contexts that cannot guarantee that
    /// should pair [`Pin::is_set_high`] with the BSRR writers instead.
    pub fn toggle(&self) {
        unsafe { self.port.odr.modify(|v| v ^ self.mask()) };
    }

    /// Input level from IDR.
    pub fn is_high(&self) -> bool {
        self.port.idr.read() & self.mask() != 0
    }

    pub fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Output latch state from ODR.
    pub fn is_set_high(&self) -> bool {
        self.port.odr.read() & self.mask() != 0
    }
}

impl OutputPin for Pin<'_> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        Pin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Pin::set_low(self);
        Ok(())
    }
}

impl ToggleableOutputPin for Pin<'_> {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        Pin::toggle(self);
        Ok(())
    }
}

impl InputPin for Pin<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_high(self))
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_low(self))
    }
}
