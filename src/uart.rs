//! Polled USART driver: blocking 8N1 byte I/O plus the `embedded-hal`
//! non-blocking serial traits underneath.
//!
//! The USART keeps its reset defaults for word length, parity and stop
//! bits, which is exactly 8N1; configuration only touches the baud
//! divisor and the enable bits, in the order the hardware demands (the
//! divisor is undefined if written while the peripheral is enabled).

use core::convert::Infallible;
use core::fmt;

use embedded_hal::serial;

use crate::device::usart::RegisterBlock;
use crate::ConfigError;

const CR1_UE: u32 = 1 << 0;
const CR1_RE: u32 = 1 << 2;
const CR1_TE: u32 = 1 << 3;

const ISR_PE: u32 = 1 << 0;
const ISR_FE: u32 = 1 << 1;
const ISR_NE: u32 = 1 << 2;
const ISR_ORE: u32 = 1 << 3;
const ISR_RXNE: u32 = 1 << 5;
const ISR_TC: u32 = 1 << 6;
const ISR_TXE: u32 = 1 << 7;

const ICR_PECF: u32 = 1 << 0;
const ICR_FECF: u32 = 1 << 1;
const ICR_NCF: u32 = 1 << 2;
const ICR_ORECF: u32 = 1 << 3;

/// Receive-side line error, cleared in hardware before it is reported.
/// The byte that arrived broken is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    Overrun,
    Framing,
    Noise,
    Parity,
}

/// A configured USART in asynchronous polled mode.
pub struct Serial<'a> {
    usart: &'a RegisterBlock,
}

impl<'a> Serial<'a> {
    /// Configure and enable the USART for `baud` from a `clock_hz` kernel
    /// clock.
    ///
    /// The divisor is the truncating quotient; callers accept the
    /// resulting rate error (about 0.1 % for 115 200 from 64 MHz). A
    /// quotient of zero or one that overflows the 16-bit BRR field is
    /// rejected.
    pub fn new(usart: &'a RegisterBlock, clock_hz: u32, baud: u32) -> Result<Self, ConfigError> {
        if baud == 0 {
            return Err(ConfigError::BaudDivisor);
        }
        let divisor = clock_hz / baud;
        if divisor == 0 || divisor > 0xFFFF {
            return Err(ConfigError::BaudDivisor);
        }

        unsafe {
            // BRR may only be written while the peripheral is disabled.
            usart.cr1.modify(|v| v & !CR1_UE);
            usart.brr.write(divisor);
            usart.cr1.modify(|v| v | CR1_TE | CR1_RE);
            usart.cr1.modify(|v| v | CR1_UE);
        }
        Ok(Serial { usart })
    }

    /// Block until the transmit register accepts `byte`.
    ///
    /// Returns once TDR has taken the byte; the frame may still be on
    /// the wire. Use [`serial::Write::flush`] to wait for transmission
    /// complete.
    pub fn send_byte(&mut self, byte: u8) {
        while self.usart.isr.read() & ISR_TXE == 0 {}
        unsafe { self.usart.tdr.write(u32::from(byte)) };
    }

    /// Send every byte of `s`.
    pub fn send_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.send_byte(byte);
        }
    }

    /// Block until a byte arrives or the line reports an error.
    pub fn receive_byte(&mut self) -> Result<u8, Error> {
        loop {
            match serial::Read::read(self) {
                Ok(byte) => return Ok(byte),
                Err(nb::Error::WouldBlock) => continue,
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }
}

impl serial::Read<u8> for Serial<'_> {
    type Error = Error;

    fn read(&mut self) -> nb::Result<u8, Error> {
        let isr = self.usart.isr.read();

        // Error flags first: clear the flag in hardware, drop the byte,
        // and let the caller decide what to do with the report.
        if isr & ISR_PE != 0 {
            unsafe { self.usart.icr.write(ICR_PECF) };
            return Err(nb::Error::Other(Error::Parity));
        }
        if isr & ISR_FE != 0 {
            unsafe { self.usart.icr.write(ICR_FECF) };
            return Err(nb::Error::Other(Error::Framing));
        }
        if isr & ISR_NE != 0 {
            unsafe { self.usart.icr.write(ICR_NCF) };
            return Err(nb::Error::Other(Error::Noise));
        }
        if isr & ISR_ORE != 0 {
            unsafe { self.usart.icr.write(ICR_ORECF) };
            return Err(nb::Error::Other(Error::Overrun));
        }

        if isr & ISR_RXNE != 0 {
            // Reading RDR clears RXNE in hardware.
            Ok((self.usart.rdr.read() & 0xFF) as u8)
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl serial::Write<u8> for Serial<'_> {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.isr.read() & ISR_TXE != 0 {
            unsafe { self.usart.tdr.write(u32::from(byte)) };
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.usart.isr.read() & ISR_TC != 0 {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl fmt::Write for Serial<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send_str(s);
        Ok(())
    }
}
