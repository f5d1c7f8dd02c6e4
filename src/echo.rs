//! USART3 console composition: PD8/PD9 in alternate-function 7 to the
//! ST-Link virtual COM port, polled echo loop.

use crate::device;
use crate::gpio::{Mode, Pin};
use crate::uart::{Error, Serial};
use crate::{rcc, ConfigError};

/// USART3_TX.
pub const TX_PIN: u8 = 8;
/// USART3_RX.
pub const RX_PIN: u8 = 9;
/// Alternate-function role connecting PD8/PD9 to USART3.
pub const USART3_AF: u8 = 7;
/// Line settings are 115 200 baud, 8N1.
pub const BAUD: u32 = 115_200;

/// Bring up the console: clock gates for GPIOD and USART3, both pins
/// into alternate-function 7, then the USART itself.
pub fn bring_up<'a>(
    rcc: &'a device::rcc::RegisterBlock,
    gpiod: &'a device::gpio::RegisterBlock,
    usart3: &'a device::usart::RegisterBlock,
    clock_hz: u32,
    baud: u32,
) -> Result<Serial<'a>, ConfigError> {
    rcc::enable_clocks(rcc, &[rcc::GPIOD, rcc::USART3]);

    for index in [TX_PIN, RX_PIN] {
        let pin = Pin::new(gpiod, index)?;
        pin.set_mode(Mode::Alternate);
        pin.set_alternate(USART3_AF)?;
    }

    Serial::new(usart3, clock_hz, baud)
}

/// One pass of the echo loop: receive a byte, send it back, and follow a
/// carriage return with a line feed so terminals advance a line on
/// Enter. Line errors bubble up with the byte dropped.
pub fn echo_once(serial: &mut Serial<'_>) -> Result<u8, Error> {
    let byte = serial.receive_byte()?;
    serial.send_byte(byte);
    if byte == b'\r' {
        serial.send_byte(b'\n');
    }
    Ok(byte)
}
