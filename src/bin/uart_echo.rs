//! Character echo over the ST-Link virtual COM port.
//!
//! USART3 on PD8/PD9 at 115 200 baud, 8N1. Open a serial terminal on the
//! board's VCP, type, and every character comes straight back; Enter
//! gets a line feed appended.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod app {
    use cortex_m_rt::entry;
    use panic_halt as _;

    use stm32h753zi_bare_drivers::device;
    use stm32h753zi_bare_drivers::echo;

    #[entry]
    fn main() -> ! {
        let p = device::Peripherals::take().unwrap();

        let mut serial =
            echo::bring_up(p.rcc, p.gpiod, p.usart3, device::HSI_HZ, echo::BAUD).unwrap();

        serial.send_str("Hello from STM32H753 UART!\r\n");
        serial.send_str("Type something and I'll echo it back:\r\n");

        loop {
            // A line error drops the broken byte; keep echoing.
            let _ = echo::echo_once(&mut serial);
        }
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {}
