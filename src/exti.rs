//! External-interrupt line routing and servicing.
//!
//! A GPIO line reaches the CPU in three hops: SYSCFG selects which port
//! feeds the line, the EXTI edge detectors latch a pending bit, and the
//! NVIC dispatches the line's IRQ. Lines 10 to 15 share IRQ 40, so the
//! handler must check PR1 to see which line actually fired.

use crate::device::{exti, syscfg};
use crate::ConfigError;

/// IRQ number shared by EXTI lines 10 to 15 on this device.
pub const EXTI15_10_IRQ: u8 = 40;

/// GPIO port selector code as written into SYSCFG EXTICR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
}

/// Which signal edges latch the pending bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
    Both,
}

/// Route `line` from `port` to the CPU with the given edge trigger.
///
/// Order of operations: port mux, trigger selection (the unused edge is
/// explicitly cleared), a write-1-to-clear of any pending state left
/// over from reset, then the IMR1 unmask. The caller still has to enable
/// the line's IRQ in the NVIC, and should publish whatever state the
/// handler touches before doing so.
pub fn configure_line(
    syscfg: &syscfg::RegisterBlock,
    exti: &exti::RegisterBlock,
    line: u8,
    port: Port,
    edge: Edge,
) -> Result<(), ConfigError> {
    if line > 15 {
        return Err(ConfigError::ExtiLine);
    }
    let mask = 1u32 << line;
    let reg = usize::from(line / 4);
    let shift = u32::from(line % 4) * 4;

    unsafe {
        syscfg.exticr[reg].modify(|v| (v & !(0xF << shift)) | ((port as u32) << shift));

        match edge {
            Edge::Rising => {
                exti.rtsr1.modify(|v| v | mask);
                exti.ftsr1.modify(|v| v & !mask);
            }
            Edge::Falling => {
                exti.ftsr1.modify(|v| v | mask);
                exti.rtsr1.modify(|v| v & !mask);
            }
            Edge::Both => {
                exti.rtsr1.modify(|v| v | mask);
                exti.ftsr1.modify(|v| v | mask);
            }
        }

        exti.pr1.write(mask);
        exti.imr1.modify(|v| v | mask);
    }
    Ok(())
}

/// NVIC IRQ number serving a GPIO EXTI line.
pub fn irq_for_line(line: u8) -> Result<u8, ConfigError> {
    match line {
        0..=4 => Ok(6 + line),
        5..=9 => Ok(23),
        10..=15 => Ok(EXTI15_10_IRQ),
        _ => Err(ConfigError::ExtiLine),
    }
}

/// Dispatch one handler invocation.
///
/// Reads PR1 once and, for every line that is both pending and present
/// in `lines`, runs `on_line` and then clears that line's pending bit.
/// Clearing after the action keeps the action idempotent at the cost of
/// losing an edge that arrives while the handler is still running; a
/// pending bit left set would re-enter the handler forever, so every
/// serviced line is always cleared before return.
pub fn service<F: FnMut(u8)>(exti: &exti::RegisterBlock, lines: u32, mut on_line: F) {
    let pending = exti.pr1.read() & lines;
    if pending == 0 {
        return;
    }
    for line in 0..32 {
        let mask = 1u32 << line;
        if pending & mask != 0 {
            on_line(line);
            unsafe { exti.pr1.write(mask) };
        }
    }
}
