//! NVIC interrupt enabling.

use crate::device::nvic::RegisterBlock;

/// Enable one IRQ line in the NVIC.
///
/// ISER is write-1-to-set and ignores zero bits, so a plain write of the
/// single bit is both atomic and non-destructive.
pub fn enable_irq(nvic: &RegisterBlock, irq: u8) {
    let reg = usize::from(irq / 32);
    unsafe { nvic.iser[reg].write(1 << u32::from(irq % 32)) };
}
