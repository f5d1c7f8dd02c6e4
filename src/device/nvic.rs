//! NVIC interrupt set-enable registers, 0xE000_E100.
//!
//! Only ISER is mapped; the drivers never disable or re-prioritise
//! interrupts. Each register is write-1-to-set, one bit per IRQ.

use super::reg::Reg;

#[repr(C)]
pub struct RegisterBlock {
    pub iser: [Reg; 8],
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
