//! System configuration controller, RM0433 §12.3. Base 0x5800_0400.

use super::reg::Reg;

#[repr(C)]
pub struct RegisterBlock {
    _reserved0: u32,
    /// Peripheral mode configuration (0x04).
    pub pmcr: Reg,
    /// External interrupt configuration (0x08-0x14): `exticr[n/4]` holds
    /// the port selector for EXTI line `n` in the four-bit field at
    /// `(n % 4) * 4`.
    pub exticr: [Reg; 4],
    pub cfgr: Reg,
    _reserved1: u32,
    pub cccsr: Reg,
    pub ccvr: Reg,
    pub cccr: Reg,
    pub pwrcr: Reg,
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
