//! External interrupt/event controller, RM0433 §20.5. Base 0x5800_0000.
//!
//! The H7 splits the 88 event lines into three banks of trigger/mask
//! registers; only bank 1 (lines 0 to 31, where the GPIO lines live) is
//! driven by this crate, but the block is laid out through the CPU
//! pending register so the offsets match the manual.

use super::reg::Reg;

#[repr(C)]
pub struct RegisterBlock {
    /// Rising-trigger selection, lines 0-31 (0x00).
    pub rtsr1: Reg,
    /// Falling-trigger selection, lines 0-31 (0x04).
    pub ftsr1: Reg,
    /// Software interrupt event (0x08).
    pub swier1: Reg,
    pub d3pmr1: Reg,
    pub d3pcr1l: Reg,
    pub d3pcr1h: Reg,
    _reserved0: [u32; 2],
    pub rtsr2: Reg,
    pub ftsr2: Reg,
    pub swier2: Reg,
    pub d3pmr2: Reg,
    pub d3pcr2l: Reg,
    pub d3pcr2h: Reg,
    _reserved1: [u32; 2],
    pub rtsr3: Reg,
    pub ftsr3: Reg,
    pub swier3: Reg,
    pub d3pmr3: Reg,
    pub d3pcr3l: Reg,
    pub d3pcr3h: Reg,
    _reserved2: [u32; 10],
    /// CPU interrupt mask, lines 0-31 (0x80): 1 = unmasked.
    pub imr1: Reg,
    /// CPU event mask (0x84).
    pub emr1: Reg,
    /// CPU pending, lines 0-31 (0x88): set by hardware on a configured
    /// edge, cleared by writing 1.
    pub pr1: Reg,
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
