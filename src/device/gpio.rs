//! General-purpose I/O port, RM0433 §11.4. One block per port,
//! 0x400 apart starting at GPIOA = 0x5802_0000.

use super::reg::Reg;

#[repr(C)]
pub struct RegisterBlock {
    /// Mode (0x00): two bits per pin, 00 input / 01 output / 10 alternate
    /// / 11 analog.
    pub moder: Reg,
    /// Output type (0x04): push-pull or open-drain.
    pub otyper: Reg,
    /// Output speed (0x08).
    pub ospeedr: Reg,
    /// Pull-up/pull-down (0x0C).
    pub pupdr: Reg,
    /// Input data (0x10); read-only in hardware.
    pub idr: Reg,
    /// Output data (0x14).
    pub odr: Reg,
    /// Bit set/reset (0x18); write-only, set bits in the low half, reset
    /// bits in the high half, atomic per write.
    pub bsrr: Reg,
    /// Configuration lock (0x1C).
    pub lckr: Reg,
    /// Alternate function low/high (0x20, 0x24): four bits per pin, pins
    /// 0-7 in `afr[0]`, pins 8-15 in `afr[1]`.
    pub afr: [Reg; 2],
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
