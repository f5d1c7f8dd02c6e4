//! Universal synchronous/asynchronous receiver transmitter, RM0433 §48.7.
//! USART3 sits at 0x4000_4800 on APB1.

use super::reg::Reg;

#[repr(C)]
pub struct RegisterBlock {
    /// Control 1 (0x00): UE, TE, RE, word length, oversampling.
    pub cr1: Reg,
    /// Control 2 (0x04): stop bits.
    pub cr2: Reg,
    /// Control 3 (0x08): flow control, DMA.
    pub cr3: Reg,
    /// Baud rate (0x0C): kernel clock / baud, 16 bits at oversampling 16.
    pub brr: Reg,
    pub gtpr: Reg,
    pub rtor: Reg,
    pub rqr: Reg,
    /// Interrupt and status (0x1C); read-only in hardware.
    pub isr: Reg,
    /// Interrupt flag clear (0x20); write-1-to-clear.
    pub icr: Reg,
    /// Receive data (0x24); reading it clears RXNE.
    pub rdr: Reg,
    /// Transmit data (0x28).
    pub tdr: Reg,
    /// Prescaler (0x2C).
    pub presc: Reg,
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
