//! Reset and clock control (RCC), RM0433 §8.7. Base 0x5802_4400.

use super::reg::Reg;

/// The RCC register map through the bus clock-enable registers.
#[repr(C)]
pub struct RegisterBlock {
    /// Source control (0x00).
    pub cr: Reg,
    pub hsicfgr: Reg,
    pub crrcr: Reg,
    pub csicfgr: Reg,
    /// Clock configuration (0x10).
    pub cfgr: Reg,
    _reserved0: u32,
    pub d1cfgr: Reg,
    pub d2cfgr: Reg,
    pub d3cfgr: Reg,
    _reserved1: u32,
    pub pllckselr: Reg,
    pub pllcfgr: Reg,
    pub pll1divr: Reg,
    pub pll1fracr: Reg,
    pub pll2divr: Reg,
    pub pll2fracr: Reg,
    pub pll3divr: Reg,
    pub pll3fracr: Reg,
    _reserved2: u32,
    pub d1ccipr: Reg,
    pub d2ccip1r: Reg,
    pub d2ccip2r: Reg,
    pub d3ccipr: Reg,
    _reserved3: u32,
    pub cier: Reg,
    pub cifr: Reg,
    pub cicr: Reg,
    _reserved4: u32,
    /// Backup domain control (0x70).
    pub bdcr: Reg,
    pub csr: Reg,
    _reserved5: u32,
    pub ahb3rstr: Reg,
    pub ahb1rstr: Reg,
    pub ahb2rstr: Reg,
    pub ahb4rstr: Reg,
    pub apb3rstr: Reg,
    pub apb1lrstr: Reg,
    pub apb1hrstr: Reg,
    pub apb2rstr: Reg,
    pub apb4rstr: Reg,
    pub gcr: Reg,
    _reserved6: u32,
    pub d3amr: Reg,
    _reserved7: [u32; 9],
    /// Reset status (0xD0).
    pub rsr: Reg,
    pub ahb3enr: Reg,
    pub ahb1enr: Reg,
    pub ahb2enr: Reg,
    /// AHB4 clock enable (0xE0): GPIO ports live here.
    pub ahb4enr: Reg,
    pub apb3enr: Reg,
    /// APB1 low clock enable (0xE8): USART2/3, UART4/5/7/8.
    pub apb1lenr: Reg,
    pub apb1henr: Reg,
    pub apb2enr: Reg,
    /// APB4 clock enable (0xF4): SYSCFG among others.
    pub apb4enr: Reg,
}

// Every access is a volatile read or write; cross-context
// read-modify-write ordering is the drivers' bring-up/ISR discipline.
unsafe impl Sync for RegisterBlock {}
