//! Clock-gate control.
//!
//! Every peripheral register file is dead until its gate bit in the
//! matching RCC bus-enable register is set: writes are dropped and reads
//! return garbage, with no fault. All bring-up therefore starts here.

use crate::device::rcc::RegisterBlock;
use crate::device::reg::Reg;

/// Bus whose enable register carries a gate bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bus {
    Ahb4,
    Apb1L,
    Apb4,
}

/// A single clock gate: one bit in one bus-enable register.
#[derive(Clone, Copy, Debug)]
pub struct Gate {
    pub bus: Bus,
    pub bit: u8,
}

pub const GPIOB: Gate = Gate { bus: Bus::Ahb4, bit: 1 };
pub const GPIOC: Gate = Gate { bus: Bus::Ahb4, bit: 2 };
pub const GPIOD: Gate = Gate { bus: Bus::Ahb4, bit: 3 };
pub const SYSCFG: Gate = Gate { bus: Bus::Apb4, bit: 1 };
pub const USART3: Gate = Gate { bus: Bus::Apb1L, bit: 18 };

fn enable_reg(rcc: &RegisterBlock, bus: Bus) -> &Reg {
    match bus {
        Bus::Ahb4 => &rcc.ahb4enr,
        Bus::Apb1L => &rcc.apb1lenr,
        Bus::Apb4 => &rcc.apb4enr,
    }
}

/// Open the given clock gates, then read one enable register back and
/// discard the value.
///
/// The read-back is the settling delay RM0433 asks for between enabling
/// a peripheral clock and the first access to that peripheral; it also
/// keeps the enable write ordered ahead of whatever configuration
/// follows.
pub fn enable_clocks(rcc: &RegisterBlock, gates: &[Gate]) {
    for gate in gates {
        let reg = enable_reg(rcc, gate.bus);
        unsafe { reg.modify(|v| v | (1 << gate.bit)) };
    }
    if let Some(last) = gates.last() {
        let _ = enable_reg(rcc, last.bus).read();
    }
}
