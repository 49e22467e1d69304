//! The register bank: 26 named numeric slots, `A` through `Z`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::operation::Operation;

/// Number of registers in a bank.
pub const REGISTER_COUNT: usize = 26;

/// A validated register index, displayed as its letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RegisterId(u8);

impl RegisterId {
    /// Build a register id from a 0-based index.
    pub fn new(index: usize) -> Result<Self, DrillError> {
        if index < REGISTER_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(DrillError::InvalidRegister(index))
        }
    }

    /// Build a register id from its letter name (case-insensitive).
    pub fn from_name(name: char) -> Result<Self, DrillError> {
        let upper = name.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper as u8 - b'A'))
        } else {
            Err(DrillError::InvalidRegisterName(name))
        }
    }

    /// 0-based index into the bank.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter name of this register.
    pub fn name(self) -> char {
        (b'A' + self.0) as char
    }

    /// All registers in bank order.
    pub fn all() -> impl Iterator<Item = RegisterId> {
        (0..REGISTER_COUNT as u8).map(RegisterId)
    }
}

impl TryFrom<usize> for RegisterId {
    type Error = DrillError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<RegisterId> for usize {
    fn from(id: RegisterId) -> usize {
        id.index()
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed-size bank of real-valued registers.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterBank {
    values: [f64; REGISTER_COUNT],
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank {
    /// A bank with every register at zero.
    pub fn new() -> Self {
        Self {
            values: [0.0; REGISTER_COUNT],
        }
    }

    /// Replace all 26 slots.
    pub fn set(&mut self, values: [f64; REGISTER_COUNT]) {
        self.values = values;
    }

    /// Set every register to the same value.
    pub fn fill(&mut self, value: f64) {
        self.values = [value; REGISTER_COUNT];
    }

    pub fn get(&self, register: RegisterId) -> f64 {
        self.values[register.index()]
    }

    /// Apply an operation's mutation to this bank.
    pub fn apply(&mut self, operation: &Operation) {
        operation.execute(self);
    }

    /// Overwrite a single register. Only operations call this.
    pub(crate) fn put(&mut self, register: RegisterId, value: f64) {
        self.values[register.index()] = value;
    }

    /// Snapshot of all register values in bank order.
    pub fn values(&self) -> &[f64; REGISTER_COUNT] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_names_span_alphabet() {
        let names: String = RegisterId::all().map(|r| r.name()).collect();
        assert_eq!(names, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(RegisterId::new(26), Err(DrillError::InvalidRegister(26)));
        assert!(RegisterId::new(25).is_ok());
    }

    #[test]
    fn from_name_accepts_lowercase() {
        assert_eq!(RegisterId::from_name('c').unwrap().index(), 2);
        assert_eq!(
            RegisterId::from_name('1'),
            Err(DrillError::InvalidRegisterName('1'))
        );
    }

    #[test]
    fn new_bank_is_zeroed() {
        let bank = RegisterBank::new();
        assert!(bank.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_replaces_all_slots() {
        let mut bank = RegisterBank::new();
        let mut values = [0.0; REGISTER_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64 * 1.5;
        }
        bank.set(values);
        assert_eq!(bank.get(RegisterId::new(4).unwrap()), 6.0);
        assert_eq!(bank.values(), &values);
    }

    #[test]
    fn fill_sets_every_register() {
        let mut bank = RegisterBank::new();
        bank.fill(12.0);
        assert!(RegisterId::all().all(|r| bank.get(r) == 12.0));
    }

    #[test]
    fn register_id_serializes_as_index() {
        let id = RegisterId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        assert!(serde_json::from_str::<RegisterId>("30").is_err());
    }
}
