//! Register mutations.
//!
//! Each [`Operation`] wraps one of four [`OperationKind`] variants together
//! with the description shown to the player. The description is rendered once
//! at construction and never recomputed.

use std::fmt;

use crate::register::{RegisterBank, RegisterId};

/// The four mutation kinds a drill can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `target += amount`
    AddConstant { target: RegisterId, amount: i64 },
    /// `target += source`
    AddRegisterInto {
        source: RegisterId,
        target: RegisterId,
    },
    /// `target *= source`
    MultiplyRegisterBy {
        source: RegisterId,
        target: RegisterId,
    },
    /// `target = value`
    SetConstant { target: RegisterId, value: i64 },
}

impl OperationKind {
    /// Register written by this operation.
    pub fn target(&self) -> RegisterId {
        match *self {
            OperationKind::AddConstant { target, .. }
            | OperationKind::AddRegisterInto { target, .. }
            | OperationKind::MultiplyRegisterBy { target, .. }
            | OperationKind::SetConstant { target, .. } => target,
        }
    }

    /// Register read by this operation, if any.
    pub fn source(&self) -> Option<RegisterId> {
        match *self {
            OperationKind::AddRegisterInto { source, .. }
            | OperationKind::MultiplyRegisterBy { source, .. } => Some(source),
            OperationKind::AddConstant { .. } | OperationKind::SetConstant { .. } => None,
        }
    }

    fn describe(&self) -> String {
        match *self {
            OperationKind::AddConstant { target, amount } => {
                format!("Add {amount} to register {target}")
            }
            OperationKind::AddRegisterInto { source, target } => {
                format!("Add {source} into {target}")
            }
            OperationKind::MultiplyRegisterBy { source, target } => {
                format!("Multiply {target} by {source}")
            }
            OperationKind::SetConstant { target, value } => format!("Set {target} to {value}"),
        }
    }
}

/// An immutable register mutation with its display text.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    description: String,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        let description = kind.describe();
        Self { kind, description }
    }

    pub fn add_constant(target: RegisterId, amount: i64) -> Self {
        Self::new(OperationKind::AddConstant { target, amount })
    }

    pub fn add_register_into(source: RegisterId, target: RegisterId) -> Self {
        Self::new(OperationKind::AddRegisterInto { source, target })
    }

    pub fn multiply_register_by(source: RegisterId, target: RegisterId) -> Self {
        Self::new(OperationKind::MultiplyRegisterBy { source, target })
    }

    pub fn set_constant(target: RegisterId, value: i64) -> Self {
        Self::new(OperationKind::SetConstant { target, value })
    }

    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    /// Human-readable instruction, e.g. `"Add 5 to register A"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply this operation's mutation to `bank`.
    pub fn execute(&self, bank: &mut RegisterBank) {
        match self.kind {
            OperationKind::AddConstant { target, amount } => {
                bank.put(target, bank.get(target) + amount as f64);
            }
            OperationKind::AddRegisterInto { source, target } => {
                bank.put(target, bank.get(target) + bank.get(source));
            }
            OperationKind::MultiplyRegisterBy { source, target } => {
                bank.put(target, bank.get(target) * bank.get(source));
            }
            OperationKind::SetConstant { target, value } => {
                bank.put(target, value as f64);
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(name: char) -> RegisterId {
        RegisterId::from_name(name).unwrap()
    }

    #[test]
    fn add_constant_accumulates() {
        let mut bank = RegisterBank::new();
        bank.fill(3.0);
        bank.apply(&Operation::add_constant(reg('A'), 7));
        bank.apply(&Operation::add_constant(reg('A'), 12));
        assert_eq!(bank.get(reg('A')), 3.0 + 7.0 + 12.0);
        assert_eq!(bank.get(reg('B')), 3.0);
    }

    #[test]
    fn add_register_into_reads_source() {
        let mut bank = RegisterBank::new();
        bank.apply(&Operation::set_constant(reg('A'), 4));
        bank.apply(&Operation::set_constant(reg('B'), 10));
        bank.apply(&Operation::add_register_into(reg('A'), reg('B')));
        assert_eq!(bank.get(reg('A')), 4.0);
        assert_eq!(bank.get(reg('B')), 14.0);
    }

    #[test]
    fn multiply_register_by_scales_target() {
        let mut bank = RegisterBank::new();
        bank.apply(&Operation::set_constant(reg('A'), 3));
        bank.apply(&Operation::set_constant(reg('B'), 5));
        bank.apply(&Operation::multiply_register_by(reg('A'), reg('B')));
        assert_eq!(bank.get(reg('B')), 15.0);
    }

    #[test]
    fn self_referencing_operations() {
        let mut bank = RegisterBank::new();
        bank.apply(&Operation::set_constant(reg('C'), 6));
        bank.apply(&Operation::add_register_into(reg('C'), reg('C')));
        assert_eq!(bank.get(reg('C')), 12.0);
        bank.apply(&Operation::multiply_register_by(reg('C'), reg('C')));
        assert_eq!(bank.get(reg('C')), 144.0);
    }

    #[test]
    fn set_constant_overwrites() {
        let mut bank = RegisterBank::new();
        bank.fill(99.0);
        bank.apply(&Operation::set_constant(reg('Z'), 0));
        assert_eq!(bank.get(reg('Z')), 0.0);
    }

    #[test]
    fn descriptions_name_registers() {
        assert_eq!(
            Operation::add_constant(reg('A'), 5).description(),
            "Add 5 to register A"
        );
        assert_eq!(
            Operation::add_register_into(reg('B'), reg('C')).description(),
            "Add B into C"
        );
        assert_eq!(
            Operation::multiply_register_by(reg('B'), reg('C')).description(),
            "Multiply C by B"
        );
        assert_eq!(
            Operation::set_constant(reg('D'), 42).to_string(),
            "Set D to 42"
        );
    }

    #[test]
    fn kind_reports_source_and_target() {
        let op = Operation::add_register_into(reg('E'), reg('F'));
        assert_eq!(op.kind().source(), Some(reg('E')));
        assert_eq!(op.kind().target(), reg('F'));
        assert_eq!(Operation::set_constant(reg('G'), 1).kind().source(), None);
    }
}
