//! regdrill-core — the register-drill session engine.
//!
//! A drill mutates a bank of 26 named registers through a stream of
//! arithmetic operations and periodically asks the player to recall one of
//! them before a deadline. This crate holds the register model, the
//! round/trial/session state machines, and level-driven generation. All I/O
//! goes through the traits in [`traits`].

pub mod error;
pub mod generator;
pub mod operation;
pub mod query;
pub mod register;
pub mod results;
pub mod round;
pub mod script;
pub mod session;
pub mod traits;
pub mod trial;

pub use error::DrillError;
pub use operation::{Operation, OperationKind};
pub use query::{Query, QueryOutcome};
pub use register::{RegisterBank, RegisterId, REGISTER_COUNT};
pub use results::{SessionReport, SessionResults};
pub use round::{Round, RoundItem, RoundOutcome};
pub use session::Session;
pub use trial::{Trial, TrialOutcome};
