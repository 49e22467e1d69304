//! regdrill-console — the collaborators around the session engine.
//!
//! Provides the file-backed level store, timeout-bounded line input, and
//! configuration loading used by the `regdrill` binary.

pub mod config;
pub mod error;
pub mod stdin;
pub mod store;

pub use config::{load_config_from, RegdrillConfig};
pub use error::StoreError;
pub use stdin::LineAnswers;
pub use store::FileLevelStore;
