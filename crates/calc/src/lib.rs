//! Calculator core shared by the desktop and web shells: a restricted
//! arithmetic evaluator and the in-memory history ledger.

pub mod error;
pub mod eval;
pub mod ledger;

pub use error::EvalError;
pub use eval::{evaluate, Value};
pub use ledger::{evaluate_into, CalculationRecord, HistoryLedger};
