//! Service layer for finance-ledger
//!
//! Input interpretation that sits between the CLI and the engine.

pub mod period;

pub use period::PeriodService;
