//! Validation of transition tables and content pools.
//!
//! Checks use Stillwater's `Validation` type to accumulate ALL violations
//! instead of failing fast, so a broken table declaration is reported in
//! full at startup.
//!
//! # Example
//!
//! ```rust
//! use party_rounds::games::WouldYouRatherPhase;
//! use party_rounds::validation::{check_table, validate_catalog};
//!
//! assert!(check_table::<WouldYouRatherPhase>().is_ok());
//! assert!(validate_catalog().is_ok());
//! ```

pub mod rules;
pub mod startup;
pub mod violations;

pub use rules::{check_pool, check_table, validate_pool, validate_table};
pub use startup::validate_catalog;
pub use violations::{GameReport, PoolViolation, StartupError, TableViolation};
