//! Party Rounds: round state machines and content rotation for party games
//!
//! The crate holds the logic shared by a catalog of card-based party games
//! (Truth or Dare, Never Have I Ever, Would You Rather, Fuck Marry Kill,
//! True/False trivia, What If). Presentation is left to the host; what
//! lives here is pure and testable without a UI.
//!
//! # Core Concepts
//!
//! - **Phases**: each game declares a closed phase enum and a static
//!   transition table with [`round_phases!`]
//! - **Round machine**: one generic engine, [`RoundMachine`], enforces the
//!   table and keeps an append-only history
//! - **Content rotation**: [`select_next`] avoids repeats until a mode is
//!   exhausted, then loops; [`Deck`] serves shuffled swipe-card stacks
//! - **Session**: players, scores and winner, passed around explicitly
//! - **Validation**: tables and pools are checked once at startup
//!
//! # Example
//!
//! ```rust
//! use party_rounds::content::{select_next, ContentPool, UsedIds};
//! use party_rounds::core::RoundMachine;
//! use party_rounds::games::{NeverHaveIEverPhase as Nhie, Statement};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let pool: ContentPool<Statement> = ContentPool::from_json(
//!     r#"{ "original": [{ "id": "n1", "text": "been on a boat" }] }"#,
//! )
//! .unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut used = UsedIds::new();
//!
//! let machine = RoundMachine::<Nhie>::new().transition(Nhie::ShowStatement).unwrap();
//! let statement = select_next(&pool, "original", &used, &mut rng);
//! used.record(statement.id.as_str());
//!
//! assert_eq!(machine.current(), Nhie::ShowStatement);
//! assert_eq!(statement.text, "been on a boat");
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod content;
pub mod core;
pub mod games;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use content::{select_next, ContentItem, ContentPool, Deck, Rotation, UsedIds};
pub use core::{Phase, PhaseTimer, RoundError, RoundMachine, State};
pub use session::{Player, PlayerId, Session, SessionError};
pub use validation::{validate_catalog, StartupError};
