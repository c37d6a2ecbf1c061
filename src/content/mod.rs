//! Content pools and rotation.
//!
//! Pools are static data handed in by the host application. Rotation picks
//! the next item for a mode without repeating until the mode is exhausted,
//! and decks serve swipe-card games a shuffled stack. All randomness comes
//! from a caller-supplied `rand::Rng`, so tests can use a seeded generator.

mod deck;
mod error;
mod item;
mod pool;
mod rotation;

pub use deck::Deck;
pub use error::{IntensityError, PoolError};
pub use item::{ContentItem, Intensity};
pub use pool::{ContentPool, DEFAULT_MODE};
pub use rotation::{select_next, select_next_where, Rotation, UsedIds};
