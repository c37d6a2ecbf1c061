//! Content item trait and intensity scale.

use super::error::IntensityError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Ordinal spiciness rating from 1 (mild) to 5 (extreme).
///
/// Only used for presentation; rotation never filters on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(1);
    pub const MAX: Intensity = Intensity(5);

    pub fn new(level: u8) -> Result<Self, IntensityError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(IntensityError::OutOfRange(level))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Intensity {
    type Error = IntensityError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

/// A prompt, question or card drawn from a content pool.
pub trait ContentItem: Clone + Debug {
    /// Identifier, unique within the item's pool.
    fn id(&self) -> &str;

    fn intensity(&self) -> Intensity {
        Intensity::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_accepts_one_through_five() {
        for level in 1..=5 {
            assert_eq!(Intensity::new(level).unwrap().level(), level);
        }
    }

    #[test]
    fn intensity_rejects_out_of_range() {
        assert_eq!(Intensity::new(0), Err(IntensityError::OutOfRange(0)));
        assert_eq!(Intensity::new(6), Err(IntensityError::OutOfRange(6)));
    }

    #[test]
    fn intensity_deserialization_is_checked() {
        let ok: Intensity = serde_json::from_str("3").unwrap();
        assert_eq!(ok.level(), 3);
        assert!(serde_json::from_str::<Intensity>("9").is_err());
    }

    #[test]
    fn intensity_orders_by_level() {
        assert!(Intensity::MIN < Intensity::MAX);
    }
}
