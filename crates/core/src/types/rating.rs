//! Star rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`StarRating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 1..=5 range.
    #[error("rating must be between 1 and 5, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// A committed or previewed star rating.
///
/// Always within 1..=5; invalid values are rejected at construction, so
/// downstream code never re-validates.
///
/// ## Examples
///
/// ```
/// use shopglass_core::StarRating;
///
/// assert!(StarRating::new(5).is_ok());
/// assert!(StarRating::new(0).is_err());
/// assert!(StarRating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;
    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Create a `StarRating` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] when the value is outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl From<StarRating> for f64 {
    fn from(rating: StarRating) -> Self {
        Self::from(rating.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        for value in 1..=5 {
            assert_eq!(StarRating::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            StarRating::new(0),
            Err(RatingError::OutOfRange { value: 0 })
        ));
        assert!(matches!(
            StarRating::new(6),
            Err(RatingError::OutOfRange { value: 6 })
        ));
    }

    #[test]
    fn test_serde_as_number() {
        let rating = StarRating::new(4).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, "4");

        let parsed: StarRating = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, rating);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<StarRating>("0").is_err());
        assert!(serde_json::from_str::<StarRating>("6").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(StarRating::new(3).unwrap().to_string(), "3");
    }
}
