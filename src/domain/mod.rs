//! Domain types for series tracking with strong typing.
//!
//! Follows the Newtype pattern so a series id cannot be confused with a
//! raw counter such as an episode number or a score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status assigned to a series when none is supplied.
pub const DEFAULT_STATUS: &str = "To Watch";

/// Unique identifier for a tracked series, assigned by the store.
///
/// # Examples
///
/// ```rust
/// use series_tracker::domain::SeriesId;
///
/// let id = SeriesId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeriesId(i32);

impl SeriesId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the underlying i32 value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SeriesId> for i32 {
    fn from(id: SeriesId) -> Self {
        id.0
    }
}

impl From<i32> for SeriesId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for SeriesId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for SeriesId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}
