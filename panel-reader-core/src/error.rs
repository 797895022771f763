//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::Level;

/// Navigation layer error type
///
/// None of these are fatal: the navigator recovers from every variant by
/// clamping the cursor or speaking a generic utterance.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// Section index does not exist in the current section list
    #[error("Section not found: {0}")]
    SectionNotFound(usize),

    /// Index is outside the freshly computed count at that level
    #[error("Address out of range: {level} {index} (count {count})")]
    AddressOutOfRange {
        level: Level,
        index: usize,
        count: usize,
    },

    /// The adapter does not describe this level at this address
    #[error("Unsupported {0} address")]
    Unsupported(Level),

    /// Cached snapshot no longer matches the game (missing building, removed recipe, ...)
    #[error("Stale snapshot: {0}")]
    StaleSnapshot(String),

    /// Adapter bug (count/announce mismatch and similar)
    #[error("Adapter error: {0}")]
    Adapter(String),
}

impl NavError {
    /// Whether it is expected behavior (state drift between key presses) for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AddressOutOfRange { .. } | Self::StaleSnapshot(_) | Self::SectionNotFound(_) => {
                true
            }
            Self::Unsupported(_) | Self::Adapter(_) => false,
        }
    }

    /// Helper for adapters: check `index < count` at `level`.
    pub fn check_range(level: Level, index: usize, count: usize) -> NavResult<()> {
        if index < count {
            Ok(())
        } else {
            Err(Self::AddressOutOfRange {
                level,
                index,
                count,
            })
        }
    }
}

/// Navigation layer Result type alias
pub type NavResult<T> = std::result::Result<T, NavError>;
