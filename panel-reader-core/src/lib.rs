//! Panel Reader Core Library
//!
//! Provides a screen-reader-style navigation engine for building panels, including:
//! - A four-level cursor (section, item, sub item, sub-sub item) driven by key commands
//! - The building adapter contract every building family implements
//! - Reusable worker assignment and upgrade sub-navigators
//! - Name search across the visible tree
//!
//! This library is platform-independent: speech output, sound cues and the live
//! simulation are reached only through the traits in [`traits`].

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{NavError, NavResult};
pub use services::{Navigator, PanelContext};
pub use traits::{AudioCueSink, BuildingAdapter, SpeechSink, UpgradeAccessor, WorkforceAccessor};
