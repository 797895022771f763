//! Utility module

pub mod memo;

pub use memo::Memo;
