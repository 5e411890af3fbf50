//! Error handling module for zonestamp
//!
//! Encoding failures are normally reported through the invalid sentinel value;
//! the types here cover the typed variants of those operations and offset
//! mutation.

pub mod types;

// Re-export main types
pub use types::{Component, TimeError, TimeResult};
