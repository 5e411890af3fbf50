//! Clock management module
//!
//! This module provides the [`EncodedTime`] value type and the [`TimeCodec`]
//! that turns encoded values back into calendar timestamps.

pub mod codec;
pub mod encoded;

// Re-export main types
pub use codec::{INVALID_TEXT, TimeCodec};
pub use encoded::EncodedTime;
