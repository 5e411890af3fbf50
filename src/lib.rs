#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Sortable 64-bit timestamps that remember their UTC offset**
//!
//! zonestamp packs a UTC instant with microsecond precision and the local UTC
//! offset it was recorded at into a single `u64`. Comparing two encoded values
//! as integers orders them by UTC instant, then by offset, so they can be used
//! directly as keys in databases and messages exchanged between locations with
//! different offsets.
//!
//! ## Features
//!
//! - **Compact** - one `u64` per timestamp, no allocation to encode
//! - **Totally Ordered** - integer order equals chronological order
//! - **Offset Aware** - the original local offset survives the round trip
//! - **Sentinel Friendly** - zero is the reserved invalid value
//! - **`no_std`** - only `alloc` is required
//!
//! ## Feature Overview
//!
//! - `std` - host clock access through [`EncodedTime::now`](clock::EncodedTime)
//! - `serde` - serialization as the raw `u64`
//! - `all` - every feature above
//!
//! ## Layout
//!
//! | Bits | Field | Meaning |
//! |------|-------|---------|
//! | 63..11 | micros | microseconds since 1970-01-01T00:00:00Z |
//! | 10..0 | offset | offset in minutes + 1024, `0` = invalid |
//!
//! Encodable instants range from the Unix epoch to the end of Unix second
//! 9 007 199 253 (mid-2255); offsets range from `-17:03` to `+17:03` in whole
//! minutes.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{DateTime, FixedOffset};
//! use zonestamp::prelude::*;
//!
//! fn example() -> Result<(), TimeError> {
//!     let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
//!     let recorded = DateTime::from_timestamp(1_700_000_000, 250_000_000)
//!         .unwrap()
//!         .with_timezone(&tokyo);
//!
//!     // Store the raw integer anywhere a u64 fits
//!     let mut time = EncodedTime::try_encode(&recorded)?;
//!     let raw = time.to_raw();
//!
//!     // Restore it and view it from another offset
//!     time = EncodedTime::from_raw(raw);
//!     time.set_offset_seconds(-5 * 3600)?;
//!     assert_eq!(time.to_string(), "2023-11-14T17:13:20.250000-05:00");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::precedence)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Core infrastructure modules
pub mod error;
pub mod layout;

// Codec modules
pub mod clock;
pub mod zone;

/// Prelude module of zonestamp
///
/// Convenient re-exports for common zonestamp types
pub mod prelude {

    // Re-export error types
    pub use crate::error::{Component, TimeError, TimeResult};

    // Re-export clock types
    pub use crate::clock::{EncodedTime, TimeCodec};

    // Re-export zone types
    pub use crate::zone::{OffsetRegistry, ZoneDescriptor};
}
