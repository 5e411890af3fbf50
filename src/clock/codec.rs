//! Decoding and formatting of encoded values
//!
//! Materializing a calendar timestamp needs a fixed-offset zone, which the
//! codec takes from the [`OffsetRegistry`] it was built with.

use alloc::string::String;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};

use crate::clock::EncodedTime;
use crate::zone::OffsetRegistry;

/// Text produced for the invalid sentinel
pub const INVALID_TEXT: &str = "0001-01-01T00:00:00Z";

/// Unix seconds of 0001-01-01T00:00:00Z, the zero calendar timestamp
const ZERO_DATE_UNIX_SECONDS: i64 = -62_135_596_800;

/// Bidirectional converter between calendar timestamps and [`EncodedTime`]
///
/// The codec itself is stateless; it only borrows the registry used to share
/// zone descriptors between decoded values.
///
/// # Example
/// ```rust
/// use zonestamp::prelude::*;
///
/// let registry = OffsetRegistry::new();
/// let codec = TimeCodec::new(&registry);
///
/// let time = EncodedTime::from_parts(1_234_567_890, 0, -7 * 3600);
/// let (datetime, valid) = codec.decode(time);
///
/// assert!(valid);
/// assert_eq!(datetime.offset().local_minus_utc(), -7 * 3600);
/// assert_eq!(codec.format(time), "2009-02-13T16:31:30.000000-07:00");
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeCodec<'r> {
    registry: &'r OffsetRegistry,
}

impl<'r> TimeCodec<'r> {
    /// Creates a codec drawing zone descriptors from `registry`
    pub const fn new(registry: &'r OffsetRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry backing this codec
    pub const fn registry(&self) -> &'r OffsetRegistry {
        self.registry
    }

    /// Encodes a calendar timestamp; see [`EncodedTime::encode`]
    pub fn encode<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> EncodedTime {
        EncodedTime::encode(datetime)
    }

    /// Decodes a value into a timestamp carrying its fixed offset
    ///
    /// # Returns
    /// The timestamp and `true`, or the zero calendar timestamp
    /// (`0001-01-01T00:00:00+00:00`) and `false` for the sentinel
    pub fn decode(&self, time: EncodedTime) -> (DateTime<FixedOffset>, bool) {
        match self.to_datetime(time) {
            Some(datetime) => (datetime, true),
            None => (zero_datetime(), false),
        }
    }

    /// Decodes a value, or returns `None` for the sentinel
    pub fn to_datetime(&self, time: EncodedTime) -> Option<DateTime<FixedOffset>> {
        let zone = self.registry.zone(time.offset_field())?;
        let utc = time.to_utc()?;
        Some(utc.with_timezone(&zone.offset()))
    }

    /// Formats a value as RFC 3339 with microseconds
    ///
    /// A zero offset is written as `Z`. The sentinel formats as
    /// [`INVALID_TEXT`].
    pub fn format(&self, time: EncodedTime) -> String {
        match self.to_datetime(time) {
            Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::Micros, true),
            None => String::from(INVALID_TEXT),
        }
    }
}

impl TimeCodec<'static> {
    /// Returns a codec backed by the process-wide registry
    pub fn shared() -> Self {
        Self::new(OffsetRegistry::global())
    }
}

impl Default for TimeCodec<'static> {
    fn default() -> Self {
        Self::shared()
    }
}

fn zero_datetime() -> DateTime<FixedOffset> {
    DateTime::from_timestamp(ZERO_DATE_UNIX_SECONDS, 0)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .fixed_offset()
}
