//! Immutable fixed-offset zone descriptor

use chrono::FixedOffset;

use crate::layout::{OFFSET_FIELD_COUNT, field_offset_seconds};

/// Fixed UTC offset attached to a decoded timestamp
///
/// A descriptor never follows daylight-saving rules: the location a value was
/// recorded in is unknown, so the offset stays exactly what was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneDescriptor {
    field: u16,
    offset: FixedOffset,
}

impl ZoneDescriptor {
    /// Builds the descriptor for a biased offset field
    ///
    /// Returns `None` for the reserved zero field and for values wider than
    /// eleven bits.
    pub fn from_field(field: u16) -> Option<Self> {
        if field == 0 || usize::from(field) > OFFSET_FIELD_COUNT {
            return None;
        }
        let offset = FixedOffset::east_opt(field_offset_seconds(field))?;
        Some(Self { field, offset })
    }

    /// Returns the biased offset field this descriptor was built from
    pub const fn field(&self) -> u16 {
        self.field
    }

    /// Returns the chrono offset
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the offset east of UTC in seconds
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Returns the zone name, which is always empty for fixed offsets
    pub const fn name(&self) -> &'static str {
        ""
    }
}

impl From<ZoneDescriptor> for FixedOffset {
    fn from(zone: ZoneDescriptor) -> Self {
        zone.offset
    }
}

impl From<&ZoneDescriptor> for FixedOffset {
    fn from(zone: &ZoneDescriptor) -> Self {
        zone.offset
    }
}
