//! Core error types for zonestamp
//!
//! This module defines the error types returned by fallible codec operations.

use core::fmt;

/// Part of a calendar timestamp that failed validation during encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The UTC instant precedes the epoch or exceeds the largest encodable second
    Instant,
    /// The UTC offset is not a whole minute or exceeds ±17:03
    Offset,
}

impl Component {
    /// Returns the component name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Offset => "offset",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for codec operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeError {
    /// A timestamp component falls outside the representable bounds
    OutOfRange(Component),
    /// An offset mutation was given a non-whole-minute or out-of-range offset
    InvalidOffset,
}

impl TimeError {
    /// Returns true if the error was caused by the offset, whichever operation produced it
    pub const fn is_offset_error(&self) -> bool {
        matches!(self, Self::OutOfRange(Component::Offset) | Self::InvalidOffset)
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "Encoding",
            Self::InvalidOffset => "Mutation",
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(component) => {
                write!(f, "{component} is outside the encodable range")
            }
            Self::InvalidOffset => {
                f.write_str("offset must be a whole number of minutes within ±17:03")
            }
        }
    }
}

impl core::error::Error for TimeError {}

/// Result type for codec operations
pub type TimeResult<T> = Result<T, TimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_classification() {
        assert!(TimeError::InvalidOffset.is_offset_error());
        assert!(TimeError::OutOfRange(Component::Offset).is_offset_error());
        assert!(!TimeError::OutOfRange(Component::Instant).is_offset_error());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(TimeError::OutOfRange(Component::Instant).category(), "Encoding");
        assert_eq!(TimeError::InvalidOffset.category(), "Mutation");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TimeError::OutOfRange(Component::Instant).to_string(),
            "instant is outside the encodable range"
        );
        assert_eq!(
            TimeError::InvalidOffset.to_string(),
            "offset must be a whole number of minutes within ±17:03"
        );
    }
}
