use core::fmt;

use crate::header::PacketHeader;

/// Parameter that failed range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Routine,
    Palette,
    /// Multi-color routine requested without a palette
    MissingPalette,
    /// Palette supplied for a routine that does not use one
    UnexpectedPalette,
    ColorChannel,
    Brightness,
    Speed,
    ColorCount,
    IdleTimeout,
}

impl Parameter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Palette => "palette",
            Self::MissingPalette => "missing palette",
            Self::UnexpectedPalette => "unexpected palette",
            Self::ColorChannel => "color channel",
            Self::Brightness => "brightness",
            Self::Speed => "speed",
            Self::ColorCount => "color count",
            Self::IdleTimeout => "idle timeout",
        }
    }
}

/// Failure to encode or decode a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Value outside its documented range
    InvalidParameter(Parameter),
    /// Custom color index not below the array capacity
    IndexOutOfRange { index: i32, capacity: usize },
    /// Wrong number of fields for the header
    ArityMismatch {
        header: PacketHeader,
        expected: usize,
        found: usize,
    },
    /// Header id is not a known packet kind
    UnknownHeader(i32),
    /// Field is not a decimal integer
    MalformedField,
    /// Packet exceeds the reassembly buffer
    PacketTooLong,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(parameter) => {
                write!(f, "invalid parameter: {}", parameter.as_str())
            }
            Self::IndexOutOfRange { index, capacity } => {
                write!(f, "index {index} out of range for capacity {capacity}")
            }
            Self::ArityMismatch {
                header,
                expected,
                found,
            } => write!(
                f,
                "{} expects {expected} parameters, found {found}",
                header.as_str()
            ),
            Self::UnknownHeader(id) => write!(f, "unknown header {id}"),
            Self::MalformedField => f.write_str("malformed field"),
            Self::PacketTooLong => f.write_str("packet too long"),
        }
    }
}

/// Reason the device state refused an otherwise well-formed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedReason {
    /// Used color count exceeds the configured capacity
    CountAboveCapacity { count: usize, capacity: usize },
    /// Custom color index not below the configured capacity
    IndexAboveCapacity { index: usize, capacity: usize },
    /// Capacity outside `1..=MAX_CUSTOM_COLORS`
    CapacityOutOfRange { capacity: usize, max: usize },
    /// Palette has no active colors
    EmptyPalette,
    /// Command violates a static bound
    Invalid(ProtocolError),
}

impl fmt::Display for RejectedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountAboveCapacity { count, capacity } => {
                write!(f, "color count {count} exceeds capacity {capacity}")
            }
            Self::IndexAboveCapacity { index, capacity } => {
                write!(f, "color index {index} exceeds capacity {capacity}")
            }
            Self::CapacityOutOfRange { capacity, max } => {
                write!(f, "capacity {capacity} outside 1..={max}")
            }
            Self::EmptyPalette => f.write_str("palette has no active colors"),
            Self::Invalid(error) => write!(f, "{error}"),
        }
    }
}
