//! Error types for blob encoding and decoding operations.

use std::fmt;

/// Error returned when encoding or decoding a blob fails.
///
/// Every variant describes invalid input of one of three kinds: a domain
/// violation on the data handed to the encoder, malformed wire data handed
/// to the decoder, or a zlib failure on the profile payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlobError {
    /// Blob format version is newer than this codec supports
    UnsupportedVersion { version: u8 },
    /// Blob is too short to contain the claimed sections
    BufferTooShort { expected: usize, actual: usize },
    /// A profile speed is NaN, negative or above 255 km/h
    SpeedOutOfRange { day: u8, bin: usize, speed: f64 },
    /// A present day's bin count does not match the time resolution
    BinCountMismatch {
        day: u8,
        time_resolution_minutes: u16,
        expected: usize,
        actual: usize,
    },
    /// Time resolution does not fit into the resolution byte
    ResolutionTooLarge { time_resolution_minutes: u16 },
    /// Time resolution is zero or does not evenly divide a day
    InvalidResolution { time_resolution_minutes: u16 },
    /// A VarInt-encoded value ran over three bytes
    VarIntOverlong,
    /// The payload ended in the middle of a daily profile
    TruncatedProfile { day: u8, bin: usize },
    /// The profile payload is not a valid zlib stream
    Inflate,
    /// Compressing the profile payload failed
    Deflate,
}

/// Error returned when reading a single VarInt-encoded value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarIntError {
    /// Input ended before the final byte of the value
    Truncated,
    /// Continuation flag still set after three bytes
    Overlong,
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { version } => {
                write!(f, "premium profile blob version {version} is not supported")
            }
            Self::BufferTooShort { expected, actual } => {
                write!(f, "blob too short: expected at least {expected} bytes, got {actual}")
            }
            Self::SpeedOutOfRange { day, bin, speed } => {
                write!(
                    f,
                    "speed {speed} at day {day} bin {bin} is outside the encodable range [0, 255]"
                )
            }
            Self::BinCountMismatch {
                day,
                time_resolution_minutes,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "time bins count for day {day} does not match the time resolution of \
                     {time_resolution_minutes} minutes: expecting {expected} bins, got {actual}"
                )
            }
            Self::ResolutionTooLarge { time_resolution_minutes } => {
                write!(
                    f,
                    "time resolution {time_resolution_minutes} is too big to be written into one byte"
                )
            }
            Self::InvalidResolution { time_resolution_minutes } => {
                write!(
                    f,
                    "time resolution {time_resolution_minutes} does not evenly divide the 1440 minutes of a day"
                )
            }
            Self::VarIntOverlong => {
                write!(f, "unexpected number of bytes in VarInt-encoded value")
            }
            Self::TruncatedProfile { day, bin } => {
                write!(f, "unexpected end of blob while reading day {day} bin {bin}")
            }
            Self::Inflate => write!(f, "profile payload is not a valid zlib stream"),
            Self::Deflate => write!(f, "unable to deflate profile payload"),
        }
    }
}

impl std::error::Error for BlobError {}

impl fmt::Display for VarIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "input ended inside a VarInt-encoded value"),
            Self::Overlong => write!(f, "unexpected number of bytes in VarInt-encoded value"),
        }
    }
}

impl std::error::Error for VarIntError {}
