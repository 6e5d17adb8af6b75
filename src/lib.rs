//! `pspblob` - Codec for Premium Speed-Profile binary blobs
//!
//! A Premium Speed-Profile (PSP) blob is a compact binary record describing
//! the expected driving speeds along a single directed road segment: two
//! mandatory mean speeds (working-days and weekend-days, in km/h) plus
//! optional per-day 24-hour speed profiles at a configurable temporal
//! resolution for any subset of the seven days of the week.
//!
//! # Example
//! ```
//! use pspblob::{BlobCodec, ProfileData};
//!
//! let mut days: [Option<Vec<f64>>; 7] = Default::default();
//! days[1] = Some(vec![52.0; 24]); // Monday, hourly bins
//! let data = ProfileData::with_profiles(81, 87, 60, days);
//!
//! let codec = BlobCodec::new();
//! let blob = codec.encode(&data).unwrap();
//!
//! let decoded = codec.decode(&blob).unwrap();
//! assert_eq!(decoded.week_day_speed(), 81);
//! assert_eq!(decoded.day_speeds(1).unwrap()[0], 52.0);
//! ```
//!
//! # Blob Format (version 1)
//!
//! | Offset | Width | Meaning |
//! |--------|-------|---------------------------------------------|
//! | 0      | 1     | format version (unsigned)                   |
//! | 1      | 1     | working-day mean speed in km/h              |
//! | 2      | 1     | weekend-day mean speed in km/h              |
//! | 3      | 1     | time-bin width in minutes (0 = 1440)        |
//! | 4      | 1     | days bit field, bit 0 = Sunday              |
//! | 5+     | ≥ 11  | zlib-compressed speed payload               |
//!
//! A blob without daily profiles ends after byte 2 and is exactly 3 bytes
//! long. Blobs with profiles carry the two header bytes plus the deflated
//! payload, so they are longer than 5 + 11 bytes (11 bytes being the minimal
//! zlib overhead of the 6 byte header and 5 byte footer).
//!
//! # Speed-Value Encoding
//!
//! The payload is a single continuous sequence over all present days in day
//! order (Sunday first), absent days simply skipped:
//! - each speed is quantized to a 10-bit floating-point code with 3 bits of
//!   exponent and 7 bits of mantissa ([`as_encoded`] exposes the effective
//!   value);
//! - only the very first code is stored absolutely; every further code is
//!   stored as the difference to its predecessor, with the difference chain
//!   crossing day boundaries;
//! - differences are mapped to unsigned values by ZigZag encoding and
//!   serialized as base-128 VarInts;
//! - the resulting byte stream is deflated as one zlib stream.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod codec;
mod constants;
mod data;
mod deflate;
mod error;
pub mod flexfloat;
mod header;
pub mod varint;
pub mod zigzag;

#[cfg(test)]
mod tests;

pub use codec::{as_encoded, has_supported_version, set_mean_speeds, to_text, BlobCodec};
pub use constants::VERSION;
pub use data::{BinFn, DailyProfiles, DaySpeeds, ProfileData};
pub use error::{BlobError, VarIntError};
pub use flexfloat::{MIN_NONZERO_INPUT_VALUE, MIN_NONZERO_OUTPUT_VALUE};
