//! Conversion between [`ProfileData`] and binary blobs.

use crate::constants::{
    safe_buffer_size, ALL_DAYS, MAX_SPEED_VALUE, MINUTES_PER_DAY, VERSION, ZLIB_BYTE_OVERHEAD,
};
use crate::data::{DaySpeeds, ProfileData};
use crate::deflate;
use crate::error::{BlobError, VarIntError};
use crate::flexfloat;
use crate::header::ProfileHeader;
use crate::varint::{self, ByteReader};
use crate::zigzag;

/// Codec turning [`ProfileData`] into binary blobs and back.
///
/// The codec itself is stateless; encode and decode are pure transformations
/// of their inputs and safe to call from multiple threads concurrently.
#[derive(Debug, Clone, Copy)]
pub struct BlobCodec {
    zip_payload: bool,
}

impl BlobCodec {
    /// Create a codec producing and expecting zlib-compressed payloads.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        BlobCodec { zip_payload: true }
    }

    /// Codec writing the profile payload uncompressed. Blobs on the wire are
    /// always compressed; this bypass exists for tests that want to inspect
    /// or hand-craft the plain payload.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn without_compression() -> Self {
        BlobCodec { zip_payload: false }
    }

    /// Encode the given data into a binary blob.
    ///
    /// Data without daily profiles encodes to exactly 3 bytes. Data with
    /// profiles is encoded via [`Self::encode_with`] over its dense rows.
    ///
    /// # Errors
    /// See [`Self::encode_with`].
    pub fn encode(&self, data: &ProfileData) -> Result<Vec<u8>, BlobError> {
        if data.has_daily_speeds() {
            self.encode_with(
                data.week_day_speed(),
                data.weekend_speed(),
                data.time_resolution_minutes(),
                |day| data.day_speeds(day),
            )
        } else {
            Ok(vec![VERSION, data.week_day_speed(), data.weekend_speed()])
        }
    }

    /// Encode a blob with daily profiles served by an arbitrary accessor.
    ///
    /// `day_speeds` is queried once per day index (0 = Sunday through 6 =
    /// Saturday); returning `None` or a profile with zero bins marks the day
    /// absent. The header and payload sections are always written, even if
    /// every day turns out to be absent.
    ///
    /// # Errors
    /// Fails if the resolution is zero, does not evenly divide 1440 or does
    /// not fit the resolution byte, if a present day's bin count does not
    /// match the resolution, or if any speed is NaN, negative or above 255.
    pub fn encode_with<A, F>(
        &self,
        week_day_speed: u8,
        weekend_speed: u8,
        time_resolution_minutes: u16,
        day_speeds: F,
    ) -> Result<Vec<u8>, BlobError>
    where
        A: DaySpeeds,
        F: Fn(u8) -> Option<A>,
    {
        let expected_bins = checked_bins_per_day(time_resolution_minutes)?;

        let mut present: Vec<(u8, A)> = Vec::with_capacity(ALL_DAYS.len());
        let mut days_bit_set = 0_u8;
        for day in ALL_DAYS {
            let Some(speeds) = day_speeds(day) else {
                continue;
            };
            let actual_bins = speeds.total_bins();
            if actual_bins == 0 {
                // an empty profile collapses to an absent day
                continue;
            }
            if actual_bins != expected_bins {
                return Err(BlobError::BinCountMismatch {
                    day,
                    time_resolution_minutes,
                    expected: expected_bins,
                    actual: actual_bins,
                });
            }
            days_bit_set |= ProfileHeader::day_mask(day);
            present.push((day, speeds));
        }

        let header = ProfileHeader::new(time_resolution_minutes, days_bit_set);
        let header_bytes = header.encode()?;

        let mut plain = Vec::with_capacity(safe_buffer_size(time_resolution_minutes));
        let mut last_speed: i16 = 0;
        for (day, speeds) in &present {
            last_speed = encode_speeds_for_day(&mut plain, *day, speeds, last_speed)?;
        }

        let payload = if self.zip_payload {
            let buffer_size = safe_buffer_size(time_resolution_minutes) + ZLIB_BYTE_OVERHEAD;
            deflate::compress(&plain, buffer_size).map_err(|_| BlobError::Deflate)?
        } else {
            plain
        };

        let mut blob = Vec::with_capacity(3 + header_bytes.len() + payload.len());
        blob.push(VERSION);
        blob.push(week_day_speed);
        blob.push(weekend_speed);
        blob.extend_from_slice(&header_bytes);
        blob.extend_from_slice(&payload);
        Ok(blob)
    }

    /// Decode a binary blob.
    ///
    /// # Errors
    /// Fails if the blob's version is newer than [`VERSION`], if the blob is
    /// shorter than its sections claim, if the payload is not a valid zlib
    /// stream, or if the decoded profile stream is malformed.
    pub fn decode(&self, blob: &[u8]) -> Result<ProfileData, BlobError> {
        if blob.len() < 3 {
            return Err(BlobError::BufferTooShort {
                expected: 3,
                actual: blob.len(),
            });
        }
        let version = blob[0];
        if version > VERSION {
            return Err(BlobError::UnsupportedVersion { version });
        }
        let week_day_speed = blob[1];
        let weekend_speed = blob[2];

        if blob.len() == 3 {
            return Ok(ProfileData::means_only(week_day_speed, weekend_speed));
        }
        if blob.len() < 5 {
            return Err(BlobError::BufferTooShort {
                expected: 5,
                actual: blob.len(),
            });
        }

        let header = ProfileHeader::decode(blob[3], blob[4]);
        let days = self.decode_daily_speeds(&blob[5..], &header)?;
        Ok(ProfileData::with_profiles(
            week_day_speed,
            weekend_speed,
            header.time_resolution_minutes,
            days,
        ))
    }

    fn decode_daily_speeds(
        &self,
        payload: &[u8],
        header: &ProfileHeader,
    ) -> Result<[Option<Vec<f64>>; 7], BlobError> {
        let mut days: [Option<Vec<f64>>; 7] = Default::default();
        if header.days_bit_set == 0 {
            // be ready for no valid days at all
            return Ok(days);
        }
        if MINUTES_PER_DAY % header.time_resolution_minutes != 0 {
            return Err(BlobError::InvalidResolution {
                time_resolution_minutes: header.time_resolution_minutes,
            });
        }
        let bins_per_day = header.bins_per_day();

        let inflated;
        let plain: &[u8] = if self.zip_payload {
            inflated = deflate::decompress(payload, safe_buffer_size(header.time_resolution_minutes))
                .map_err(|_| BlobError::Inflate)?;
            &inflated
        } else {
            payload
        };

        let mut reader = ByteReader::new(plain);
        let mut last_speed: i16 = 0;
        for day in ALL_DAYS {
            if !header.is_relevant_day(day) {
                continue;
            }
            let (day_row, current) =
                decode_speeds_for_day(&mut reader, day, bins_per_day, last_speed)?;
            days[usize::from(day)] = Some(day_row);
            last_speed = current;
        }
        Ok(days)
    }
}

impl Default for BlobCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one day's profile as zig-zagged VarInt deltas of 10-bit codes.
///
/// `last_speed` is the 10-bit code of the last bin of the previous relevant
/// day; the delta chain deliberately crosses day boundaries.
fn encode_speeds_for_day<A: DaySpeeds>(
    plain: &mut Vec<u8>,
    day: u8,
    speeds: &A,
    last_speed: i16,
) -> Result<i16, BlobError> {
    let mut previous = last_speed;
    for bin in 0..speeds.total_bins() {
        let bin_speed = speeds.speed_by_bin(bin);
        if bin_speed.is_nan() || bin_speed < 0.0 || bin_speed > MAX_SPEED_VALUE {
            return Err(BlobError::SpeedOutOfRange {
                day,
                bin,
                speed: bin_speed,
            });
        }
        let current = flexfloat::encode(bin_speed) as i16;
        varint::write(zigzag::encode(current - previous), plain);
        previous = current;
    }
    Ok(previous)
}

/// Decode one day's profile, mirroring [`encode_speeds_for_day`].
fn decode_speeds_for_day(
    reader: &mut ByteReader<'_>,
    day: u8,
    bins_per_day: usize,
    last_speed: i16,
) -> Result<(Vec<f64>, i16), BlobError> {
    let mut day_row = Vec::with_capacity(bins_per_day);
    let mut previous = last_speed;
    for bin in 0..bins_per_day {
        let raw = varint::read(reader).map_err(|err| match err {
            VarIntError::Truncated => BlobError::TruncatedProfile { day, bin },
            VarIntError::Overlong => BlobError::VarIntOverlong,
        })?;
        let current = previous.wrapping_add(zigzag::decode(raw));
        day_row.push(flexfloat::decode(current as u16));
        previous = current;
    }
    Ok((day_row, previous))
}

fn checked_bins_per_day(time_resolution_minutes: u16) -> Result<usize, BlobError> {
    if time_resolution_minutes == 0 || MINUTES_PER_DAY % time_resolution_minutes != 0 {
        return Err(BlobError::InvalidResolution {
            time_resolution_minutes,
        });
    }
    Ok(usize::from(MINUTES_PER_DAY / time_resolution_minutes))
}

/// Whether the version byte of the given blob can be parsed by this codec.
///
/// Only the version information is checked, not the integrity of the whole
/// blob. Versions between 128 and 255 are interpreted as unsigned values and
/// are therefore unsupported.
#[inline]
#[must_use]
pub fn has_supported_version(blob: &[u8]) -> bool {
    blob.first().map_or(false, |&version| version <= VERSION)
}

/// Overwrite the two mean-speed bytes of an already encoded blob in place.
///
/// This changes the mean speeds without decoding and re-encoding; the
/// profile section at offsets 3 and beyond is left untouched. The two-byte
/// write is not atomic, so callers requiring atomicity must copy first.
///
/// # Errors
/// Fails if the blob is shorter than 3 bytes or its version is unsupported.
pub fn set_mean_speeds(
    blob: &mut [u8],
    week_day_speed: u8,
    weekend_speed: u8,
) -> Result<(), BlobError> {
    if blob.len() < 3 {
        return Err(BlobError::BufferTooShort {
            expected: 3,
            actual: blob.len(),
        });
    }
    let version = blob[0];
    if version > VERSION {
        return Err(BlobError::UnsupportedVersion { version });
    }
    blob[1] = week_day_speed;
    blob[2] = weekend_speed;
    Ok(())
}

/// The speed value that is effectively stored when the passed speed is
/// encoded into a blob. Due to the value-dependent precision of the 10-bit
/// speed encoding this can differ from the input.
#[inline]
#[must_use]
pub fn as_encoded(speed: f64) -> f64 {
    flexfloat::decode(flexfloat::encode(speed))
}

/// Text representation of the given speed as it would be stored in a blob.
/// Integral results are printed without a decimal point.
#[must_use]
pub fn to_text(speed: f64) -> String {
    let encoded = as_encoded(speed);
    if encoded.fract() == 0.0 {
        format!("{}", encoded as i64)
    } else {
        format!("{encoded}")
    }
}
