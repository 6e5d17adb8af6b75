//! The two-byte profile header: time resolution and days-present bit field.

use crate::constants::MINUTES_PER_DAY;
use crate::error::BlobError;

/// Resolution byte value standing in for a whole-day (1440 minute) bin.
const OUT_RESOLUTION_FOR_24H: u8 = 0;

/// Header of the daily-profile section of a blob.
///
/// The first byte carries the width of the time bins in minutes, with 1440
/// substituted by 0 so it fits a single byte. The second byte marks the days
/// for which a profile is present: bit 0 is Sunday, bit 6 is Saturday, and
/// the top bit is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileHeader {
    pub time_resolution_minutes: u16,
    pub days_bit_set: u8,
}

impl ProfileHeader {
    #[inline]
    #[must_use]
    pub fn new(time_resolution_minutes: u16, days_bit_set: u8) -> Self {
        ProfileHeader {
            time_resolution_minutes,
            days_bit_set,
        }
    }

    /// Encode the header into its two wire bytes.
    ///
    /// # Errors
    /// Fails if the resolution still exceeds one byte after the whole-day
    /// substitution.
    pub fn encode(&self) -> Result<[u8; 2], BlobError> {
        let out_resolution = if self.time_resolution_minutes == MINUTES_PER_DAY {
            u16::from(OUT_RESOLUTION_FOR_24H)
        } else {
            self.time_resolution_minutes
        };
        if out_resolution > 255 {
            return Err(BlobError::ResolutionTooLarge {
                time_resolution_minutes: self.time_resolution_minutes,
            });
        }
        Ok([out_resolution as u8, self.days_bit_set])
    }

    /// Decode the header from its two wire bytes.
    #[inline]
    #[must_use]
    pub fn decode(out_resolution: u8, days_bit_set: u8) -> Self {
        let time_resolution_minutes = if out_resolution == OUT_RESOLUTION_FOR_24H {
            MINUTES_PER_DAY
        } else {
            u16::from(out_resolution)
        };
        ProfileHeader {
            time_resolution_minutes,
            days_bit_set,
        }
    }

    /// Whether a profile is present for the given day (0 = Sunday).
    #[inline]
    #[must_use]
    pub fn is_relevant_day(&self, day: u8) -> bool {
        self.days_bit_set & Self::day_mask(day) != 0
    }

    /// Bit mask marking the given day in the days bit field.
    #[inline]
    #[must_use]
    pub fn day_mask(day: u8) -> u8 {
        1 << day
    }

    /// Number of time bins per day at this header's resolution.
    #[inline]
    #[must_use]
    pub fn bins_per_day(&self) -> usize {
        usize::from(MINUTES_PER_DAY) / usize::from(self.time_resolution_minutes)
    }
}
