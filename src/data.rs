//! In-memory representation of the speed data carried by a single blob.

use serde::{Deserialize, Serialize};

/// Per-day access to time-bin-wise profile speeds.
///
/// The encoder is generic over this trait so that speed data can originate
/// from structures other than dense arrays. Implementations exist for dense
/// rows (`&[f64]`) and for caller-supplied closures ([`BinFn`]).
pub trait DaySpeeds {
    /// Number of time bins covered by this day's profile.
    fn total_bins(&self) -> usize;

    /// Profile speed in km/h at the time bin with the given index.
    fn speed_by_bin(&self, bin: usize) -> f64;
}

impl DaySpeeds for &[f64] {
    #[inline]
    fn total_bins(&self) -> usize {
        self.len()
    }

    #[inline]
    fn speed_by_bin(&self, bin: usize) -> f64 {
        self[bin]
    }
}

/// Adapter exposing a closure as a day's speed profile.
pub struct BinFn<F> {
    total_bins: usize,
    speed_fn: F,
}

impl<F: Fn(usize) -> f64> BinFn<F> {
    #[inline]
    #[must_use]
    pub fn new(total_bins: usize, speed_fn: F) -> Self {
        BinFn {
            total_bins,
            speed_fn,
        }
    }
}

impl<F: Fn(usize) -> f64> DaySpeeds for BinFn<F> {
    #[inline]
    fn total_bins(&self) -> usize {
        self.total_bins
    }

    #[inline]
    fn speed_by_bin(&self, bin: usize) -> f64 {
        (self.speed_fn)(bin)
    }
}

/// Speed information comprised in one Premium Speed-Profile blob.
///
/// Always carries the two mean speeds; daily 24h profiles for any subset of
/// the seven days of the week are optional. Day 0 is Sunday, day 6 is
/// Saturday (note the difference to ISO-8601 weekday numbering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    week_day_speed: u8,
    weekend_speed: u8,
    profiles: Option<DailyProfiles>,
}

/// The daily-profile section of a [`ProfileData`]: one shared time
/// resolution and up to seven per-day speed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProfiles {
    time_resolution_minutes: u16,
    days: [Option<Vec<f64>>; 7],
}

impl ProfileData {
    /// Create data carrying only the two mean speeds and no daily profiles.
    #[inline]
    #[must_use]
    pub fn means_only(week_day_speed: u8, weekend_speed: u8) -> Self {
        ProfileData {
            week_day_speed,
            weekend_speed,
            profiles: None,
        }
    }

    /// Create data carrying mean speeds plus daily profiles.
    ///
    /// `days` maps day index (0 = Sunday) to an optional dense row of speeds;
    /// each present row is expected to cover all 24 hours of its day at the
    /// given resolution.
    #[must_use]
    pub fn with_profiles(
        week_day_speed: u8,
        weekend_speed: u8,
        time_resolution_minutes: u16,
        days: [Option<Vec<f64>>; 7],
    ) -> Self {
        ProfileData {
            week_day_speed,
            weekend_speed,
            profiles: Some(DailyProfiles {
                time_resolution_minutes,
                days,
            }),
        }
    }

    /// Mean working-day speed in km/h.
    #[inline]
    #[must_use]
    pub fn week_day_speed(&self) -> u8 {
        self.week_day_speed
    }

    /// Mean weekend-day speed in km/h.
    #[inline]
    #[must_use]
    pub fn weekend_speed(&self) -> u8 {
        self.weekend_speed
    }

    /// Width of the profile time bins in minutes; 0 if no daily profiles
    /// are carried.
    #[inline]
    #[must_use]
    pub fn time_resolution_minutes(&self) -> u16 {
        self.profiles
            .as_ref()
            .map_or(0, |profiles| profiles.time_resolution_minutes)
    }

    /// Whether this data carries a daily-profile section at all.
    #[inline]
    #[must_use]
    pub fn has_daily_speeds(&self) -> bool {
        self.profiles.is_some()
    }

    /// Whether a speed profile is present for the given day (0 = Sunday).
    #[inline]
    #[must_use]
    pub fn has_day_speeds(&self, day: u8) -> bool {
        self.day_speeds(day).is_some()
    }

    /// The speed row for the given day, if one is present and non-empty.
    ///
    /// An empty row counts as an absent day, matching what the encoder
    /// writes into the days bit field.
    #[must_use]
    pub fn day_speeds(&self, day: u8) -> Option<&[f64]> {
        let profiles = self.profiles.as_ref()?;
        let row = profiles.days.get(usize::from(day))?.as_deref()?;
        if row.is_empty() {
            None
        } else {
            Some(row)
        }
    }

    /// The daily-profile section, if present.
    #[inline]
    #[must_use]
    pub fn profiles(&self) -> Option<&DailyProfiles> {
        self.profiles.as_ref()
    }
}

impl DailyProfiles {
    /// Width of the time bins in minutes shared by all contained profiles.
    #[inline]
    #[must_use]
    pub fn time_resolution_minutes(&self) -> u16 {
        self.time_resolution_minutes
    }

    /// Day-indexed speed rows, day 0 = Sunday.
    #[inline]
    #[must_use]
    pub fn days(&self) -> &[Option<Vec<f64>>; 7] {
        &self.days
    }
}
