//! Internal constants and helper functions for the blob wire format.

/// Current blob format version. Only backward compatibility is guaranteed,
/// i.e. decoders accept this and all previous versions.
pub const VERSION: u8 = 1;

/// Number of minutes per day; every daily profile covers all 24 hours.
pub const MINUTES_PER_DAY: u16 = 60 * 24;

/// Maximum speed value in km/h that can be stored in a blob.
pub const MAX_SPEED_VALUE: f64 = 255.0;

/// All days of the week, Sunday = 0 through Saturday = 6.
pub const ALL_DAYS: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];

/// zlib deflation adds a 6 byte header per 64kB block and a 5 byte footer.
/// At the maximum resolution of 1 minute the plain payload stays well below
/// 64kB, so a single block is always enough.
pub const ZLIB_BYTE_OVERHEAD: usize = 11;

/// Conservative size of the plain (uncompressed) payload for a given time
/// resolution: at most 2 bytes per speed value across 7 days, rounded up to
/// the next power of two. The hard lower limit of 128 is what results from
/// the largest resolution that still fits the resolution byte (255 minutes).
#[inline]
#[must_use]
pub fn safe_buffer_size(time_resolution_minutes: u16) -> usize {
    let num_total_bytes =
        (usize::from(MINUTES_PER_DAY) / usize::from(time_resolution_minutes)) * 7 * 2;
    num_total_bytes.next_power_of_two().max(128)
}
