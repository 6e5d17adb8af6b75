//! 10-bit floating-point encoding of speed values with adaptive precision.
//!
//! Speeds are encoded as 10-bit values with 3 bits of exponent and 7 bits of
//! mantissa, covering 0 to 255 km/h. The smallest non-zero representable
//! value is 1/64. Precision is not uniform but depends on the magnitude:
//!
//! | Exponent | Range   | Precision |
//! |----------|---------|-----------|
//! | 0        | 0-2     | 1/64      |
//! | 1        | 2-4     | 1/64      |
//! | 2        | 4-8     | 1/32      |
//! | 3        | 8-16    | 1/16      |
//! | 4        | 16-32   | 1/8       |
//! | 5        | 32-64   | 1/4       |
//! | 6        | 64-128  | 1/2       |
//! | 7        | 128-255 | 1         |

/// The smallest non-zero input value that will not be rounded to zero.
pub const MIN_NONZERO_INPUT_VALUE: f64 = 1.0 / 128.0;

/// The smallest non-zero value that can be represented by this encoding.
pub const MIN_NONZERO_OUTPUT_VALUE: f64 = 1.0 / 64.0;

/// Encode a speed value as a 10-bit floating-point code.
///
/// Values below 0 and above 255 are capped.
#[inline]
#[must_use]
pub fn encode(speed: f64) -> u16 {
    if speed <= 0.0 {
        return 0;
    }
    if speed <= 2.0 {
        return (speed * 64.0).round() as u16;
    }
    let capped = if speed >= 255.0 { 255.0 } else { speed };
    // capped > 2 here, so the truncated value has at least one set bit
    let exponent = 31 - (capped as u32).leading_zeros();
    // (7 - exponent) is never negative since capped is at most 255
    let mantissa = (capped * f64::from(1_u32 << (7 - exponent)) - 128.0).round() as u32;
    // Plain addition: a mantissa rounded up to 128 carries into the exponent,
    // landing on the lowest code of the next band.
    ((exponent << 7) + mantissa) as u16
}

/// Interpret a 10-bit floating-point code and return the decoded speed.
#[inline]
#[must_use]
pub fn decode(raw: u16) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    let mantissa = f64::from(raw & 0x7F);
    let exponent = (raw >> 7) & 0x7;
    if exponent == 0 {
        mantissa / 64.0
    } else {
        (mantissa + 128.0) / f64::from(1_u32 << (7 - exponent))
    }
}
