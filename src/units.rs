//! Rendering sizes and ratios for humans

use std::fmt;

const SIZES: [(u64, &str); 5] = [
    (1 << 50, "PB"),
    (1 << 40, "TB"),
    (1 << 30, "GB"),
    (1 << 20, "MB"),
    (1 << 10, "KB"),
];

/// Size in the largest binary unit that fits, truncated to a whole number
///
/// `50_000_000` renders as `47 MB`. Anything below a kilobyte is spelled out
/// in bytes.
pub fn bytes_to_human_size(bytes: u64) -> String {
    for &(factor, suffix) in SIZES.iter() {
        if bytes >= factor {
            return format!("{} {}", bytes / factor, suffix);
        }
    }
    if bytes == 1 {
        "1 byte".into()
    } else {
        format!("{} bytes", bytes)
    }
}

/// A percentage, always shown with two decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Integer division, rounding up
///
/// Panics if `denominator` is zero, callers check first.
pub(crate) fn div_ceil(numerator: u128, denominator: u128) -> u128 {
    (numerator + denominator - 1) / denominator
}
