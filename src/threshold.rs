//! Turn a measurement into a `Status`

use std::fmt;

use crate::Status;

/// How a measurement is compared against a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Trigger when the value is `>=` the threshold
    AtLeast,
    /// Trigger when the value is strictly `>` the threshold
    Above,
}

impl Comparison {
    pub fn triggers<T: PartialOrd>(self, value: &T, threshold: &T) -> bool {
        match self {
            Comparison::AtLeast => value >= threshold,
            Comparison::Above => value > threshold,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Comparison::AtLeast => write!(f, ">="),
            Comparison::Above => write!(f, ">"),
        }
    }
}

/// A warning/critical pair
///
/// Either tier can be unset, in which case it never triggers. When a value
/// trips both tiers the result is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds<T> {
    pub warning: Option<T>,
    pub critical: Option<T>,
    pub comparison: Comparison,
}

impl<T: PartialOrd> Thresholds<T> {
    pub fn new(warning: Option<T>, critical: Option<T>, comparison: Comparison) -> Thresholds<T> {
        Thresholds {
            warning,
            critical,
            comparison,
        }
    }

    /// Both tiers set, triggering on `>=`
    pub fn at_least(warning: T, critical: T) -> Thresholds<T> {
        Thresholds::new(Some(warning), Some(critical), Comparison::AtLeast)
    }

    /// Both tiers set, triggering on `>`
    pub fn above(warning: T, critical: T) -> Thresholds<T> {
        Thresholds::new(Some(warning), Some(critical), Comparison::Above)
    }

    pub fn classify(&self, value: &T) -> Status {
        let mut status = Status::Ok;
        if let Some(ref warning) = self.warning {
            if self.comparison.triggers(value, warning) {
                status = Status::Warning;
            }
        }
        // checked after warning so that critical always wins
        if let Some(ref critical) = self.critical {
            if self.comparison.triggers(value, critical) {
                status = Status::Critical;
            }
        }
        status
    }
}

impl<T> Thresholds<T> {
    /// The same tiers, converted with `f`
    pub fn map<U, F: Fn(&T) -> U>(&self, f: F) -> Thresholds<U> {
        Thresholds {
            warning: self.warning.as_ref().map(&f),
            critical: self.critical.as_ref().map(&f),
            comparison: self.comparison,
        }
    }
}

/// Classify `value` against optional thresholds using `>=`
pub fn classify<T: PartialOrd>(value: T, warning: Option<T>, critical: Option<T>) -> Status {
    Thresholds::new(warning, critical, Comparison::AtLeast).classify(&value)
}
