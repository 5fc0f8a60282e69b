//! redis-plugins: Nagios-compatible checks for a running Redis server
//!
//! Every check connects to Redis, pulls one or two numbers out of `INFO` or
//! `CONFIG GET`, compares them against warning/critical thresholds and prints
//! exactly one line in the monitoring-plugin format:
//!
//! ```plain
//! Warning: 80.00% of 1 GB | 'redis_memory_usage'=80.00[%];80.00;90.00;;; 
//! ```
//!
//! The process exit code carries the severity, see [`Status::exit_code`].
//!
//! The binaries under `src/bin` are thin: they parse their arguments and hand a
//! [`checks::Check`] to [`checks::run`]. Everything they share lives here:
//!
//! * [`status`] talks to the server and turns replies into typed values
//! * [`threshold`] decides the severity of a measurement
//! * [`perfdata`] and [`output`] render the result line
//!
//! See the [`scripts`] module for the usage of each check.

use std::fmt;
use std::process;
use std::str::FromStr;

pub mod checks;
pub mod connection;
pub mod error;
pub mod logging;
pub mod output;
pub mod perfdata;
pub mod scripts;
pub mod status;
pub mod threshold;
pub mod units;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::error::{Error, Result};

/// The severity of a check
///
/// Ordered so that `max` of two statuses is the more alarming one.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The process exit code for this status
    ///
    /// Unknown shares OK's exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok | Status::Unknown => 0,
            Status::Warning => 1,
            Status::Critical => 2,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.exit_code())
    }

    pub fn str_values() -> [&'static str; 4] {
        ["OK", "Warning", "Critical", "Unknown"]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match *self {
            Status::Ok => "OK",
            Status::Warning => "Warning",
            Status::Critical => "Critical",
            Status::Unknown => "Unknown",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Status> {
        match s.to_lowercase().as_ref() {
            "ok" => Ok(Status::Ok),
            "warning" => Ok(Status::Warning),
            "critical" => Ok(Status::Critical),
            "unknown" => Ok(Status::Unknown),
            _ => Err(Error::Validation(format!(
                "bad check output state '{}', expected one of: {}",
                s,
                Status::str_values().join(", ")
            ))),
        }
    }
}
