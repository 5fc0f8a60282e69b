use std::time::{Duration, Instant};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use log::debug;

use crate::connection::Connector;
use crate::error::{Error, Result};
use crate::output::CheckOutput;
use crate::perfdata::PerfData;
use crate::status::StatusSource;
use crate::threshold::Thresholds;
use crate::units::div_ceil;
use crate::Status;

use super::Check;

/// Sent base64url-encoded, so that any mangling on the way shows up
pub const ECHO_PAYLOAD: &str = "May I walk on the green side of the blue moon";

/// How long it takes to connect and get an `ECHO` back, in milliseconds
///
/// Connecting includes `AUTH` and `SELECT`. Compares with a strict `>`: a
/// round trip of exactly the warning value is still ok.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyCheck {
    pub thresholds: Thresholds<u64>,
}

impl LatencyCheck {
    pub fn new(warning: u64, critical: u64) -> LatencyCheck {
        LatencyCheck {
            thresholds: Thresholds::above(warning, critical),
        }
    }

    /// Decide on a status for a round trip of `elapsed_ms` that got `echoed`
    /// back
    pub fn evaluate(&self, elapsed_ms: u64, echoed: &str) -> CheckOutput {
        let (status, message) = if echoed != ECHO_PAYLOAD {
            (Status::Critical, "Echo does not match")
        } else {
            match self.thresholds.classify(&elapsed_ms) {
                Status::Critical => (Status::Critical, "Redis connection too slow"),
                Status::Warning => (Status::Warning, "Redis connection slow"),
                status => (status, "Redis connection successful"),
            }
        };
        CheckOutput::new(status, message).with_perfdata(vec![PerfData::new(
            "connection_delay",
            elapsed_ms,
        )
        .unit("ms")
        .thresholds(&self.thresholds)])
    }
}

impl Check for LatencyCheck {
    fn name(&self) -> &'static str {
        "check-redis-connection"
    }

    /// Times the `ECHO` alone, on a connection that is already open
    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput> {
        self.echo_round_trip(source, Instant::now())
    }

    fn connect_and_measure<K: Connector>(&self, connector: &K) -> Result<CheckOutput> {
        let start = Instant::now();
        let mut source = connector.connect()?;
        debug!("connected after {}ms", elapsed_ms(start.elapsed()));
        self.echo_round_trip(&mut source, start)
    }
}

impl LatencyCheck {
    fn echo_round_trip<S: StatusSource>(&self, source: &mut S, start: Instant) -> Result<CheckOutput> {
        let encoded = URL_SAFE.encode(ECHO_PAYLOAD);
        debug!("Original string: {}", ECHO_PAYLOAD);
        debug!("Base64 string: {}", encoded);

        let reply = source.echo(&encoded)?;
        let elapsed = elapsed_ms(start.elapsed());

        debug!("Echo Base64 string: {}", reply);
        let echoed = decode_echo(&reply)?;
        debug!("Echo string: {}", echoed);
        debug!(
            "round trip: {}ms, alerting at {} {:?}ms / {:?}ms",
            elapsed,
            self.thresholds.comparison,
            self.thresholds.warning,
            self.thresholds.critical
        );

        Ok(self.evaluate(elapsed, &echoed))
    }
}

fn decode_echo(reply: &str) -> Result<String> {
    let bytes = URL_SAFE
        .decode(reply)
        .map_err(|e| Error::EchoMismatch(format!("reply is not base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::EchoMismatch(format!("reply is not utf-8: {}", e)))
}

/// A duration in whole milliseconds, rounded up
pub fn elapsed_ms(elapsed: Duration) -> u64 {
    div_ceil(elapsed.as_micros(), 1000) as u64
}
