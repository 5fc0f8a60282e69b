use crate::error::Result;
use crate::output::CheckOutput;
use crate::status::StatusSource;
use crate::Status;

use super::Check;

/// Is the server answering at all
///
/// No thresholds and no perfdata: either `PING` gets `PONG` back or the check
/// is critical.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingCheck;

impl Check for PingCheck {
    fn name(&self) -> &'static str {
        "check-redis-ping"
    }

    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput> {
        let reply = source.ping()?;
        if reply == "PONG" {
            Ok(CheckOutput::new(Status::Ok, "Success to ping-pong"))
        } else {
            Ok(CheckOutput::new(Status::Critical, "Failed to ping-pong"))
        }
    }
}
