use log::debug;

use crate::error::Result;
use crate::output::CheckOutput;
use crate::perfdata::PerfData;
use crate::status::{fetch_max_clients, fetch_snapshot, StatusSource};
use crate::threshold::Thresholds;

use super::Check;

/// How many clients are connected
///
/// Thresholds may be fractional; the count is compared as a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectedClientsCheck {
    pub thresholds: Thresholds<f64>,
}

impl ConnectedClientsCheck {
    pub fn new(warning: f64, critical: f64) -> ConnectedClientsCheck {
        ConnectedClientsCheck {
            thresholds: Thresholds::at_least(warning, critical),
        }
    }

    /// `max_clients` bounds the perfdata graph
    pub fn evaluate(&self, connected_clients: u64, max_clients: u64) -> CheckOutput {
        let status = self.thresholds.classify(&(connected_clients as f64));
        CheckOutput::new(status, format!("{} connected clients", connected_clients)).with_perfdata(
            vec![PerfData::new("connected_clients", connected_clients)
                .thresholds(&self.thresholds)
                .bounds(0, max_clients)],
        )
    }
}

impl Check for ConnectedClientsCheck {
    fn name(&self) -> &'static str {
        "check-redis-connected-clients"
    }

    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput> {
        let snapshot = fetch_snapshot(source)?;
        let max_clients = fetch_max_clients(source)?;
        debug!("connected clients");
        debug!("-----------------");
        debug!("connected_clients: {}", snapshot.connected_clients);
        Ok(self.evaluate(snapshot.connected_clients, max_clients))
    }
}
