use log::debug;

use crate::error::Result;
use crate::output::CheckOutput;
use crate::perfdata::PerfData;
use crate::status::{fetch_snapshot, StatusSource};
use crate::threshold::Thresholds;
use crate::units::bytes_to_human_size;

use super::Check;

/// Bytes allocated by Redis, against absolute thresholds
///
/// The resident set size is reported alongside, but never alerts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryCheck {
    pub thresholds: Thresholds<u64>,
}

impl MemoryCheck {
    pub fn new(warning: u64, critical: u64) -> MemoryCheck {
        MemoryCheck {
            thresholds: Thresholds::at_least(warning, critical),
        }
    }

    pub fn evaluate(&self, used_memory: u64, used_memory_rss: u64) -> CheckOutput {
        let status = self.thresholds.classify(&used_memory);
        let message = format!("{} memory usage", bytes_to_human_size(used_memory));
        CheckOutput::new(status, message).with_perfdata(vec![
            PerfData::new("used_memory", used_memory)
                .unit("B")
                .thresholds(&self.thresholds),
            PerfData::new("used_memory_rss", used_memory_rss).unit("B"),
        ])
    }
}

impl Check for MemoryCheck {
    fn name(&self) -> &'static str {
        "check-redis-memory"
    }

    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput> {
        let snapshot = fetch_snapshot(source)?;
        debug!("memory used");
        debug!("-----------");
        debug!("used_memory: {}", bytes_to_human_size(snapshot.used_memory));
        debug!("used_memory_rss: {}", bytes_to_human_size(snapshot.used_memory_rss));
        Ok(self.evaluate(snapshot.used_memory, snapshot.used_memory_rss))
    }
}
