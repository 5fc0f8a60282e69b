use log::debug;

use crate::error::{Error, Result};
use crate::output::CheckOutput;
use crate::perfdata::PerfData;
use crate::status::{fetch_max_memory, fetch_snapshot, StatusSource};
use crate::threshold::Thresholds;
use crate::units::{bytes_to_human_size, div_ceil, Percent};

use super::Check;

/// How much of `maxmemory` is in use, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxMemoryCheck {
    pub thresholds: Thresholds<f64>,
}

impl MaxMemoryCheck {
    pub fn new(warning: f64, critical: f64) -> MaxMemoryCheck {
        MaxMemoryCheck {
            thresholds: Thresholds::at_least(warning, critical),
        }
    }

    pub fn evaluate(&self, used_memory: u64, max_memory: u64) -> Result<CheckOutput> {
        let percent = Percent(usage_percent(used_memory, max_memory)? as f64);
        debug!("current memory usage");
        debug!("--------------------");
        debug!("memory usage : {}%", percent);

        let status = self.thresholds.classify(&percent.0);
        let message = format!("{}% of {}", percent, bytes_to_human_size(max_memory));
        Ok(CheckOutput::new(status, message).with_perfdata(vec![PerfData::new(
            "redis_memory_usage",
            percent,
        )
        .unit("%")
        .thresholds(&self.thresholds.map(|&tier| Percent(tier)))]))
    }
}

impl Check for MaxMemoryCheck {
    fn name(&self) -> &'static str {
        "check-redis-maxmemory"
    }

    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput> {
        let snapshot = fetch_snapshot(source)?;
        let max_memory = fetch_max_memory(source)?;
        debug!("used_memory: {}", bytes_to_human_size(snapshot.used_memory));
        self.evaluate(snapshot.used_memory, max_memory)
    }
}

/// `used / ceiling` rounded up to the next hundredth, as a whole percentage
///
/// `799 / 1000` is `0.799`, which rounds up to `0.80`, so `80`.
pub fn usage_percent(used: u64, ceiling: u64) -> Result<u64> {
    if ceiling == 0 {
        return Err(Error::Configuration(
            "maxmemory = 0 cannot evaluate usage".into(),
        ));
    }
    Ok(div_ceil(u128::from(used) * 100, u128::from(ceiling)) as u64)
}
