//! Performance data, the part of a check's output after the `|`
//!
//! Each metric renders as
//!
//! ```plain
//! '<label>'=<value>[<unit>];<warning>;<critical>;<min>;<max>;
//! ```
//!
//! with the `[<unit>]` segment left out when there is no unit. Every field
//! after the value is always present, but may be empty. See
//! <http://docs.icinga.org/latest/en/perfdata.html#formatperfdata>.

use std::fmt;

use crate::threshold::Thresholds;

/// One metric, ready to be rendered
///
/// Fields are stored already rendered; an empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfData {
    label: String,
    value: String,
    warning: String,
    critical: String,
    unit: String,
    min: String,
    max: String,
}

impl PerfData {
    pub fn new<V: fmt::Display>(label: &str, value: V) -> PerfData {
        PerfData {
            label: label.to_owned(),
            value: value.to_string(),
            ..PerfData::default()
        }
    }

    pub fn unit(mut self, unit: &str) -> PerfData {
        self.unit = unit.to_owned();
        self
    }

    pub fn warning<T: fmt::Display>(mut self, warning: T) -> PerfData {
        self.warning = warning.to_string();
        self
    }

    pub fn critical<T: fmt::Display>(mut self, critical: T) -> PerfData {
        self.critical = critical.to_string();
        self
    }

    /// Copy whichever tiers are set
    pub fn thresholds<T: fmt::Display>(mut self, thresholds: &Thresholds<T>) -> PerfData {
        self.warning = render_optional(&thresholds.warning);
        self.critical = render_optional(&thresholds.critical);
        self
    }

    pub fn bounds<T: fmt::Display>(mut self, min: T, max: T) -> PerfData {
        self.min = min.to_string();
        self.max = max.to_string();
        self
    }
}

fn render_optional<T: fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(String::new, ToString::to_string)
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}'={}", self.label, self.value)?;
        if !self.unit.is_empty() {
            write!(f, "[{}]", self.unit)?;
        }
        write!(
            f,
            ";{};{};{};{};",
            self.warning, self.critical, self.min, self.max
        )
    }
}

/// Render a single metric from its parts
///
/// Pass `""` for anything that should be left empty.
pub fn format_metric<V, W, C, Min, Max>(
    label: &str,
    value: V,
    warning: W,
    critical: C,
    unit: &str,
    min: Min,
    max: Max,
) -> String
where
    V: fmt::Display,
    W: fmt::Display,
    C: fmt::Display,
    Min: fmt::Display,
    Max: fmt::Display,
{
    PerfData {
        min: min.to_string(),
        max: max.to_string(),
        ..PerfData::new(label, value)
            .warning(warning)
            .critical(critical)
            .unit(unit)
    }
    .to_string()
}

#[cfg(test)]
mod test {
    use super::{format_metric, PerfData};
    use crate::threshold::{Comparison, Thresholds};

    #[test]
    fn without_unit() {
        assert_eq!(format_metric("x", 5, 1, 2, "", "", ""), "'x'=5;1;2;;;");
    }

    #[test]
    fn with_unit() {
        assert_eq!(format_metric("x", 5, 1, 2, "ms", "", ""), "'x'=5[ms];1;2;;;");
    }

    #[test]
    fn unset_fields_are_empty() {
        assert_eq!(PerfData::new("a", 1).to_string(), "'a'=1;;;;;");
        assert_eq!(
            PerfData::new("used_memory_rss", 1024).unit("B").to_string(),
            "'used_memory_rss'=1024[B];;;;;"
        );
    }

    #[test]
    fn bounds_are_rendered_last() {
        let clients = PerfData::new("connected_clients", 12)
            .thresholds(&Thresholds::at_least(2000, 5000))
            .bounds(0, 10000);
        assert_eq!(clients.to_string(), "'connected_clients'=12;2000;5000;0;10000;");
    }

    #[test]
    fn partially_set_thresholds() {
        let only_crit = Thresholds::new(None, Some(100), Comparison::Above);
        assert_eq!(
            PerfData::new("connection_delay", 3).unit("ms").thresholds(&only_crit).to_string(),
            "'connection_delay'=3[ms];;100;;;"
        );
    }

    #[test]
    fn labels_are_not_escaped() {
        assert_eq!(PerfData::new("it's", 0).to_string(), "'it's'=0;;;;;");
    }
}
