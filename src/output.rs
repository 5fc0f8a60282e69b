//! The single line a check prints

use std::fmt;

use crate::perfdata::PerfData;
use crate::Status;

/// Render `<Status>: <message> |<perfdata>`
///
/// Each perfdata token is padded with one space on either side. When
/// `perfdata` is `None` the pipe is left out entirely, which is different from
/// passing an empty slice. An empty message is replaced by `-`.
pub fn format_result(status: Status, message: &str, perfdata: Option<&[PerfData]>) -> String {
    let message = if message.is_empty() { "-" } else { message };
    match perfdata {
        Some(perfdata) => {
            let rendered: String = perfdata.iter().map(|p| format!(" {} ", p)).collect();
            format!("{}: {} |{}", status, message, rendered)
        }
        None => format!("{}: {} ", status, message),
    }
}

/// Everything a check decided
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutput {
    pub status: Status,
    pub message: String,
    pub perfdata: Option<Vec<PerfData>>,
}

impl CheckOutput {
    pub fn new<S: Into<String>>(status: Status, message: S) -> CheckOutput {
        CheckOutput {
            status,
            message: message.into(),
            perfdata: None,
        }
    }

    pub fn with_perfdata(mut self, perfdata: Vec<PerfData>) -> CheckOutput {
        self.perfdata = Some(perfdata);
        self
    }
}

impl fmt::Display for CheckOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let perfdata = self.perfdata.as_ref().map(Vec::as_slice);
        write!(f, "{}", format_result(self.status, &self.message, perfdata))
    }
}

#[cfg(test)]
mod test {
    use super::{format_result, CheckOutput};
    use crate::perfdata::PerfData;
    use crate::Status;

    #[test]
    fn perfdata_is_padded() {
        let metrics = [PerfData::new("a", 1)];
        assert_eq!(
            format_result(Status::Ok, "fine", Some(&metrics)),
            "OK: fine | 'a'=1;;;;; "
        );
    }

    #[test]
    fn several_metrics_are_concatenated() {
        let metrics = [PerfData::new("a", 1), PerfData::new("b", 2).unit("B")];
        assert_eq!(
            format_result(Status::Warning, "two", Some(&metrics)),
            "Warning: two | 'a'=1;;;;;  'b'=2[B];;;;; "
        );
    }

    #[test]
    fn empty_message_becomes_dash() {
        assert_eq!(format_result(Status::Ok, "", None), "OK: - ");
    }

    #[test]
    fn empty_perfdata_keeps_the_pipe() {
        assert_eq!(format_result(Status::Critical, "down", Some(&[])), "Critical: down |");
    }

    #[test]
    fn check_output_display() {
        let output = CheckOutput::new(Status::Ok, "Success to ping-pong");
        assert_eq!(output.to_string(), "OK: Success to ping-pong ");

        let output = CheckOutput::new(Status::Unknown, "")
            .with_perfdata(vec![PerfData::new("x", 5).warning(1).critical(2)]);
        assert_eq!(output.to_string(), "Unknown: - | 'x'=5;1;2;;; ");
    }
}
