//! The checks, and the driver that runs any one of them
//!
//! A check only knows how to turn a server into a `CheckOutput`. Parsing
//! arguments, connecting, printing and exiting are the same for all of them
//! and live in `run`.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use structopt::clap::ErrorKind;
use structopt::StructOpt;

use crate::connection::{ConnectionArgs, Connector};
use crate::error::Result;
use crate::logging;
use crate::output::CheckOutput;
use crate::status::StatusSource;
use crate::Status;

mod clients;
mod latency;
mod maxmemory;
mod memory;
mod ping;

pub use self::clients::ConnectedClientsCheck;
pub use self::latency::{elapsed_ms, LatencyCheck, ECHO_PAYLOAD};
pub use self::maxmemory::{usage_percent, MaxMemoryCheck};
pub use self::memory::MemoryCheck;
pub use self::ping::PingCheck;

/// A single measurement against a Redis server
pub trait Check {
    /// The name of the binary running this check
    fn name(&self) -> &'static str;

    /// Query `source` and decide on a status
    fn measure<S: StatusSource>(&self, source: &mut S) -> Result<CheckOutput>;

    /// Open a connection through `connector`, then `measure` against it
    ///
    /// Checks that report on connection setup itself override this.
    fn connect_and_measure<K: Connector>(&self, connector: &K) -> Result<CheckOutput> {
        let mut source = connector.connect()?;
        self.measure(&mut source)
    }
}

/// Parse the arguments of a check binary
///
/// `--help` and `--version` behave as usual. Anything else that clap rejects,
/// including stray positional arguments, is reported like any other error:
/// one `Error:` line and a critical exit.
pub fn parse_args<A: StructOpt>() -> A {
    A::from_iter_safe(::std::env::args_os()).unwrap_or_else(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => {
            println!("Error: {}", usage_error_message(&e.message));
            Status::Critical.exit()
        }
    })
}

lazy_static! {
    // clap colors `error:` when stderr is a terminal
    static ref ANSI_ESCAPE: Regex = Regex::new("\x1b\\[[0-9;]*m").unwrap();
}

fn usage_error_message(message: &str) -> String {
    let plain = ANSI_ESCAPE.replace_all(message, "");
    let first_line = plain.lines().next().unwrap_or("");
    first_line.trim_start_matches("error:").trim().to_owned()
}

/// Connect, measure, print the result line and exit with its status
pub fn run<C: Check>(check: &C, connection: &ConnectionArgs) -> ! {
    logging::init(connection.debug);
    debug!("{}: connecting to {}:{}", check.name(), connection.hostname, connection.port);
    let outcome = check.connect_and_measure(connection);
    let (line, status) = conclude(outcome);
    println!("{}", line);
    status.exit()
}

/// The line to print and the status to exit with
///
/// Errors are always critical.
pub fn conclude(outcome: Result<CheckOutput>) -> (String, Status) {
    match outcome {
        Ok(output) => (output.to_string(), output.status),
        Err(e) => {
            debug!("{:?}", e);
            (format!("Error: {}", e), Status::Critical)
        }
    }
}

/// Measure against an already open source, for callers that manage the
/// connection themselves
pub fn evaluate<C: Check, S: StatusSource>(check: &C, source: &mut S) -> (String, Status) {
    conclude(check.measure(source))
}
