//! Check how long a round trip to Redis takes

use structopt::StructOpt;

use redis_plugins::checks::{self, LatencyCheck};
use redis_plugins::connection::ConnectionArgs;

/// Check the latency of an ECHO round trip to Redis, in milliseconds.
///
/// A known string is sent base64 encoded and must come back unchanged,
/// otherwise the check is critical regardless of timing. Thresholds must be
/// exceeded, not just reached, to alert.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-redis-connection (part of redis-plugins)",
    raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
struct Args {
    #[structopt(flatten)]
    connection: ConnectionArgs,
    #[structopt(
        short = "w",
        long = "warning",
        help = "Milliseconds above which to warn",
        default_value = "50"
    )]
    warning: u64,
    #[structopt(
        short = "c",
        long = "critical",
        help = "Milliseconds above which to go critical",
        default_value = "100"
    )]
    critical: u64,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = checks::parse_args();
    let check = LatencyCheck::new(args.warning, args.critical);
    checks::run(&check, &args.connection);
}
