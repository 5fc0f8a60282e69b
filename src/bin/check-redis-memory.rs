//! Check how many bytes Redis has allocated

use structopt::StructOpt;

use redis_plugins::checks::{self, MemoryCheck};
use redis_plugins::connection::ConnectionArgs;

/// Check the memory allocated by Redis, in bytes.
///
/// The resident set size is included in the perfdata but does not alert.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-redis-memory (part of redis-plugins)",
    raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
struct Args {
    #[structopt(flatten)]
    connection: ConnectionArgs,
    #[structopt(
        short = "w",
        long = "warning",
        help = "Bytes used to warn at",
        default_value = "50000000"
    )]
    warning: u64,
    #[structopt(
        short = "c",
        long = "critical",
        help = "Bytes used to go critical at",
        default_value = "50000000"
    )]
    critical: u64,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = checks::parse_args();
    let check = MemoryCheck::new(args.warning, args.critical);
    checks::run(&check, &args.connection);
}
