//! Check Redis memory usage against its configured maxmemory

use structopt::StructOpt;

use redis_plugins::checks::{self, MaxMemoryCheck};
use redis_plugins::connection::ConnectionArgs;

/// Check how much of its configured maxmemory Redis is using, in percent.
///
/// The ratio is rounded up to the next hundredth before comparing. Fails if
/// the server has no maxmemory set, since there is nothing to compare to.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-redis-maxmemory (part of redis-plugins)",
    raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
struct Args {
    #[structopt(flatten)]
    connection: ConnectionArgs,
    #[structopt(
        short = "w",
        long = "warning",
        help = "Percent of maxmemory used to warn at",
        default_value = "80.00"
    )]
    warning: f64,
    #[structopt(
        short = "c",
        long = "critical",
        help = "Percent of maxmemory used to go critical at",
        default_value = "90.00"
    )]
    critical: f64,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = checks::parse_args();
    let check = MaxMemoryCheck::new(args.warning, args.critical);
    checks::run(&check, &args.connection);
}
