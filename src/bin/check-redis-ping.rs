//! Check that Redis answers a PING

use structopt::StructOpt;

use redis_plugins::checks::{self, PingCheck};
use redis_plugins::connection::ConnectionArgs;

/// Check that Redis answers PING with PONG.
///
/// Critical if it does not, or if the server cannot be reached.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-redis-ping (part of redis-plugins)",
    raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
struct Args {
    #[structopt(flatten)]
    connection: ConnectionArgs,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = checks::parse_args();
    checks::run(&PingCheck, &args.connection);
}
