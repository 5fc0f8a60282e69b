//! Check the number of clients connected to Redis

use structopt::StructOpt;

use redis_plugins::checks::{self, ConnectedClientsCheck};
use redis_plugins::connection::ConnectionArgs;

/// Check the number of clients connected to Redis.
///
/// The configured maxclients is reported as the upper bound of the perfdata.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-redis-connected-clients (part of redis-plugins)",
    raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
struct Args {
    #[structopt(flatten)]
    connection: ConnectionArgs,
    #[structopt(
        short = "w",
        long = "warning",
        help = "Connected clients to warn at",
        default_value = "2000"
    )]
    warning: f64,
    #[structopt(
        short = "c",
        long = "critical",
        help = "Connected clients to go critical at",
        default_value = "5000"
    )]
    critical: f64,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = checks::parse_args();
    let check = ConnectedClientsCheck::new(args.warning, args.critical);
    checks::run(&check, &args.connection);
}

#[cfg(test)]
mod test {
    use super::Args;
    use structopt::StructOpt;

    #[test]
    fn usage_is_valid() {
        let args = Args::from_iter(["check-redis-connected-clients"].iter());
        assert_eq!(args.warning, 2000.0);
        assert_eq!(args.critical, 5000.0);
        let args = Args::from_iter(["check-redis-connected-clients", "-c", "300", "-p", "7000"].iter());
        assert_eq!(args.critical, 300.0);
        assert_eq!(args.connection.port, 7000);
    }

    #[test]
    fn thresholds_may_be_fractional() {
        let args = Args::from_iter(["check-redis-connected-clients", "-w", "1500.5"].iter());
        assert_eq!(args.warning, 1500.5);
    }
}
