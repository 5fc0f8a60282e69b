//! Diagnostics for `--debug`
//!
//! Checks are read by machines that expect exactly one line on stdout, so
//! logging is off unless `--debug` is given. When it is, messages go to stdout
//! unadorned, ahead of the result line.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };
    // a second init (tests) keeps the first logger
    let _ = Builder::new()
        .target(Target::Stdout)
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
