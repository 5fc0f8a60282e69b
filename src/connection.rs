//! Options shared by every check, and opening the connection they describe

use structopt::StructOpt;
use url::Url;

use crate::error::{Error, Result};
use crate::status::StatusSource;

/// Opens connections to a server
///
/// Checks that time the whole exchange start their clock before calling
/// `connect`.
pub trait Connector {
    type Source: StatusSource;

    fn connect(&self) -> Result<Self::Source>;
}

/// How to reach the Redis server
///
/// Flattened into the arguments of every check.
#[derive(StructOpt, Debug, Clone, PartialEq)]
pub struct ConnectionArgs {
    #[structopt(
        short = "H",
        long = "hostname",
        help = "Hostname to connect to",
        default_value = "localhost"
    )]
    pub hostname: String,
    #[structopt(
        short = "p",
        long = "port",
        help = "Redis port to connect to",
        default_value = "6379"
    )]
    pub port: u16,
    #[structopt(
        short = "P",
        long = "password",
        help = "Redis password used for connection",
        env = "REDIS_PASSWORD",
        raw(hide_env_values = "true")
    )]
    pub password: Option<String>,
    #[structopt(long = "db", help = "Redis database to connect to", default_value = "0")]
    pub db: i64,
    #[structopt(long = "debug", help = "Print the raw server status before the result")]
    pub debug: bool,
}

impl Default for ConnectionArgs {
    fn default() -> ConnectionArgs {
        ConnectionArgs {
            hostname: "localhost".into(),
            port: 6379,
            password: None,
            db: 0,
            debug: false,
        }
    }
}

impl ConnectionArgs {
    /// `redis://[:password@]host:port/db`
    pub fn url(&self) -> Result<Url> {
        let host = if self.hostname.contains(':') {
            format!("[{}]", self.hostname)
        } else {
            self.hostname.clone()
        };
        let mut url = Url::parse(&format!("redis://{}:{}/{}", host, self.port, self.db))?;
        if let Some(ref password) = self.password {
            url.set_password(Some(password.as_str())).map_err(|()| {
                Error::Configuration(format!("cannot use a password with host '{}'", self.hostname))
            })?;
        }
        Ok(url)
    }
}

impl Connector for ConnectionArgs {
    type Source = redis::Connection;

    /// Open a fresh connection, authenticating and selecting `db` on the way
    fn connect(&self) -> Result<redis::Connection> {
        let client = redis::Client::open(self.url()?.as_str())?;
        Ok(client.get_connection()?)
    }
}
