//! Errors that stop a check before it can produce a status
//!
//! Every one of these is reported as `Error: <message>` with exit code 2.

use std::error::Error as StdError;
use std::result::Result as StdResult;

use derive_more::{Display, From};

#[derive(Debug, Display, From)]
pub enum Error {
    /// Could not reach, authenticate against, or query the server
    #[display(fmt = "{}", _0)]
    Connection(redis::RedisError),
    /// The connection options do not form a valid redis url
    #[display(fmt = "invalid connection url: {}", _0)]
    Url(url::ParseError),
    /// The server's configuration makes the measurement meaningless
    #[from(ignore)]
    #[display(fmt = "{}", _0)]
    Configuration(String),
    /// A severity token that is not one of OK, Warning, Critical, Unknown
    #[from(ignore)]
    #[display(fmt = "{}", _0)]
    Validation(String),
    /// The echo payload did not come back intact
    #[from(ignore)]
    #[display(fmt = "echo does not round-trip: {}", _0)]
    EchoMismatch(String),
    /// INFO did not contain a field we need
    #[from(ignore)]
    #[display(fmt = "INFO reply has no '{}' field", _0)]
    MissingField(String),
    #[from(ignore)]
    #[display(fmt = "INFO field '{}' is not a number: '{}'", field, value)]
    InvalidField { field: String, value: String },
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Connection(ref e) => Some(e),
            Error::Url(ref e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn redis_errors_convert() {
        let err: Error = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into();
        match err {
            Error::Connection(_) => {}
            other => panic!("expected a connection error, got {:?}", other),
        }
    }

    #[test]
    fn messages_name_the_field() {
        let err = Error::InvalidField {
            field: "used_memory".into(),
            value: "lots".into(),
        };
        assert_eq!(
            err.to_string(),
            "INFO field 'used_memory' is not a number: 'lots'"
        );
        assert_eq!(
            Error::MissingField("connected_clients".into()).to_string(),
            "INFO reply has no 'connected_clients' field"
        );
    }
}
