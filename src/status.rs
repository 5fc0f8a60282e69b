//! Reading status out of a Redis server
//!
//! Everything that crosses the wire goes through the `StatusSource` trait, one
//! method per round trip. Nothing is cached or retried: a failing command is
//! returned to the caller as is.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error::{Error, Result};
use crate::units::bytes_to_human_size;

/// The commands a check may send to the server
pub trait StatusSource {
    /// `INFO all`, as the raw text reply
    fn info(&mut self) -> Result<String>;
    /// The value of a single `CONFIG GET <key>`
    fn config_get(&mut self, key: &str) -> Result<String>;
    fn echo(&mut self, payload: &str) -> Result<String>;
    /// The reply to `PING`, normally `PONG`
    fn ping(&mut self) -> Result<String>;
}

impl StatusSource for redis::Connection {
    fn info(&mut self) -> Result<String> {
        Ok(redis::cmd("INFO").arg("all").query(self)?)
    }

    fn config_get(&mut self, key: &str) -> Result<String> {
        let reply: HashMap<String, String> = redis::cmd("CONFIG").arg("GET").arg(key).query(self)?;
        reply
            .get(key)
            .cloned()
            .ok_or_else(|| Error::Configuration(format!("CONFIG GET {} returned nothing", key)))
    }

    fn echo(&mut self, payload: &str) -> Result<String> {
        Ok(redis::cmd("ECHO").arg(payload).query(self)?)
    }

    fn ping(&mut self) -> Result<String> {
        Ok(redis::cmd("PING").query(self)?)
    }
}

/// The fields of `INFO` that the checks look at
///
/// Built once per run and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub connected_clients: u64,
    pub used_memory: u64,
    pub used_memory_rss: u64,
    fields: BTreeMap<String, String>,
}

impl Snapshot {
    /// Parse the text of an `INFO` reply
    ///
    /// The reply is `key:value` lines grouped under `# Section` headers.
    pub fn parse(info: &str) -> Result<Snapshot> {
        let fields: BTreeMap<String, String> = info
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut parts = line.splitn(2, ':');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) => Some((key.to_owned(), value.to_owned())),
                    _ => None,
                }
            })
            .collect();

        Ok(Snapshot {
            connected_clients: numeric_field(&fields, "connected_clients")?,
            used_memory: numeric_field(&fields, "used_memory")?,
            used_memory_rss: numeric_field(&fields, "used_memory_rss")?,
            fields,
        })
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

fn numeric_field(fields: &BTreeMap<String, String>, field: &str) -> Result<u64> {
    let value = fields
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_owned()))?;
    value.parse().map_err(|_| Error::InvalidField {
        field: field.to_owned(),
        value: value.clone(),
    })
}

/// Run `INFO all` and parse the fields we need
pub fn fetch_snapshot<S: StatusSource>(source: &mut S) -> Result<Snapshot> {
    let snapshot = Snapshot::parse(&source.info()?)?;
    debug!("info");
    debug!("----");
    for (key, value) in snapshot.fields() {
        debug!("{}: {}", key, value);
    }
    Ok(snapshot)
}

/// The configured `maxmemory`, in bytes
///
/// A `maxmemory` of 0 means "no limit", which leaves nothing to compute a
/// usage ratio against, so it is an error.
pub fn fetch_max_memory<S: StatusSource>(source: &mut S) -> Result<u64> {
    let maxmemory = config_number(source, "maxmemory")?;
    debug!("Current maxmemory");
    debug!("-----------------");
    debug!("maxmemory: {}", bytes_to_human_size(maxmemory));
    if maxmemory == 0 {
        return Err(Error::Configuration(
            "maxmemory = 0 cannot evaluate usage".into(),
        ));
    }
    Ok(maxmemory)
}

/// The configured `maxclients`
pub fn fetch_max_clients<S: StatusSource>(source: &mut S) -> Result<u64> {
    let maxclients = config_number(source, "maxclients")?;
    debug!("maxclients: {}", maxclients);
    Ok(maxclients)
}

fn config_number<S: StatusSource>(source: &mut S, key: &str) -> Result<u64> {
    let value = source.config_get(key)?;
    value.trim().parse().map_err(|_| {
        Error::Configuration(format!("{} is not a number: '{}'", key, value))
    })
}

#[cfg(test)]
mod test {
    use super::{fetch_max_clients, fetch_max_memory, fetch_snapshot, Snapshot};
    use crate::error::Error;
    use crate::test_support::{info_reply, FakeServer};

    #[test]
    fn parses_info_sections() {
        let snapshot = Snapshot::parse(&info_reply(12, 1024, 4096)).unwrap();
        assert_eq!(snapshot.connected_clients, 12);
        assert_eq!(snapshot.used_memory, 1024);
        assert_eq!(snapshot.used_memory_rss, 4096);
        assert_eq!(snapshot.fields()["redis_version"], "6.2.6");
        assert!(!snapshot.fields().contains_key("# Server"));
    }

    #[test]
    fn values_may_contain_colons() {
        let info = format!("{}executable:/usr/bin/redis-server:6379\r\n", info_reply(1, 1, 1));
        let snapshot = Snapshot::parse(&info).unwrap();
        assert_eq!(snapshot.fields()["executable"], "/usr/bin/redis-server:6379");
    }

    #[test]
    fn missing_fields_fail_construction() {
        match Snapshot::parse("# Clients\r\nconnected_clients:3\r\n") {
            Err(Error::MissingField(field)) => assert_eq!(field, "used_memory"),
            other => panic!("expected a missing field, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_fields_fail_construction() {
        let info = "connected_clients:many\r\nused_memory:1\r\nused_memory_rss:1\r\n";
        match Snapshot::parse(info) {
            Err(Error::InvalidField { field, value }) => {
                assert_eq!(field, "connected_clients");
                assert_eq!(value, "many");
            }
            other => panic!("expected an invalid field, got {:?}", other),
        }
    }

    #[test]
    fn snapshot_is_one_round_trip() {
        let mut server = FakeServer::new(5, 100, 200);
        let snapshot = fetch_snapshot(&mut server).unwrap();
        assert_eq!(snapshot.connected_clients, 5);
        assert_eq!(server.commands, vec!["INFO all".to_owned()]);
    }

    #[test]
    fn connection_failures_propagate() {
        let mut server = FakeServer::unreachable();
        match fetch_snapshot(&mut server) {
            Err(Error::Connection(_)) => {}
            other => panic!("expected a connection error, got {:?}", other),
        }
    }

    #[test]
    fn max_memory() {
        let mut server = FakeServer::new(0, 0, 0).with_config("maxmemory", "1000");
        assert_eq!(fetch_max_memory(&mut server).unwrap(), 1000);
        assert_eq!(server.commands, vec!["CONFIG GET maxmemory".to_owned()]);
    }

    #[test]
    fn zero_max_memory_is_a_configuration_error() {
        let mut server = FakeServer::new(0, 800, 0).with_config("maxmemory", "0");
        match fetch_max_memory(&mut server) {
            Err(Error::Configuration(msg)) => assert_eq!(msg, "maxmemory = 0 cannot evaluate usage"),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn garbage_config_is_a_configuration_error() {
        let mut server = FakeServer::new(0, 0, 0).with_config("maxclients", "lots");
        match fetch_max_clients(&mut server) {
            Err(Error::Configuration(msg)) => assert!(msg.contains("maxclients")),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }
}
