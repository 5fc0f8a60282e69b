//! An in-memory stand-in for a Redis server

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use crate::connection::Connector;
use crate::error::{Error, Result};
use crate::status::StatusSource;

/// An `INFO all` reply with the fields the checks need, CRLF terminated
pub(crate) fn info_reply(connected_clients: u64, used_memory: u64, used_memory_rss: u64) -> String {
    [
        "# Server",
        "redis_version:6.2.6",
        "redis_mode:standalone",
        "tcp_port:6379",
        "",
        "# Clients",
        &format!("connected_clients:{}", connected_clients),
        "blocked_clients:0",
        "",
        "# Memory",
        &format!("used_memory:{}", used_memory),
        &format!("used_memory_human:{}B", used_memory),
        &format!("used_memory_rss:{}", used_memory_rss),
        "mem_allocator:jemalloc-5.1.0",
        "",
    ]
    .join("\r\n")
}

pub(crate) struct FakeServer {
    info: String,
    config: HashMap<String, String>,
    echo: Box<dyn Fn(&str) -> String>,
    pong: String,
    reachable: bool,
    /// Every command received, in order
    pub commands: Vec<String>,
}

impl FakeServer {
    pub fn new(connected_clients: u64, used_memory: u64, used_memory_rss: u64) -> FakeServer {
        FakeServer {
            info: info_reply(connected_clients, used_memory, used_memory_rss),
            config: HashMap::new(),
            echo: Box::new(|payload: &str| payload.to_owned()),
            pong: "PONG".into(),
            reachable: true,
            commands: Vec::new(),
        }
    }

    /// A server that fails every command as if the socket was closed
    pub fn unreachable() -> FakeServer {
        FakeServer {
            reachable: false,
            ..FakeServer::new(0, 0, 0)
        }
    }

    pub fn with_config(mut self, key: &str, value: &str) -> FakeServer {
        self.config.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_echo<F: Fn(&str) -> String + 'static>(mut self, echo: F) -> FakeServer {
        self.echo = Box::new(echo);
        self
    }

    pub fn with_pong(mut self, pong: &str) -> FakeServer {
        self.pong = pong.to_owned();
        self
    }

    fn receive(&mut self, command: String) -> Result<()> {
        self.commands.push(command);
        if self.reachable {
            Ok(())
        } else {
            Err(Error::Connection(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "Connection refused",
            ))))
        }
    }
}

impl StatusSource for FakeServer {
    fn info(&mut self) -> Result<String> {
        self.receive("INFO all".into())?;
        Ok(self.info.clone())
    }

    fn config_get(&mut self, key: &str) -> Result<String> {
        self.receive(format!("CONFIG GET {}", key))?;
        self.config
            .get(key)
            .cloned()
            .ok_or_else(|| Error::Configuration(format!("CONFIG GET {} returned nothing", key)))
    }

    fn echo(&mut self, payload: &str) -> Result<String> {
        self.receive(format!("ECHO {}", payload))?;
        Ok((self.echo)(payload))
    }

    fn ping(&mut self) -> Result<String> {
        self.receive("PING".into())?;
        Ok(self.pong.clone())
    }
}

/// Hands out fresh `FakeServer`s after waiting `delay`, like a server that is
/// slow to accept or authenticate
pub(crate) struct SlowConnect {
    pub delay: Duration,
}

impl Connector for SlowConnect {
    type Source = FakeServer;

    fn connect(&self) -> Result<FakeServer> {
        thread::sleep(self.delay);
        Ok(FakeServer::new(0, 0, 0))
    }
}

/// A server that refuses connections
pub(crate) struct Refused;

impl Connector for Refused {
    type Source = FakeServer;

    fn connect(&self) -> Result<FakeServer> {
        Err(Error::Connection(redis::RedisError::from((
            redis::ErrorKind::IoError,
            "Connection refused",
        ))))
    }
}
