//! Documentation about the various scripts contained herein
//!
//! All checks print a single line and exit 0 (OK), 1 (Warning) or 2 (Critical or error).
//!
//! - [check-redis-ping](#check-redis-ping)
//! - [check-redis-connection](#check-redis-connection)
//! - [check-redis-connected-clients](#check-redis-connected-clients)
//! - [check-redis-maxmemory](#check-redis-maxmemory)
//! - [check-redis-memory](#check-redis-memory)
//!
//! # check-redis-ping
//!
//! Needs PING.
//!
//! ```plain
//! $ check-redis-ping --help
//! check-redis-ping (part of redis-plugins) 0.1.0
//! Check that Redis answers PING with PONG.
//!
//! Critical if it does not, or if the server cannot be reached.
//!
//! USAGE:
//!     check-redis-ping [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --debug      Print the raw server status before the result
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --db <db>                Redis database to connect to [default: 0]
//!     -H, --hostname <hostname>    Hostname to connect to [default: localhost]
//!     -P, --password <password>    Redis password used for connection [env: REDIS_PASSWORD]
//!     -p, --port <port>            Redis port to connect to [default: 6379]
//! ```
//!
//! # check-redis-connection
//!
//! Needs ECHO.
//!
//! ```plain
//! $ check-redis-connection --help
//! check-redis-connection (part of redis-plugins) 0.1.0
//! Check the latency of an ECHO round trip to Redis, in milliseconds.
//!
//! A known string is sent base64 encoded and must come back unchanged, otherwise the check is critical regardless of
//! timing. Thresholds must be exceeded, not just reached, to alert.
//!
//! USAGE:
//!     check-redis-connection [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --debug      Print the raw server status before the result
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -c, --critical <critical>    Milliseconds above which to go critical [default: 100]
//!         --db <db>                Redis database to connect to [default: 0]
//!     -H, --hostname <hostname>    Hostname to connect to [default: localhost]
//!     -P, --password <password>    Redis password used for connection [env: REDIS_PASSWORD]
//!     -p, --port <port>            Redis port to connect to [default: 6379]
//!     -w, --warning <warning>      Milliseconds above which to warn [default: 50]
//! ```
//!
//! # check-redis-connected-clients
//!
//! Needs INFO and CONFIG GET.
//!
//! ```plain
//! $ check-redis-connected-clients --help
//! check-redis-connected-clients (part of redis-plugins) 0.1.0
//! Check the number of clients connected to Redis.
//!
//! The configured maxclients is reported as the upper bound of the perfdata.
//!
//! USAGE:
//!     check-redis-connected-clients [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --debug      Print the raw server status before the result
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -c, --critical <critical>    Connected clients to go critical at [default: 5000]
//!         --db <db>                Redis database to connect to [default: 0]
//!     -H, --hostname <hostname>    Hostname to connect to [default: localhost]
//!     -P, --password <password>    Redis password used for connection [env: REDIS_PASSWORD]
//!     -p, --port <port>            Redis port to connect to [default: 6379]
//!     -w, --warning <warning>      Connected clients to warn at [default: 2000]
//! ```
//!
//! # check-redis-maxmemory
//!
//! Needs INFO and CONFIG GET. Fails if maxmemory is not set.
//!
//! ```plain
//! $ check-redis-maxmemory --help
//! check-redis-maxmemory (part of redis-plugins) 0.1.0
//! Check how much of its configured maxmemory Redis is using, in percent.
//!
//! The ratio is rounded up to the next hundredth before comparing. Fails if the server has no maxmemory set, since there
//! is nothing to compare to.
//!
//! USAGE:
//!     check-redis-maxmemory [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --debug      Print the raw server status before the result
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -c, --critical <critical>    Percent of maxmemory used to go critical at [default: 90.00]
//!         --db <db>                Redis database to connect to [default: 0]
//!     -H, --hostname <hostname>    Hostname to connect to [default: localhost]
//!     -P, --password <password>    Redis password used for connection [env: REDIS_PASSWORD]
//!     -p, --port <port>            Redis port to connect to [default: 6379]
//!     -w, --warning <warning>      Percent of maxmemory used to warn at [default: 80.00]
//! ```
//!
//! # check-redis-memory
//!
//! Needs INFO.
//!
//! ```plain
//! $ check-redis-memory --help
//! check-redis-memory (part of redis-plugins) 0.1.0
//! Check the memory allocated by Redis, in bytes.
//!
//! The resident set size is included in the perfdata but does not alert.
//!
//! USAGE:
//!     check-redis-memory [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --debug      Print the raw server status before the result
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -c, --critical <critical>    Bytes used to go critical at [default: 50000000]
//!         --db <db>                Redis database to connect to [default: 0]
//!     -H, --hostname <hostname>    Hostname to connect to [default: localhost]
//!     -P, --password <password>    Redis password used for connection [env: REDIS_PASSWORD]
//!     -p, --port <port>            Redis port to connect to [default: 6379]
//!     -w, --warning <warning>      Bytes used to warn at [default: 50000000]
//! ```
