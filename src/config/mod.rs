//! Configuration management module.
//!
//! Loads the service configuration from a TOML file. Besides the logging
//! settings it holds a `[tls]` table with the paths the certificate watcher
//! manages.
//!
//! ```toml
//! log_level = "info"
//! log_console_interval = 60
//!
//! [tls]
//! ca_path = "/etc/tls/ca.crt"
//! client_ca_path = ""
//! cert_path = "/etc/tls/tls.crt"
//! key_path = "/etc/tls/tls.key"
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use certwatch::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let defaults = Configuration::init();
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
