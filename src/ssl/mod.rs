//! TLS material kept in sync with files on disk.
//!
//! A [`CertWatcher`](structs::cert_watcher::CertWatcher) loads a leaf
//! certificate/key pair and up to two CA bundles, then follows filesystem
//! events for those files and publishes every successfully parsed
//! replacement. A file that fails to parse, or disappears, never replaces
//! material that is already loaded.
//!
//! # Data Flow
//!
//! ```text
//! notify watcher ──▶ crossbeam channel ──▶ watch loop thread
//!                                             │ classify by watch registration
//!                                             │ reload::load_* (pure)
//!                                             ▼
//!                                      CertificateStore (RwLock)
//!                                             ▲
//!               TLS handshakes ───────────────┘ certificate() / server_cas() / client_cas()
//! ```
//!
//! # Secret mounts
//!
//! Paths that are symlinks (or live in a symlinked directory) are watched
//! through the directory holding the symlink, so an atomic swap of the
//! `..data` link is seen even though no file is written.
//!
//! # Example
//!
//! ```rust,ignore
//! use certwatch::ssl::structs::cert_watcher::CertWatcher;
//! use certwatch::ssl::structs::options::Options;
//!
//! let watcher = CertWatcher::new(Options {
//!     cert_path: "/etc/tls/tls.crt".to_string(),
//!     key_path: "/etc/tls/tls.key".to_string(),
//!     ..Default::default()
//! })?;
//! watcher.start()?;
//! let current = watcher.certificate();
//! ```

/// Error and state enumerations.
pub mod enums;

/// Implementation blocks for the ssl structs.
pub mod impls;

/// Configured path to watch path resolution.
pub mod path_resolver;

/// Certificate, key and CA bundle parsing.
pub mod reload;

/// Shared constants and rustls config builders.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Data structures of the watcher.
pub mod structs;

/// Event sink trait.
pub mod traits;
