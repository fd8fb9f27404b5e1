/// Paths managed by a watcher.
pub mod options;

/// A parsed certificate chain with its matching private key.
pub mod certificate_bundle;

/// A parsed CA bundle usable as a trust pool.
pub mod cert_pool;

/// The certificate / server-trust / client-trust triple.
pub mod watched_state;

/// Thread-safe holder of the watched state, shared with TLS consumers.
pub mod certificate_store;

/// Result of resolving a configured path to the path that must be watched.
pub mod resolved_target;

/// One row of the watch registration table.
pub mod watch_entry;

/// Mapping of watch paths to logical targets.
pub mod watch_registration;

/// The background event-consumption loop.
pub mod watch_loop;

/// The certificate watcher itself.
pub mod cert_watcher;

/// rustls certificate resolver reading the live store.
pub mod dynamic_certificate_resolver;

/// Event sink forwarding to the `log` facade.
pub mod log_event_sink;

/// Event sink keeping every record in memory.
pub mod recording_event_sink;

/// A single structured event as seen by a sink.
pub mod event_record;
