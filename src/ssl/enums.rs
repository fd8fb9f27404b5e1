/// Errors raised while parsing certificate, key and CA bundle files.
pub mod certificate_error;

/// Lifecycle states of the background watch loop.
pub mod loop_state;

/// Errors raised while constructing, starting or stopping a watcher.
pub mod watch_error;

/// Logical targets a watched path can map to.
pub mod watch_target;
