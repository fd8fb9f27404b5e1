/// Structured event sink the watcher reports to.
pub mod event_sink;
