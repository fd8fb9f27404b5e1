/// Receives the watcher's semantic events.
///
/// Called synchronously from the watch loop thread, so implementations should
/// return quickly. `fields` always contains a `certificate` entry holding the
/// configured path the event is about.
pub trait EventSink: Send + Sync {
    fn event(&self, level: log::Level, message: &str, fields: &[(&str, &str)]);
}
