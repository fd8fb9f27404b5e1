/// Forwards watcher events to the `log` facade.
#[derive(Debug, Clone, Default)]
pub struct LogEventSink;
