use crate::ssl::structs::log_event_sink::LogEventSink;
use crate::ssl::traits::event_sink::EventSink;
use std::fmt::Write;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn event(&self, level: log::Level, message: &str, fields: &[(&str, &str)]) {
        let mut line = format!("[CERTIFICATE] {}", message);
        for (key, value) in fields {
            let _ = write!(line, " {}={}", key, value);
        }
        log::log!(level, "{}", line);
    }
}
