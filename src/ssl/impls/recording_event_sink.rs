use crate::ssl::structs::event_record::EventRecord;
use crate::ssl::structs::recording_event_sink::RecordingEventSink;
use crate::ssl::traits::event_sink::EventSink;

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drains everything recorded so far.
    pub fn take_all(&self) -> Vec<EventRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn filter_message(&self, message: &str) -> Vec<EventRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.message == message)
            .cloned()
            .collect()
    }

    pub fn filter_field(&self, name: &str, value: &str) -> Vec<EventRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.has_field(name, value))
            .cloned()
            .collect()
    }

    pub fn count(&self, message: &str, name: &str, value: &str) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|record| record.message == message && record.has_field(name, value))
            .count()
    }
}

impl EventSink for RecordingEventSink {
    fn event(&self, level: log::Level, message: &str, fields: &[(&str, &str)]) {
        self.records.lock().push(EventRecord {
            level,
            message: message.to_string(),
            fields: fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });
    }
}
