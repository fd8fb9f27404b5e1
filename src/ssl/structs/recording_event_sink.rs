use crate::ssl::structs::event_record::EventRecord;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct RecordingEventSink {
    pub(crate) records: Mutex<Vec<EventRecord>>,
}
