#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub level: log::Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}
