use crate::ssl::structs::event_record::EventRecord;

impl EventRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_field(&self, name: &str, value: &str) -> bool {
        self.field(name) == Some(value)
    }
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}
