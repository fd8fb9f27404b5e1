use crate::ssl::structs::watch_entry::WatchEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchRegistration {
    pub(crate) entries: Vec<WatchEntry>,
}
