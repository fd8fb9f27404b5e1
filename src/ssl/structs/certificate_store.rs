use crate::ssl::structs::watched_state::WatchedState;
use parking_lot::RwLock;

pub struct CertificateStore {
    pub(crate) state: RwLock<WatchedState>,
}
