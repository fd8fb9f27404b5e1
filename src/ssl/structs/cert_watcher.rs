use crate::ssl::enums::loop_state::LoopState;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::options::Options;
use crate::ssl::structs::watch_registration::WatchRegistration;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

pub struct CertWatcher {
    pub(crate) options: Options,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) registration: Arc<RwLock<WatchRegistration>>,
    pub(crate) state: Mutex<LoopState>,
}
