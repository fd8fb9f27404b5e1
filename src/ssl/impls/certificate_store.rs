use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::structs::cert_pool::CertPool;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::watched_state::WatchedState;
use std::sync::Arc;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("CertificateStore")
            .field("has_certificate", &state.certificate.is_some())
            .field("server_cas", &state.server_cas.as_ref().map(|pool| pool.len()))
            .field("client_cas", &state.client_cas.as_ref().map(|pool| pool.len()))
            .finish()
    }
}

impl Default for CertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            state: parking_lot::RwLock::new(WatchedState::default()),
        }
    }

    pub fn certificate(&self) -> Option<Arc<CertificateBundle>> {
        self.state.read().certificate.clone()
    }

    pub fn server_cas(&self) -> Option<Arc<CertPool>> {
        self.state.read().server_cas.clone()
    }

    pub fn client_cas(&self) -> Option<Arc<CertPool>> {
        self.state.read().client_cas.clone()
    }

    /// All three members as of one instant.
    pub fn snapshot(&self) -> WatchedState {
        self.state.read().clone()
    }

    pub(crate) fn set_certificate(&self, bundle: Arc<CertificateBundle>) {
        self.state.write().certificate = Some(bundle);
    }

    /// Replaces the whole pool of `target`; nothing of the previous pool is kept.
    pub(crate) fn set_pool(&self, target: WatchTarget, pool: Arc<CertPool>) {
        let mut state = self.state.write();
        match target {
            WatchTarget::ServerCa => state.server_cas = Some(pool),
            WatchTarget::ClientCa => state.client_cas = Some(pool),
            WatchTarget::Certificate | WatchTarget::PrivateKey => {
                log::error!("[CERTIFICATE] {} is not a trust pool target", target);
            }
        }
    }
}
