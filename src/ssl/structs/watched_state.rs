use crate::ssl::structs::cert_pool::CertPool;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use std::sync::Arc;

#[derive(Debug, Default, Clone)]
pub struct WatchedState {
    pub certificate: Option<Arc<CertificateBundle>>,
    pub server_cas: Option<Arc<CertPool>>,
    pub client_cas: Option<Arc<CertPool>>,
}
