use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct CertificateBundle {
    pub certs: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
    pub certified_key: Arc<CertifiedKey>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
