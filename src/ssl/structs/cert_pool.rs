use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;

pub struct CertPool {
    pub certs: Vec<CertificateDer<'static>>,
    pub roots: RootCertStore,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub path: String,
}
