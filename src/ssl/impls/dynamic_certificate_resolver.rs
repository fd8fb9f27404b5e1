use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::server::ResolvesServerCert;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("has_certificate", &self.has_certificate())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(store: Arc<CertificateStore>) -> Self {
        Self { store }
    }

    pub fn has_certificate(&self) -> bool {
        self.store.certificate().is_some()
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: rustls::server::ClientHello<'_>) -> Option<Arc<rustls::sign::CertifiedKey>> {
        self.store
            .certificate()
            .map(|bundle| Arc::clone(&bundle.certified_key))
    }
}
