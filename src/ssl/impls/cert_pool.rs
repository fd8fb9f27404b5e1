use crate::ssl::structs::cert_pool::CertPool;

impl std::fmt::Debug for CertPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertPool")
            .field("certs_count", &self.certs.len())
            .field("path", &self.path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl PartialEq for CertPool {
    fn eq(&self, other: &Self) -> bool {
        self.certs == other.certs
    }
}

impl CertPool {
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains(&self, cert: &rustls::pki_types::CertificateDer<'_>) -> bool {
        self.certs.iter().any(|known| known.as_ref() == cert.as_ref())
    }
}
