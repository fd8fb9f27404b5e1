use crate::ssl::structs::cert_pool::CertPool;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::server::WebPkiClientVerifier;
use std::sync::Arc;

pub const MESSAGE_LOADING: &str = "Loading modified certificate";
pub const MESSAGE_LOADED: &str = "Loaded modified certificate";
pub const MESSAGE_LOAD_FAILED: &str = "Failed to load certificate";
pub const MESSAGE_REMOVED: &str = "Certificate has been removed, using the last known version";
pub const MESSAGE_WATCHER_ERROR: &str = "Watcher got error";

/// Field every watcher event is tagged with.
pub const FIELD_CERTIFICATE: &str = "certificate";

/// Server config presenting whatever the resolver's store holds at handshake
/// time. Client certificates are required when `client_cas` is given; the
/// verifier is built from that pool as it is now.
pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
    client_cas: Option<&CertPool>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let builder = rustls::ServerConfig::builder();
    match client_cas {
        None => Ok(builder
            .with_no_client_auth()
            .with_cert_resolver(resolver)),
        Some(pool) => {
            let verifier = WebPkiClientVerifier::builder(Arc::new(pool.roots.clone()))
                .build()
                .map_err(|e| rustls::Error::General(e.to_string()))?;
            Ok(builder
                .with_client_cert_verifier(verifier)
                .with_cert_resolver(resolver))
        }
    }
}

pub fn create_client_config(
    server_cas: &CertPool,
    identity: Option<&CertificateBundle>,
) -> Result<rustls::ClientConfig, rustls::Error> {
    let builder = rustls::ClientConfig::builder().with_root_certificates(server_cas.roots.clone());
    match identity {
        None => Ok(builder.with_no_client_auth()),
        Some(bundle) => builder.with_client_auth_cert(bundle.certs.clone(), bundle.key.clone_key()),
    }
}

/// PEM certificate and key for `localhost`, plus `domain` when it differs.
pub fn generate_self_signed(domain: &str) -> Result<(String, String), rcgen::Error> {
    let mut subject_alt_names = vec![String::from("localhost")];
    if !domain.is_empty() && domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }
    let rcgen::CertifiedKey { cert, signing_key } = rcgen::generate_simple_self_signed(subject_alt_names)?;
    Ok((cert.pem(), signing_key.serialize_pem()))
}
