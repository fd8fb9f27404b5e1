//! Parsing of certificate, key and CA bundle files.
//!
//! Nothing in here touches shared state: callers get either a fully parsed
//! value or a `CertificateError`, and decide what to publish.

use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::cert_pool::CertPool;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use rustls::RootCertStore;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

/// Loads a certificate chain and its private key, and checks that the key
/// belongs to the end-entity certificate.
pub fn load_certificate_key_pair(
    cert_path: &str,
    key_path: &str,
) -> Result<CertificateBundle, CertificateError> {
    let certs = read_certificates(cert_path)?;
    let key = read_private_key(key_path)?;
    let provider = rustls::crypto::ring::default_provider();
    let certified_key = CertifiedKey::from_der(certs.clone(), key.clone_key(), &provider)
        .map_err(|e| match e {
            rustls::Error::InconsistentKeys(_) => {
                CertificateError::KeyMismatch(format!("{} / {}: {}", cert_path, key_path, e))
            }
            other => CertificateError::CertifiedKeyError(format!("{}: {}", key_path, other)),
        })?;
    Ok(CertificateBundle {
        certs,
        key,
        certified_key: Arc::new(certified_key),
        loaded_at: chrono::Utc::now(),
        cert_path: cert_path.to_string(),
        key_path: key_path.to_string(),
    })
}

/// Loads every PEM certificate of a CA bundle into a trust pool.
pub fn load_ca_bundle(path: &str) -> Result<CertPool, CertificateError> {
    let certs = read_certificates(path)?;
    let mut roots = RootCertStore::empty();
    let (valid, ignored) = roots.add_parsable_certificates(certs.iter().cloned());
    if valid == 0 {
        return Err(CertificateError::NoTrustAnchors(format!(
            "{} ({} certificates rejected)",
            path, ignored
        )));
    }
    Ok(CertPool {
        certs,
        roots,
        loaded_at: chrono::Utc::now(),
        path: path.to_string(),
    })
}

fn read_certificates(path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let file = File::open(path)
        .map_err(|e| CertificateError::CertFileUnreadable(format!("{}: {}", path, e)))?;
    let mut reader = BufReader::new(file);
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::CertParseError(format!("{}: {}", path, e)))?;
    if certs.is_empty() {
        return Err(CertificateError::NoCertificatesFound(path.to_string()));
    }
    Ok(certs)
}

fn read_private_key(path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let file = File::open(path)
        .map_err(|e| CertificateError::KeyFileUnreadable(format!("{}: {}", path, e)))?;
    let mut reader = BufReader::new(file);
    match rustls_pemfile::private_key(&mut reader) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(CertificateError::NoKeyFound(path.to_string())),
        Err(e) => Err(CertificateError::KeyParseError(format!("{}: {}", path, e))),
    }
}
