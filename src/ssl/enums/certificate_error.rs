use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Unable to read certificate file: {0}")]
    CertFileUnreadable(String),
    #[error("Unable to read key file: {0}")]
    KeyFileUnreadable(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file: {0}")]
    NoKeyFound(String),
    #[error("No certificates found in file: {0}")]
    NoCertificatesFound(String),
    #[error("No usable trust anchors in file: {0}")]
    NoTrustAnchors(String),
    #[error("Certificate and private key do not match: {0}")]
    KeyMismatch(String),
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
}
