use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::watch_target::WatchTarget;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Unable to resolve watch target {path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create the file notifier: {0}")]
    Notifier(#[source] notify::Error),
    #[error("Failed to register watch on {path}: {source}")]
    Notify {
        path: String,
        #[source]
        source: notify::Error,
    },
    #[error("Certificate and key paths must be configured together (cert: '{cert_path}', key: '{key_path}')")]
    IncompleteKeyPair {
        cert_path: String,
        key_path: String,
    },
    #[error("Initial load of {target} from {path} failed: {source}")]
    InitialLoad {
        target: WatchTarget,
        path: String,
        #[source]
        source: CertificateError,
    },
    #[error("Failed to spawn the watch loop thread: {0}")]
    Spawn(std::io::Error),
    #[error("Watch loop is already running")]
    AlreadyStarted,
    #[error("Watcher has been closed")]
    Closed,
}
