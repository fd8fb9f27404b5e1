use crate::ssl::enums::watch_error::WatchError;
use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::structs::options::Options;

impl Options {
    pub fn path_for(&self, target: WatchTarget) -> &str {
        match target {
            WatchTarget::ServerCa => &self.ca_path,
            WatchTarget::ClientCa => &self.client_ca_path,
            WatchTarget::Certificate => &self.cert_path,
            WatchTarget::PrivateKey => &self.key_path,
        }
    }

    /// Targets with a non-empty path, in a fixed order.
    pub fn targets(&self) -> Vec<(WatchTarget, &str)> {
        WatchTarget::ALL
            .iter()
            .map(|target| (*target, self.path_for(*target)))
            .filter(|(_, path)| !path.is_empty())
            .collect()
    }

    pub fn has_key_pair(&self) -> bool {
        !self.cert_path.is_empty() && !self.key_path.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.targets().is_empty()
    }

    pub fn validate(&self) -> Result<(), WatchError> {
        if self.cert_path.is_empty() != self.key_path.is_empty() {
            return Err(WatchError::IncompleteKeyPair {
                cert_path: self.cert_path.clone(),
                key_path: self.key_path.clone(),
            });
        }
        Ok(())
    }
}
