use serde::{Deserialize, Serialize};

/// Files a watcher keeps in sync. An empty path means "not managed".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    #[serde(default)]
    pub ca_path: String,
    #[serde(default)]
    pub client_ca_path: String,
    #[serde(default)]
    pub cert_path: String,
    #[serde(default)]
    pub key_path: String,
}
