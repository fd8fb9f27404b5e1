use crate::ssl::structs::options::Options;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: Option<u64>,
    #[serde(default)]
    pub tls: Options,
}
