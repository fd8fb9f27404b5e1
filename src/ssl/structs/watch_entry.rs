use crate::ssl::enums::watch_target::WatchTarget;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    pub target: WatchTarget,
    pub configured_path: String,
    pub watch_path: PathBuf,
    pub real_path: PathBuf,
    pub indirect: bool,
    /// Set when the resolved file changed but reloading it has not succeeded yet.
    pub pending: bool,
    /// Set while the configured path cannot be resolved. The entry then
    /// watches the directory the file lived in, so a recreated file is seen.
    pub missing: bool,
}
