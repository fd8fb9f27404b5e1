use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Path handed to the notifier.
    pub watch_path: PathBuf,
    /// Fully resolved file the configured path currently points at.
    pub real_path: PathBuf,
    /// True when `watch_path` is the directory holding a symlink.
    pub indirect: bool,
}
