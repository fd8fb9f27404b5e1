use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::structs::resolved_target::ResolvedTarget;
use crate::ssl::structs::watch_entry::WatchEntry;
use std::path::Path;

impl WatchEntry {
    pub fn new(target: WatchTarget, configured_path: &str, resolved: ResolvedTarget) -> Self {
        Self {
            target,
            configured_path: configured_path.to_string(),
            watch_path: resolved.watch_path,
            real_path: resolved.real_path,
            indirect: resolved.indirect,
            pending: false,
            missing: false,
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.indirect {
            path == self.watch_path || path.parent() == Some(self.watch_path.as_path())
        } else {
            path == self.watch_path
        }
    }
}
