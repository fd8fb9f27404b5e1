use crate::ssl::enums::watch_error::WatchError;
use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::path_resolver::resolve_watch_target;
use crate::ssl::structs::options::Options;
use crate::ssl::structs::watch_entry::WatchEntry;
use crate::ssl::structs::watch_registration::WatchRegistration;
use std::path::{Path, PathBuf};

impl WatchRegistration {
    /// Resolves every configured path. Fails on the first one that cannot be
    /// resolved, so a watcher never starts with a partial table.
    pub fn build(options: &Options) -> Result<Self, WatchError> {
        let mut entries = Vec::new();
        for (target, path) in options.targets() {
            let resolved = resolve_watch_target(Path::new(path)).map_err(|e| WatchError::Resolve {
                path: path.to_string(),
                source: e,
            })?;
            entries.push(WatchEntry::new(target, path, resolved));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WatchEntry] {
        &self.entries
    }

    pub fn entry(&self, target: WatchTarget) -> Option<&WatchEntry> {
        self.entries.iter().find(|entry| entry.target == target)
    }

    /// Distinct paths registered with the notifier, in table order.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in &self.entries {
            if !paths.contains(&entry.watch_path) {
                paths.push(entry.watch_path.clone());
            }
        }
        paths
    }

    pub fn is_watched(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.watch_path == path)
    }

    /// Indexes of the entries an event on `path` may concern. A direct entry
    /// matches its own file; an indirect entry matches anything inside the
    /// directory it watches.
    pub fn matching(&self, path: &Path) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(path))
            .map(|(index, _)| index)
            .collect()
    }
}
