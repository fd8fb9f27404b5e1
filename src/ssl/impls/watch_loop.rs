use crate::ssl::enums::watch_error::WatchError;
use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::path_resolver::resolve_watch_target;
use crate::ssl::reload::{
    load_ca_bundle,
    load_certificate_key_pair
};
use crate::ssl::ssl::{
    FIELD_CERTIFICATE,
    MESSAGE_LOADED,
    MESSAGE_LOADING,
    MESSAGE_LOAD_FAILED,
    MESSAGE_REMOVED,
    MESSAGE_WATCHER_ERROR
};
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::options::Options;
use crate::ssl::structs::watch_entry::WatchEntry;
use crate::ssl::structs::watch_loop::WatchLoop;
use crate::ssl::structs::watch_registration::WatchRegistration;
use crate::ssl::traits::event_sink::EventSink;
use crossbeam::channel::Receiver;
use log::Level;
use notify::event::{
    AccessKind,
    AccessMode,
    ModifyKind,
    RenameMode
};
use notify::{
    Event,
    EventKind,
    RecursiveMode,
    Watcher
};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What a single notifier event asks the loop to do once the registration
/// table has been updated.
#[derive(Default)]
struct EventPlan {
    reload: BTreeSet<WatchTarget>,
    removed: Vec<String>,
    rewatch: Vec<PathBuf>,
    moved: Vec<(PathBuf, PathBuf)>,
}

impl std::fmt::Debug for WatchLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchLoop")
            .field("options", &self.options)
            .field("registration", &*self.registration.read())
            .finish()
    }
}

impl WatchLoop {
    /// Creates the notifier and registers every distinct watch path of the
    /// table with it. On error everything registered so far is released
    /// together with the notifier.
    pub fn new(
        options: Options,
        registration: Arc<RwLock<WatchRegistration>>,
        store: Arc<CertificateStore>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, WatchError> {
        let (sender, events) = crossbeam::channel::unbounded();
        let mut notifier = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let _ = sender.send(result);
        })
        .map_err(WatchError::Notifier)?;

        let watch_paths = registration.read().watch_paths();
        for path in watch_paths {
            notifier
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| WatchError::Notify {
                    path: path.display().to_string(),
                    source: e,
                })?;
            log::debug!("[WATCHER] Watching {}", path.display());
        }

        Ok(Self {
            options,
            notifier,
            events,
            registration,
            store,
            sink,
        })
    }

    /// Consumes notifier events until `shutdown` fires or is disconnected.
    pub fn watch_changes_loop(mut self, shutdown: Receiver<()>) {
        log::debug!("[WATCHER] Loop started");
        let events = self.events.clone();
        loop {
            crossbeam::select! {
                recv(events) -> message => match message {
                    Ok(Ok(event)) => self.handle_event(&event),
                    Ok(Err(error)) => self.report_error(&error),
                    Err(_) => break,
                },
                recv(shutdown) -> _ => break,
            }
        }
        log::debug!("[WATCHER] Loop stopped");
    }

    pub(crate) fn handle_event(&mut self, event: &Event) {
        if !is_relevant(&event.kind) {
            return;
        }
        let plan = self.plan(event);

        for path in &plan.rewatch {
            let _ = self.notifier.unwatch(path);
            self.watch(path);
        }
        for (old, new) in &plan.moved {
            if !self.registration.read().is_watched(old) {
                let _ = self.notifier.unwatch(old);
            }
            self.watch(new);
        }
        for configured_path in &plan.removed {
            self.sink.event(Level::Warn, MESSAGE_REMOVED, &[(FIELD_CERTIFICATE, configured_path.as_str())]);
        }

        let trigger = format!("{:?}", event.kind);
        if plan.reload.iter().any(|target| target.is_key_pair()) {
            let tagged = if plan.reload.contains(&WatchTarget::Certificate) {
                self.options.cert_path.clone()
            } else {
                self.options.key_path.clone()
            };
            self.reload_key_pair(&tagged, &trigger);
        }
        for target in [WatchTarget::ServerCa, WatchTarget::ClientCa] {
            if plan.reload.contains(&target) {
                self.reload_pool(target, &trigger);
            }
        }
    }

    fn plan(&self, event: &Event) -> EventPlan {
        let removal = is_removal(&event.kind);
        let mut plan = EventPlan::default();
        let mut registration = self.registration.write();

        for path in &event.paths {
            for index in registration.matching(path) {
                let entry = &mut registration.entries[index];
                if entry.indirect || removal {
                    // Symlink swaps show up as churn inside the watched directory
                    // and replacements as removals, so the configured path is
                    // resolved again.
                    revalidate(entry, removal, &mut plan);
                } else {
                    plan.reload.insert(entry.target);
                }
            }
        }
        plan
    }

    fn reload_key_pair(&self, tagged: &str, trigger: &str) {
        self.sink.event(
            Level::Info,
            MESSAGE_LOADING,
            &[(FIELD_CERTIFICATE, tagged), ("event", trigger)],
        );
        match load_certificate_key_pair(&self.options.cert_path, &self.options.key_path) {
            Ok(bundle) => {
                self.store.set_certificate(Arc::new(bundle));
                self.clear_pending(|target| target.is_key_pair());
                self.sink.event(Level::Info, MESSAGE_LOADED, &[(FIELD_CERTIFICATE, tagged)]);
            }
            Err(error) => {
                let error = error.to_string();
                self.sink.event(
                    Level::Error,
                    MESSAGE_LOAD_FAILED,
                    &[(FIELD_CERTIFICATE, tagged), ("error", error.as_str())],
                );
            }
        }
    }

    fn reload_pool(&self, target: WatchTarget, trigger: &str) {
        let path = self.options.path_for(target);
        self.sink.event(
            Level::Info,
            MESSAGE_LOADING,
            &[(FIELD_CERTIFICATE, path), ("event", trigger)],
        );
        match load_ca_bundle(path) {
            Ok(pool) => {
                self.store.set_pool(target, Arc::new(pool));
                self.clear_pending(|candidate| candidate == target);
                self.sink.event(Level::Info, MESSAGE_LOADED, &[(FIELD_CERTIFICATE, path)]);
            }
            Err(error) => {
                let error = error.to_string();
                self.sink.event(
                    Level::Error,
                    MESSAGE_LOAD_FAILED,
                    &[(FIELD_CERTIFICATE, path), ("error", error.as_str())],
                );
            }
        }
    }

    fn clear_pending(&self, selected: impl Fn(WatchTarget) -> bool) {
        let mut registration = self.registration.write();
        for entry in registration.entries.iter_mut().filter(|entry| selected(entry.target)) {
            entry.pending = false;
        }
    }

    fn watch(&mut self, path: &Path) {
        match self.notifier.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => log::debug!("[WATCHER] Watching {}", path.display()),
            Err(error) => self.report_error(&error),
        }
    }

    /// Notifier errors are tagged with every configured path they concern,
    /// or with all of them when the error names no path.
    fn report_error(&self, error: &notify::Error) {
        let registration = self.registration.read();
        let mut concerned: Vec<String> = Vec::new();
        for path in &error.paths {
            for index in registration.matching(path) {
                push_unique(&mut concerned, &registration.entries[index].configured_path);
            }
        }
        if concerned.is_empty() {
            for entry in registration.entries() {
                push_unique(&mut concerned, &entry.configured_path);
            }
        }
        drop(registration);

        let message = error.to_string();
        for configured_path in &concerned {
            self.sink.event(
                Level::Error,
                MESSAGE_WATCHER_ERROR,
                &[(FIELD_CERTIFICATE, configured_path.as_str()), ("error", message.as_str())],
            );
        }
    }
}

/// Brings `entry` in line with what its configured path resolves to now.
/// A path that no longer resolves is reported once, and a direct entry falls
/// back to watching the directory it lived in until the file comes back.
fn revalidate(entry: &mut WatchEntry, removal: bool, plan: &mut EventPlan) {
    match resolve_watch_target(Path::new(&entry.configured_path)) {
        Ok(resolved) => {
            let replaced = removal && !entry.indirect;
            if entry.missing || replaced || resolved.real_path != entry.real_path {
                log::debug!(
                    "[WATCHER] {} now resolves to {}",
                    entry.configured_path,
                    resolved.real_path.display()
                );
                entry.real_path = resolved.real_path;
                entry.pending = true;
            }
            entry.missing = false;
            entry.indirect = resolved.indirect;
            if resolved.watch_path != entry.watch_path {
                let old = std::mem::replace(&mut entry.watch_path, resolved.watch_path);
                push_move(plan, old, entry.watch_path.clone());
            } else if replaced && !plan.rewatch.contains(&entry.watch_path) {
                plan.rewatch.push(entry.watch_path.clone());
            }
            if entry.pending {
                plan.reload.insert(entry.target);
            }
        }
        Err(_) => {
            if entry.missing {
                return;
            }
            entry.missing = true;
            push_unique(&mut plan.removed, &entry.configured_path);
            if entry.indirect {
                return;
            }
            if let Some(parent) = entry.real_path.parent().map(Path::to_path_buf) {
                let old = std::mem::replace(&mut entry.watch_path, parent);
                entry.indirect = true;
                push_move(plan, old, entry.watch_path.clone());
            }
        }
    }
}

fn push_move(plan: &mut EventPlan, old: PathBuf, new: PathBuf) {
    let moved = (old, new);
    if !plan.moved.contains(&moved) {
        plan.moved.push(moved);
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|known| known == value) {
        list.push(value.to_string());
    }
}

/// Reads and permission changes say nothing about content.
pub(crate) fn is_relevant(kind: &EventKind) -> bool {
    match kind {
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => true,
        EventKind::Access(_) => false,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        _ => true,
    }
}

pub(crate) fn is_removal(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Remove(_)
            | EventKind::Modify(ModifyKind::Name(RenameMode::From | RenameMode::Any))
    )
}
