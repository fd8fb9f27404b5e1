use crate::ssl::enums::loop_state::LoopState;
use crate::ssl::enums::watch_error::WatchError;
use crate::ssl::enums::watch_target::WatchTarget;
use crate::ssl::reload::{
    load_ca_bundle,
    load_certificate_key_pair
};
use crate::ssl::structs::cert_pool::CertPool;
use crate::ssl::structs::cert_watcher::CertWatcher;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::log_event_sink::LogEventSink;
use crate::ssl::structs::options::Options;
use crate::ssl::structs::watch_loop::WatchLoop;
use crate::ssl::structs::watch_registration::WatchRegistration;
use crate::ssl::traits::event_sink::EventSink;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

impl std::fmt::Debug for CertWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertWatcher")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("running", &self.is_running())
            .finish()
    }
}

impl CertWatcher {
    pub fn new(options: Options) -> Result<Self, WatchError> {
        Self::with_sink(options, Arc::new(LogEventSink::new()))
    }

    /// Resolves and registers every configured path, then loads all of them
    /// once. Nothing is returned unless every step succeeded; the loop is not
    /// started yet. Paths are resolved before the key pair is checked for
    /// completeness, so a missing file is reported as such.
    pub fn with_sink(options: Options, sink: Arc<dyn EventSink>) -> Result<Self, WatchError> {
        let registration = WatchRegistration::build(&options)?;
        options.validate()?;
        let registration = Arc::new(RwLock::new(registration));
        let store = Arc::new(CertificateStore::new());
        let watch_loop = WatchLoop::new(
            options.clone(),
            Arc::clone(&registration),
            Arc::clone(&store),
            sink,
        )?;
        initial_load(&options, &store)?;

        log::info!(
            "[CERTIFICATE] Watching {} target(s) over {} path(s)",
            registration.read().entries().len(),
            registration.read().watch_paths().len()
        );
        Ok(Self {
            options,
            store,
            registration,
            state: Mutex::new(LoopState::Idle(Box::new(watch_loop))),
        })
    }

    /// Spawns the loop thread. Can only succeed once per watcher.
    pub fn start(&self) -> Result<(), WatchError> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, LoopState::Closed) {
            LoopState::Idle(watch_loop) => {
                let (shutdown, shutdown_receiver) = crossbeam::channel::bounded::<()>(1);
                let spawned = std::thread::Builder::new()
                    .name("cert-watcher".to_string())
                    .spawn(move || watch_loop.watch_changes_loop(shutdown_receiver));
                match spawned {
                    Ok(handle) => {
                        *state = LoopState::Running { shutdown, handle };
                        Ok(())
                    }
                    Err(e) => Err(WatchError::Spawn(e)),
                }
            }
            running @ LoopState::Running { .. } => {
                *state = running;
                Err(WatchError::AlreadyStarted)
            }
            LoopState::Closed => Err(WatchError::Closed),
        }
    }

    /// Stops the loop and releases every OS watch. Safe to call repeatedly.
    pub fn close(&self) {
        let previous = std::mem::replace(&mut *self.state.lock(), LoopState::Closed);
        match previous {
            LoopState::Idle(watch_loop) => drop(watch_loop),
            LoopState::Running { shutdown, handle } => {
                drop(shutdown);
                if handle.join().is_err() {
                    log::error!("[WATCHER] Loop thread panicked");
                }
            }
            LoopState::Closed => return,
        }
        log::debug!("[WATCHER] Closed");
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), LoopState::Running { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.state.lock(), LoopState::Closed)
    }

    pub fn certificate(&self) -> Option<Arc<CertificateBundle>> {
        self.store.certificate()
    }

    pub fn server_cas(&self) -> Option<Arc<CertPool>> {
        self.store.server_cas()
    }

    pub fn client_cas(&self) -> Option<Arc<CertPool>> {
        self.store.client_cas()
    }

    /// The live store, for handing to a `DynamicCertificateResolver`.
    pub fn store(&self) -> Arc<CertificateStore> {
        Arc::clone(&self.store)
    }

    pub fn registration(&self) -> WatchRegistration {
        self.registration.read().clone()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Drop for CertWatcher {
    fn drop(&mut self) {
        self.close();
    }
}

fn initial_load(options: &Options, store: &CertificateStore) -> Result<(), WatchError> {
    if options.has_key_pair() {
        let bundle = load_certificate_key_pair(&options.cert_path, &options.key_path).map_err(|e| {
            WatchError::InitialLoad {
                target: WatchTarget::Certificate,
                path: options.cert_path.clone(),
                source: e,
            }
        })?;
        store.set_certificate(Arc::new(bundle));
    }
    for target in [WatchTarget::ServerCa, WatchTarget::ClientCa] {
        let path = options.path_for(target);
        if path.is_empty() {
            continue;
        }
        let pool = load_ca_bundle(path).map_err(|e| WatchError::InitialLoad {
            target,
            path: path.to_string(),
            source: e,
        })?;
        store.set_pool(target, Arc::new(pool));
    }
    Ok(())
}
