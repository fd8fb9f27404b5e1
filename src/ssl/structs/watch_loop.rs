use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::options::Options;
use crate::ssl::structs::watch_registration::WatchRegistration;
use crate::ssl::traits::event_sink::EventSink;
use crossbeam::channel::Receiver;
use notify::RecommendedWatcher;
use parking_lot::RwLock;
use std::sync::Arc;

/// Owns the OS subscription and consumes its events. Dropping it releases
/// every watch it registered.
pub struct WatchLoop {
    pub(crate) options: Options,
    pub(crate) notifier: RecommendedWatcher,
    pub(crate) events: Receiver<notify::Result<notify::Event>>,
    pub(crate) registration: Arc<RwLock<WatchRegistration>>,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) sink: Arc<dyn EventSink>,
}
