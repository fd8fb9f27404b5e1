use crate::ssl::structs::watch_loop::WatchLoop;
use crossbeam::channel::Sender;
use std::thread::JoinHandle;

/// Where the watch loop is in its lifecycle.
///
/// A watcher is `Idle` after construction (the notifier is registered but
/// nobody consumes its events yet), `Running` once `start()` spawned the loop
/// thread, and `Closed` after `close()`. There is no way back from `Closed`.
pub enum LoopState {
    Idle(Box<WatchLoop>),
    Running {
        shutdown: Sender<()>,
        handle: JoinHandle<()>,
    },
    Closed,
}
