pub mod cert_pool;
pub mod cert_watcher;
pub mod certificate_bundle;
pub mod certificate_store;
pub mod dynamic_certificate_resolver;
pub mod event_record;
pub mod log_event_sink;
pub mod options;
pub mod recording_event_sink;
pub mod watch_entry;
pub mod watch_registration;
pub mod watch_loop;
pub mod watch_target;
