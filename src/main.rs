use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use certwatch::common::common::{cert_gen, setup_logging};
use certwatch::config::structs::configuration::Configuration;
use certwatch::ssl::structs::cert_watcher::CertWatcher;
use certwatch::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        if let Err(e) = cert_gen(&args) {
            error!("[CERTGEN] {}", e);
            exit(1);
        }
        exit(0);
    }

    let watcher = match CertWatcher::new(config.tls.clone()) {
        Ok(watcher) => Arc::new(watcher),
        Err(e) => {
            error!("[BOOT] Unable to start the certificate watcher: {}", e);
            exit(1);
        }
    };
    if let Err(e) = watcher.start() {
        error!("[BOOT] Unable to start the certificate watcher loop: {}", e);
        exit(1);
    }
    info!("[BOOT] Certificate watcher started");
    for entry in watcher.registration().entries() {
        info!(
            "[BOOT] Watching {} ({}) through {}{}",
            entry.configured_path,
            entry.target,
            entry.watch_path.display(),
            if entry.indirect { " (symlink)" } else { "" }
        );
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handlers");
                    watcher.close();
                    return Err(std::io::Error::other("shutdown handler registration failed"));
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            if let Some(console_interval) = config.log_console_interval {
                let stats_handler = tokio_shutdown.clone();
                let stats_watcher = watcher.clone();
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let state = stats_watcher.store().snapshot();
                                let certificate = match &state.certificate {
                                    Some(bundle) => format!(
                                        "chain {} loaded {}",
                                        bundle.certs.len(),
                                        bundle.loaded_at.format("%Y-%m-%d %H:%M:%S")
                                    ),
                                    None => String::from("none"),
                                };
                                info!(
                                    "[STATS] Certificate: {} | Server CAs: {} | Client CAs: {} | Running: {}",
                                    certificate,
                                    state.server_cas.as_ref().map(|pool| pool.len()).unwrap_or(0),
                                    state.client_cas.as_ref().map(|pool| pool.len()).unwrap_or(0),
                                    stats_watcher.is_running()
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio_shutdown.handle().await;

            info!("[BOOT] Shutting down certificate watcher...");
            watcher.close();
            info!("[BOOT] Certificate watcher stopped");
            Ok(())
        })
}
