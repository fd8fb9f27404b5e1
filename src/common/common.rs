use crate::config::structs::configuration::Configuration;
use crate::ssl::ssl::generate_self_signed;
use crate::structs::Cli;
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info};
use std::fs;

pub fn log_level_filter(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = match log_level_filter(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            eprintln!("Unknown log level encountered: '{}', using 'info'", config.log_level.as_str());
            log::LevelFilter::Info
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("notify", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

/// Writes a development key and certificate for `localhost` and the
/// optional extra domain given on the command line.
pub fn cert_gen(args: &Cli) -> std::io::Result<()>
{
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let (cert_pem, key_pem) = generate_self_signed(&args.selfsigned_domain)
        .map_err(std::io::Error::other)?;

    if let Err(e) = fs::write(args.selfsigned_keyfile.as_str(), key_pem) {
        error!("[CERTGEN] The key file {} could not be generated!", args.selfsigned_keyfile);
        return Err(e);
    }
    info!("[CERTGEN] The key file {} has been generated", args.selfsigned_keyfile);

    if let Err(e) = fs::write(args.selfsigned_certfile.as_str(), cert_pem) {
        error!("[CERTGEN] The cert file {} could not be generated!", args.selfsigned_certfile);
        return Err(e);
    }
    info!("[CERTGEN] The cert file {} has been generated", args.selfsigned_certfile);

    info!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", args.selfsigned_keyfile, args.selfsigned_certfile);
    Ok(())
}
