use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a self-signed certificate and key file for development, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,

    /// Extra domain for the self-signed certificate, next to localhost.
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,

    /// Where the self-signed certificate is written.
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,

    /// Where the self-signed key is written.
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
}
