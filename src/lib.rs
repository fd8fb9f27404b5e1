//! # certwatch
//!
//! Keeps a TLS identity and its trust pools in sync with files on disk, so a
//! listener picks up rotated certificates on its next handshake without a
//! restart.
//!
//! ## Overview
//!
//! A certificate watcher is handed up to four paths: a server-trust CA
//! bundle, a client-trust CA bundle, and a leaf certificate with its private
//! key. It loads all of them once, then follows filesystem events for those
//! paths and swaps in every replacement that parses. Replacements that fail to
//! parse, and files that disappear, never blank out material that already
//! works; the last known good version keeps being served.
//!
//! ## Features
//!
//! - **Atomic key pairs**: a certificate and its key are only published
//!   together, after the key has been checked against the certificate
//! - **Secret mounts**: symlink-indirected layouts (`tls.crt -> ..data/tls.crt`)
//!   are followed across any number of `..data` swaps
//! - **rustls integration**: a `ResolvesServerCert` implementation reading the
//!   live store on every handshake
//! - **Structured events**: every reload attempt is reported through an
//!   `EventSink`, by default the `log` facade
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use certwatch::ssl::structs::cert_watcher::CertWatcher;
//! use certwatch::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
//! use certwatch::ssl::ssl::create_server_config_with_resolver;
//!
//! let watcher = CertWatcher::new(config.tls.clone())?;
//! watcher.start()?;
//! let resolver = Arc::new(DynamicCertificateResolver::new(watcher.store()));
//! let server_config = create_server_config_with_resolver(resolver, None)?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and the self-signed certificate bootstrap
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - The certificate watcher, its reload engine and rustls glue
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup and self-signed certificate generation for the
/// binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading and validating the TOML configuration file.
pub mod config;

/// TLS material watching.
///
/// Resolves watch targets, parses certificate material, follows filesystem
/// events and publishes the results to a shared store.
pub mod ssl;

/// Command-line interface definitions.
pub mod structs;
