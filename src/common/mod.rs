//! Process-level helpers shared by the binary: logging setup and the
//! self-signed certificate bootstrap.
//!
//! # Example
//!
//! ```rust,ignore
//! use certwatch::common::common::setup_logging;
//! use certwatch::config::structs::configuration::Configuration;
//!
//! setup_logging(&Configuration::init())?;
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
