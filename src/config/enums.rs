/// Errors raised while reading, writing or validating the configuration file.
pub mod configuration_error;
