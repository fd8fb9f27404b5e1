use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Configuration file {0} was created, edit it and start again")]
    Created(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
