use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::options::Options;
use std::fs::File;
use std::io::Write;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: Some(60),
            tls: Options {
                ca_path: String::new(),
                client_ca_path: String::new(),
                cert_path: String::from("cert.pem"),
                key_path: String::from("key.pem"),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads `path`, or writes a default configuration there when `create`
    /// is set and the file is missing or unreadable. Writing a new file still
    /// returns an error so the operator gets a chance to edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(ConfigurationError::Created(path.to_string()))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::Invalid(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.log_console_interval == Some(0) {
            return Err(ConfigurationError::Invalid(String::from(
                "log_console_interval must be greater than zero",
            )));
        }
        self.tls
            .validate()
            .map_err(|e| ConfigurationError::Invalid(e.to_string()))
    }
}
