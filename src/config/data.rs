//! The configuration structs used to build the AppConfig, and their impls.
use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use toml::Value;

// ###################################
// ->   RESULT & ERROR
// ###################################

pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialization error: {0}")]
    TomlDeser(#[from] toml::de::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to parse environment name")]
    StringToEnvironmentFail,
}

// ###################################
// ->   STRUCTS
// ###################################

#[derive(AsRefStr)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub email_config: EmailConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// Everything needed to talk to the Resend API.
/// `api_key` and `audience_id` are deployment secrets: they normally arrive
/// through the `RESEND_API_KEY` / `RESEND_AUDIENCE_ID` environment variables
/// and stay `None` when unset. The app still starts without them, the
/// signup route then reports a server-configuration error.
#[derive(Deserialize, Clone, Debug)]
pub struct EmailConfig {
    pub url: String,
    pub sender_addr: String,
    pub timeout_millis: u64,
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub audience_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppConfigBuilder(HashMap<String, HashMap<String, Value>>);

// ###################################
// ->   IMPLs
// ###################################
impl EmailConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl AppConfig {
    pub fn init() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl AppConfigBuilder {
    /// Extends this `AppConfigBuilder` with the contents of `other` builder.
    fn extend_builder(&mut self, other: Self) {
        for (entry, entry_hm) in other.0 {
            if let Entry::Vacant(e) = self.0.entry(entry.clone()) {
                e.insert(entry_hm);
            } else {
                let target_hm = self.0.get_mut(&entry).expect("Checked above!");
                for (inner_entry, inner_value) in entry_hm {
                    target_hm.insert(inner_entry, inner_value);
                }
            }
        }
    }

    /// Panics if file reading or deserialization goes wrong.
    pub fn add_source_file(mut self, mut file: std::fs::File) -> Self {
        let mut file_content = String::new();

        if let Err(e) = file.read_to_string(&mut file_content) {
            panic!("Fatal Error: Building config: {e}");
        }

        let app_conf_builder: AppConfigBuilder = toml::from_str(&file_content)
            .unwrap_or_else(|e| panic!("Fatal Error: Building config: {e}"));

        self.extend_builder(app_conf_builder);

        self
    }

    pub fn build(self) -> ConfigResult<AppConfig> {
        let serialized = toml::to_string(&self)?;
        let app_config = toml::from_str(&serialized)?;
        Ok(app_config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
