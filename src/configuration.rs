use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::contacts_client::ContactsClient;
use crate::domain::ListId;

/// Global configuration, loaded from `configuration/*.yaml` and `APP_*` env
/// vars. See `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub contacts: ContactsSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Contacts provider configuration. Read-only once loaded.
#[derive(Debug, Deserialize, Clone)]
pub struct ContactsSettings {
    /// e.g. `https://api.brevo.com`, without the `/v3/contacts` path
    pub base_url: String,

    /// Absence is not fatal at startup; every capture request will fail with
    /// 500 instead.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    #[serde(default = "default_waitlist_list_id")]
    pub waitlist_list_id: ListId,

    #[serde(default = "default_feedback_list_id")]
    pub feedback_list_id: ListId,

    /// Unset means the transport's own default applies.
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>,
}

fn default_waitlist_list_id() -> ListId { ListId::WAITLIST_DEFAULT }

fn default_feedback_list_id() -> ListId { ListId::FEEDBACK_DEFAULT }

impl ContactsSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(self) -> ContactsClient {
        let timeout = self.timeout();
        ContactsClient::new(self.base_url, self.api_key, timeout)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`, then
/// apply env var overrides:
///
/// `APP_APPLICATION__PORT=5001` -> `Settings.application.port`
/// `APP_CONTACTS__API_KEY=xkeysib-...` -> `Settings.contacts.api_key`
///
/// Env vars are always strings, hence `serde-aux` for numeric fields.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or("local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
