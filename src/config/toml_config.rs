use crate::adapters::{ChannelDispatcher, HttpFormDispatcher, HttpLocationProvider, MailtoDispatcher};
use crate::core::catalog::Catalog;
use crate::core::Package;
use crate::utils::error::{BoothError, Result};
use crate::utils::validation::{
    validate_mailto_recipient, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_RECIPIENT: &str = "contact@votrephotobooth.fr";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothConfig {
    pub contact: ContactConfig,
    pub dispatch: DispatchConfig,
    pub location: Option<LocationConfig>,
    pub packages: Option<Vec<Package>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DispatchChannel {
    #[default]
    Mailto,
    HttpForm,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub channel: DispatchChannel,
    pub endpoint: Option<String>,
    pub opener: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(5))
    }
}

fn env_var_regex() -> &'static Regex {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"))
}

impl BoothConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoothError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BoothError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_mailto_recipient("contact.recipient", &self.contact.recipient)?;

        match (self.dispatch.channel, &self.dispatch.endpoint) {
            (DispatchChannel::HttpForm, None) => {
                return Err(BoothError::ConfigError {
                    message: "dispatch.endpoint is required for the http_form channel"
                        .to_string(),
                })
            }
            (_, Some(endpoint)) => validate_url("dispatch.endpoint", endpoint)?,
            (DispatchChannel::Mailto, None) => {}
        }

        if let Some(location) = &self.location {
            validate_url("location.endpoint", &location.endpoint)?;
            if let Some(timeout) = location.timeout_seconds {
                validate_positive_number("location.timeout_seconds", timeout, 1)?;
            }
        }

        self.catalog()?;
        Ok(())
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.packages {
            Some(packages) => Catalog::new(packages.clone()),
            None => Ok(Catalog::default()),
        }
    }

    pub fn dispatcher(&self) -> Result<ChannelDispatcher> {
        match self.dispatch.channel {
            DispatchChannel::Mailto => Ok(ChannelDispatcher::Mailto(MailtoDispatcher::new(
                self.dispatch.opener.clone(),
            ))),
            DispatchChannel::HttpForm => {
                let endpoint =
                    self.dispatch
                        .endpoint
                        .clone()
                        .ok_or_else(|| BoothError::ConfigError {
                            message: "dispatch.endpoint is required for the http_form channel"
                                .to_string(),
                        })?;
                Ok(ChannelDispatcher::HttpForm(HttpFormDispatcher::new(endpoint)))
            }
        }
    }

    pub fn location_provider(&self) -> Result<Option<HttpLocationProvider>> {
        self.location
            .as_ref()
            .map(|location| HttpLocationProvider::new(&location.endpoint, location.timeout()))
            .transpose()
    }
}

impl Validate for BoothConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
