use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::fs;

/// On-disk settings file shape. Every field is optional so a partial file can
/// be completed from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    backend: Option<BackendSection>,
    import: Option<ImportSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BackendSection {
    base_url: Option<String>,
    api_key: Option<String>,
    bearer_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ImportSection {
    default_password: Option<String>,
}

/// Resolved connection and credential parameters. Sourced from a TOML file
/// and/or `OUTLET_*` environment variables (environment wins field by field);
/// nothing here is ever a compiled-in literal.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub api_key: String,
    /// Token for the Authorization header. Defaults to the API key when not
    /// set separately, matching deployments that use a single service key.
    pub bearer_token: String,
    /// Initial password assigned to every created outlet user.
    pub default_password: String,
}

pub const ENV_BASE_URL: &str = "OUTLET_API_URL";
pub const ENV_API_KEY: &str = "OUTLET_API_KEY";
pub const ENV_BEARER_TOKEN: &str = "OUTLET_BEARER_TOKEN";
pub const ENV_DEFAULT_PASSWORD: &str = "OUTLET_DEFAULT_PASSWORD";

impl BackendSettings {
    /// Load settings from the optional TOML file, then apply environment
    /// overrides from the real process environment.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                tracing::debug!("Reading settings file: {}", path);
                toml::from_str::<SettingsFile>(&fs::read_to_string(path)?)?
            }
            None => SettingsFile::default(),
        };
        Self::from_sources(file, |var| std::env::var(var).ok())
    }

    fn from_sources(file: SettingsFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = file.backend.unwrap_or_default();
        let import = file.import.unwrap_or_default();

        let base_url = resolve(env(ENV_BASE_URL), backend.base_url)
            .ok_or_else(|| missing("backend.base_url", ENV_BASE_URL))?;
        let api_key = resolve(env(ENV_API_KEY), backend.api_key)
            .ok_or_else(|| missing("backend.api_key", ENV_API_KEY))?;
        let bearer_token = resolve(env(ENV_BEARER_TOKEN), backend.bearer_token)
            .unwrap_or_else(|| api_key.clone());
        let default_password = resolve(env(ENV_DEFAULT_PASSWORD), import.default_password)
            .ok_or_else(|| missing("import.default_password", ENV_DEFAULT_PASSWORD))?;

        Ok(Self {
            base_url,
            api_key,
            bearer_token,
            default_password,
        })
    }
}

fn resolve(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or(file_value)
        .filter(|v| !v.trim().is_empty())
}

fn missing(field: &str, env_var: &str) -> ImportError {
    ImportError::MissingConfigError {
        field: format!("{} (or env {})", field, env_var),
    }
}

impl Validate for BackendSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_non_empty_string("bearer_token", &self.bearer_token)?;
        validation::validate_non_empty_string("default_password", &self.default_password)?;
        Ok(())
    }
}

impl ConfigProvider for BackendSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    fn default_password(&self) -> &str {
        &self.default_password
    }
}
