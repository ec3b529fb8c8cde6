use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cadastro_api::client::ApiConfig;
use cadastro_core::dates::DateStyle;

/// Schema version written by this build. A new version needs a step in
/// [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadastroConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Locale tag used to pick the short date layout, e.g. `pt_BR`.
    /// Falls back to the environment when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CadastroConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: None,
        }
    }
}

impl CadastroConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api_base_url)
            .with_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }

    /// Short date layout from the configured locale, else `LC_ALL`/`LANG`.
    pub fn date_style(&self) -> DateStyle {
        self.date_style_with(env_var)
    }

    /// [`CadastroConfig::date_style`] reading the locale variables through
    /// `lookup`.
    pub fn date_style_with(&self, lookup: impl Fn(&str) -> Option<String>) -> DateStyle {
        let tag = self
            .locale
            .clone()
            .or_else(|| non_blank(lookup("LC_ALL")))
            .or_else(|| non_blank(lookup("LANG")));
        tag.map(|t| DateStyle::from_locale(&t)).unwrap_or_default()
    }

    /// Apply `CADASTRO_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env_var)
    }

    /// Apply `CADASTRO_*` overrides read through `lookup`. Blank values are
    /// skipped; an unparsable timeout keeps the current one.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = non_blank(lookup("CADASTRO_API_URL")) {
            self.api_base_url = url;
        }
        if let Some(secs) = non_blank(lookup("CADASTRO_TIMEOUT_SECS")) {
            match secs.parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %secs, "ignoring invalid CADASTRO_TIMEOUT_SECS"),
            }
        }
        if let Some(locale) = non_blank(lookup("CADASTRO_LOCALE")) {
            self.locale = Some(locale);
        }
        self
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("cadastro"))
}

fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Load the config from the default location, or defaults when there is no
/// file yet. Environment overrides are applied last.
pub fn resolve_config() -> eyre::Result<CadastroConfig> {
    let dir = config_dir()?;
    let config = if config_file(&dir).exists() {
        load_config_from(&dir)?
    } else {
        tracing::debug!(dir = %dir.display(), "no config file; using defaults");
        CadastroConfig::default()
    };
    Ok(config.with_env_overrides())
}

pub fn load_config_from(dir: &Path) -> eyre::Result<CadastroConfig> {
    let path = config_file(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, migrating older shapes first.
pub fn parse_config(contents: &str) -> eyre::Result<CadastroConfig> {
    // Migrations operate on the untyped value; the typed shape is only valid
    // at the current version.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CadastroConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Upgrade `json` one version step at a time until it is at
/// [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update cadastro."
        ));
    }

    // v0 → v1: `base_url` renamed to `api_base_url`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(url) = obj.remove("base_url") {
            obj.entry("api_base_url").or_insert(url);
        }
        obj.entry("api_base_url")
            .or_insert(serde_json::Value::String(DEFAULT_API_BASE_URL.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (base_url → api_base_url)");
    }

    Ok(json)
}

pub fn save_config_to(dir: &Path, config: &CadastroConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Files on disk are always stamped with this build's version.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = config_file(dir);
    let json = serde_json::to_string_pretty(&stamped)?;

    // A reader sees either the old file or the complete new one.
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn save_config(config: &CadastroConfig) -> eyre::Result<()> {
    save_config_to(&config_dir()?, config)
}
