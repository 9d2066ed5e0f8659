mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::BabelError;
use crate::flags::FlagTable;
use defaults::*;

/// Environment variable holding the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable holding the translation service key.
pub const OPENAI_TOKEN_VAR: &str = "OPENAI_TOKEN";

/// Top-level Babel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub babel: BabelConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    /// Extra or replacement flag → language entries.
    #[serde(default)]
    pub flags: HashMap<String, String>,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BabelConfig {
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BabelConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Discord bot config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub bot_token: String,
}

/// Chat-completion translation backend config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout. Unset means the transport default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Overlay credentials from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay credentials using `lookup` in place of the process environment.
    /// Non-empty values win over whatever the file contained.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(DISCORD_TOKEN_VAR).filter(|v| !v.trim().is_empty()) {
            self.discord.bot_token = token.trim().to_string();
        }
        if let Some(key) = lookup(OPENAI_TOKEN_VAR).filter(|v| !v.trim().is_empty()) {
            self.translator.api_key = key.trim().to_string();
        }
    }

    /// Reject configs that cannot start the bot.
    pub fn validate(&self) -> Result<(), BabelError> {
        if self.discord.bot_token.is_empty() {
            return Err(BabelError::Config(format!(
                "Discord bot token is empty. Set {DISCORD_TOKEN_VAR} or [discord] bot_token."
            )));
        }
        self.validate_translator()
    }

    /// Reject configs that cannot reach the translation service.
    pub fn validate_translator(&self) -> Result<(), BabelError> {
        if self.translator.api_key.is_empty() {
            return Err(BabelError::Config(format!(
                "translation API key is empty. Set {OPENAI_TOKEN_VAR} or [translator] api_key."
            )));
        }
        if self.translator.model.trim().is_empty() {
            return Err(BabelError::Config("translator model is empty".into()));
        }
        if self.translator.timeout_secs == Some(0) {
            return Err(BabelError::Config(
                "translator timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Freeze the effective flag table.
    pub fn flag_table(&self) -> FlagTable {
        FlagTable::with_overrides(&self.flags)
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. Credentials from the
/// environment are not applied here; see [`Config::apply_env`].
pub fn load(path: &str) -> Result<Config, BabelError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BabelError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, BabelError> {
    toml::from_str(content).map_err(|e| BabelError::Config(format!("failed to parse config: {e}")))
}
