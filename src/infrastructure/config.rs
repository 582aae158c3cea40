use crate::domain::error::VarNameError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com/chat/completions";
pub const QWEN_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default, alias = "baseUrl", alias = "baseURL")]
    pub base_url: String,
    #[serde(default, alias = "apiKey")]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: String::new(),
            api_key: String::new(),
            model: String::new(),
            locale: default_locale(),
            timeout_secs: default_timeout_secs(),
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_provider() -> String {
    "openai".to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Known chat-completion providers. Anything unrecognized is treated as OpenAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    DeepSeek,
    Qwen,
    /// No default endpoint; `base_url` is mandatory.
    Custom,
}

impl Provider {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "deepseek" => Provider::DeepSeek,
            "qwen" | "dashscope" => Provider::Qwen,
            "custom" => Provider::Custom,
            _ => Provider::OpenAi,
        }
    }

    pub fn default_endpoint(self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some(OPENAI_ENDPOINT),
            Provider::DeepSeek => Some(DEEPSEEK_ENDPOINT),
            Provider::Qwen => Some(QWEN_ENDPOINT),
            Provider::Custom => None,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::OpenAi | Provider::Custom => "gpt-4o-mini",
            Provider::DeepSeek => "deepseek-chat",
            Provider::Qwen => "qwen-turbo",
        }
    }
}

impl Config {
    pub fn provider(&self) -> Provider {
        Provider::from_name(&self.provider)
    }

    /// Explicit `base_url` first, then the provider's default.
    pub fn endpoint(&self) -> Result<String, VarNameError> {
        let base_url = self.base_url.trim();
        if !base_url.is_empty() {
            return Ok(base_url.to_string());
        }
        self.provider()
            .default_endpoint()
            .map(str::to_string)
            .ok_or_else(|| {
                VarNameError::Config("Please configure Base URL in settings first".to_string())
            })
    }

    pub fn api_key(&self) -> Result<&str, VarNameError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(VarNameError::Config(
                "Please configure API Key in settings first".to_string(),
            ));
        }
        Ok(key)
    }

    pub fn model(&self) -> &str {
        if self.model.is_empty() {
            self.provider().default_model()
        } else {
            &self.model
        }
    }

    /// Overlay `VAR_NAME_*` variables from `lookup` onto the file values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 4] = [
            ("VAR_NAME_PROVIDER", &mut self.provider),
            ("VAR_NAME_BASE_URL", &mut self.base_url),
            ("VAR_NAME_API_KEY", &mut self.api_key),
            ("VAR_NAME_MODEL", &mut self.model),
        ];
        for (name, field) in fields {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                *field = value;
            }
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("var-name").join("config.toml"))
}

pub fn load_config() -> Result<Config, VarNameError> {
    let mut config = match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path)?,
        _ => Config::default(),
    };
    config.apply_env(|name| std::env::var(name).ok());
    Ok(config)
}

/// Read a config file, falling back to defaults when it doesn't parse.
pub fn load_config_from(path: &Path) -> Result<Config, VarNameError> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), VarNameError> {
    let path = get_config_path().ok_or_else(|| {
        VarNameError::Config("Cannot determine config directory".to_string())
    })?;
    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}

/// Write a default config to `path`. Returns `false` if a file is already there.
pub fn write_config_sample(path: &Path) -> Result<bool, VarNameError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)?;
    fs::write(path, toml_content)
        .map_err(|e| VarNameError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(true)
}
