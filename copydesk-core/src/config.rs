use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing;

#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub logbook: LogbookConfig,
}

impl CoreConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("config.toml");
        let mut cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<CoreConfig>(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            tracing::info!(
                "No config file found at {}. Using CoreConfig::default().",
                path.display()
            );
            CoreConfig::default()
        };
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    fn resolve_paths(&mut self, root: &Path) {
        self.lexicon.path = absolutize(root, &self.lexicon.path);
        self.logbook.path = absolutize(root, &self.logbook.path);
        self.logbook.aggregate = absolutize(root, &self.logbook.aggregate);
        self.logbook.reviews_log = absolutize(root, &self.logbook.reviews_log);
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            lexicon: LexiconConfig::default(),
            advisor: AdvisorConfig::default(),
            logbook: LogbookConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "SystemConfig::default_name")]
    pub name: String,
    #[serde(default = "SystemConfig::default_version")]
    pub version: String,
}

impl SystemConfig {
    fn default_name() -> String {
        "copydesk".to_string()
    }

    fn default_version() -> String {
        "0.1.0".to_string()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            version: Self::default_version(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "LexiconConfig::default_path")]
    pub path: PathBuf,
}

impl LexiconConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("lexicon/lexicon.toml")
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "AdvisorConfig::default_model")]
    pub model: String,
    #[serde(default = "AdvisorConfig::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "AdvisorConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AdvisorConfig {
    fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }

    fn default_endpoint() -> String {
        "https://api.openai.com/v1/chat/completions".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: Self::default_model(),
            endpoint: Self::default_endpoint(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogbookConfig {
    #[serde(default = "LogbookConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "LogbookConfig::default_path")]
    pub path: PathBuf,
    #[serde(default = "LogbookConfig::default_aggregate")]
    pub aggregate: PathBuf,
    #[serde(default = "LogbookConfig::default_reviews_log")]
    pub reviews_log: PathBuf,
}

impl LogbookConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_path() -> PathBuf {
        PathBuf::from("logbook")
    }

    fn default_aggregate() -> PathBuf {
        PathBuf::from("logbook.jsonl")
    }

    fn default_reviews_log() -> PathBuf {
        PathBuf::from("logbook/reviews.jsonl")
    }
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            path: Self::default_path(),
            aggregate: Self::default_aggregate(),
            reviews_log: Self::default_reviews_log(),
        }
    }
}

fn absolutize(root: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}
