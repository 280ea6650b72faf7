// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::{env, fs};
use tracing::{debug, instrument};

pub const DEFAULT_GIST_TITLE: &str = "📊 Weekly development breakdown";
pub const DEFAULT_LANG_COUNT: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub wakatime: WakaTimeConfig,
  pub gist: GistConfig,
  /// Extra or replacement glyphs, keyed by language name.
  pub glyphs: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WakaTimeConfig {
  pub time_range: WakaTimeRange,
  pub lang_count: usize,
}

impl Default for WakaTimeConfig {
  fn default() -> Self {
    Self {
      time_range: WakaTimeRange::default(),
      lang_count: DEFAULT_LANG_COUNT,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GistConfig {
  /// New name given to the overwritten gist file.
  pub title: String,
}

impl Default for GistConfig {
  fn default() -> Self {
    Self {
      title: DEFAULT_GIST_TITLE.to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakaTimeRange {
  Last7Days,
  #[default]
  Last30Days,
  Last6Months,
  LastYear,
  AllTime,
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads `path` if it exists, otherwise falls back to the defaults.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No configuration file at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path).with_context(|| format!("Invalid configuration in {}", path.display()))
  }
}

impl std::fmt::Display for WakaTimeRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let range = match self {
      WakaTimeRange::Last7Days => "last_7_days",
      WakaTimeRange::Last30Days => "last_30_days",
      WakaTimeRange::Last6Months => "last_6_months",
      WakaTimeRange::LastYear => "last_year",
      WakaTimeRange::AllTime => "all_time",
    };
    write!(f, "{}", range)
  }
}

/// Secrets and the target gist, read once at startup.
#[derive(Clone)]
pub struct Credentials {
  pub gist_id: String,
  pub github_token: String,
  pub wakatime_api_key: String,
}

impl Credentials {
  pub fn from_env() -> anyhow::Result<Self> {
    Ok(Self {
      gist_id: env::var("GIST_ID").context("Missing GIST_ID")?,
      github_token: env::var("GH_TOKEN").context("Missing GH_TOKEN")?,
      wakatime_api_key: env::var("WAKATIME_API_KEY").context("Missing WAKATIME_API_KEY")?,
    })
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("gist_id", &self.gist_id)
      .field("github_token", &"***")
      .field("wakatime_api_key", &"***")
      .finish()
  }
}
