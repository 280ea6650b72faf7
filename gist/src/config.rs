// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub(crate) const GITHUB_API_BASE: &str = "https://api.github.com";
pub(crate) const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub(crate) const USER_AGENT: &str = concat!("wakagist/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct GistClientConfig {
  pub(crate) token: String,
  pub(crate) base_url: String,
  pub(crate) timeout: Duration,
}

impl Default for GistClientConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      base_url: GITHUB_API_BASE.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}
