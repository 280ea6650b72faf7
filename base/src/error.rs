// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Unable to fetch WakaTime stats: {0}")]
  StatsFetch(#[source] Box<Error>),
  #[error("Unable to get gist: {0}")]
  SnippetRead(#[source] Box<Error>),
  #[error("Unable to update gist: {0}")]
  SnippetWrite(#[source] Box<Error>),
  #[error("API error: {0}")]
  ApiError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Unauthorized: {0}")]
  Unauthorized(String),
  #[error("Not found: {0}")]
  NotFound(String),
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Timeout error")]
  TimeoutError,
}

impl Error {
  pub fn stats_fetch(cause: Error) -> Self {
    Self::StatsFetch(Box::new(cause))
  }

  pub fn snippet_read(cause: Error) -> Self {
    Self::SnippetRead(Box::new(cause))
  }

  pub fn snippet_write(cause: Error) -> Self {
    Self::SnippetWrite(Box::new(cause))
  }
}
