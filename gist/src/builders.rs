// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::GistClient,
  config::{GistClientConfig, GITHUB_ACCEPT, USER_AGENT},
  types::SnippetUpdate,
};
use base::Error;
use reqwest::header::{self, HeaderMap, HeaderValue};

#[derive(Default)]
pub struct SnippetUpdateBuilder {
  pub(crate) filename: Option<String>,
  pub(crate) new_filename: Option<String>,
  pub(crate) content: Option<String>,
}

impl SnippetUpdateBuilder {
  pub fn file(mut self, name: impl Into<String>) -> Self {
    self.filename = Some(name.into());
    self
  }

  pub fn rename(mut self, name: impl Into<String>) -> Self {
    self.new_filename = Some(name.into());
    self
  }

  pub fn content(mut self, content: impl Into<String>) -> Self {
    self.content = Some(content.into());
    self
  }

  pub fn build(self) -> Result<SnippetUpdate, Error> {
    let filename = self
      .filename
      .ok_or_else(|| Error::ConfigError("File name is required".into()))?;

    let content = self
      .content
      .ok_or_else(|| Error::ConfigError("File content is required".into()))?;

    Ok(SnippetUpdate {
      filename,
      new_filename: self.new_filename,
      content,
    })
  }
}

#[derive(Default)]
pub struct GistClientBuilder {
  pub(crate) config: GistClientConfig,
}

impl GistClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn base_url(mut self, url: impl Into<String>) -> Self {
    self.config.base_url = url.into();
    self
  }

  pub fn build(self) -> Result<GistClient, Error> {
    if self.config.token.trim().is_empty() {
      return Err(Error::ConfigError("GitHub token cannot be empty".into()));
    }

    url::Url::parse(&self.config.base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid GitHub API URL: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
      header::AUTHORIZATION,
      HeaderValue::from_str(&format!("token {}", self.config.token))
        .map_err(|e| Error::ConfigError(format!("Invalid GitHub token: {}", e)))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .default_headers(headers)
      .build()
      .map_err(Error::HttpError)?;

    Ok(GistClient {
      config: self.config,
      client,
    })
  }
}
