// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::GistClientBuilder,
  config::GistClientConfig,
  types::{GistResponse, GithubErrorBody, Snippet, SnippetUpdate},
};
use async_trait::async_trait;
use base::Error;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, instrument};
use url::Url;

/// Somewhere a text snippet can be read from and written back to.
#[async_trait]
pub trait SnippetStore: Send + Sync {
  async fn fetch(&self, id: &str) -> Result<Snippet, Error>;
  async fn update(&self, id: &str, update: &SnippetUpdate) -> Result<(), Error>;
}

#[derive(Clone)]
pub struct GistClient {
  pub(crate) config: GistClientConfig,
  pub(crate) client: Client,
}

impl GistClient {
  pub fn builder() -> GistClientBuilder {
    GistClientBuilder::default()
  }

  pub(crate) fn gist_url(&self, id: &str) -> Result<Url, Error> {
    let mut url = Url::parse(&self.config.base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid GitHub API URL: {}", e)))?;
    url
      .path_segments_mut()
      .map_err(|_| Error::ConfigError("GitHub API URL cannot be a base".into()))?
      .pop_if_empty()
      .push("gists")
      .push(id);
    Ok(url)
  }

  async fn check_status(response: Response, id: &str) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    let rate_limited = response
      .headers()
      .get("x-ratelimit-remaining")
      .is_some_and(|v| v.as_bytes() == b"0");

    let message = response
      .json::<GithubErrorBody>()
      .await
      .map(|body| body.message)
      .unwrap_or_default();

    error!("GitHub request for gist {} failed with status: {}", id, status);
    match status {
      StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimitExceeded),
      StatusCode::FORBIDDEN if rate_limited => Err(Error::RateLimitExceeded),
      StatusCode::NOT_FOUND => Err(Error::NotFound(format!("gist {}", id))),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        Err(Error::Unauthorized(format!("{}: {}", status, message)))
      }
      _ => Err(Error::ApiError(format!("{}: {}", status, message))),
    }
  }
}

#[async_trait]
impl SnippetStore for GistClient {
  #[instrument(skip(self))]
  async fn fetch(&self, id: &str) -> Result<Snippet, Error> {
    let url = self.gist_url(id)?;
    let response = self.client.get(url).send().await?;
    let response = Self::check_status(response, id).await?;

    let gist: GistResponse = response
      .json()
      .await
      .map_err(|e| Error::ParseError(format!("Failed to parse gist: {}", e)))?;

    debug!("Fetched gist with {} file(s)", gist.files.len());
    Ok(gist.into_snippet())
  }

  #[instrument(skip(self, update), fields(file = %update.filename()))]
  async fn update(&self, id: &str, update: &SnippetUpdate) -> Result<(), Error> {
    let url = self.gist_url(id)?;
    let response = self
      .client
      .patch(url)
      .json(&update.to_request())
      .send()
      .await?;
    Self::check_status(response, id).await?;

    debug!("Gist updated successfully");
    Ok(())
  }
}
