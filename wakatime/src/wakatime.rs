// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::API_TIMEOUT;
use crate::USER_AGENT;
use async_trait::async_trait;
use base::{Error, WakaTimeRange};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};

const WAKATIME_API_BASE: &str = "https://wakatime.com/api";

#[async_trait]
pub trait WakaTimeApi: Send + Sync {
  async fn fetch_stats(&self, time_range: &WakaTimeRange) -> Result<WakaStats, Error>;
}

#[derive(Clone)]
pub struct WakaTimeClient {
  client: Arc<reqwest::Client>,
  api_key: String,
  base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WakaStats {
  /// `None` when the API left the collection out, e.g. while stats are
  /// still being computed.
  #[serde(default)]
  pub languages: Option<Vec<Language>>,
  pub human_readable_total: Option<String>,
  pub human_readable_range: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Language {
  pub name: String,
  /// Pre-formatted duration, e.g. "12 hrs 30 mins".
  pub text: String,
  #[serde(default)]
  pub percent: f64,
}

impl Language {
  pub fn new(name: impl Into<String>, percent: f64, text: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      text: text.into(),
      percent,
    }
  }
}

impl WakaTimeClient {
  pub fn new(api_key: &str) -> Result<Self, Error> {
    Self::with_base_url(api_key, WAKATIME_API_BASE)
  }

  pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, Error> {
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    let client = reqwest::Client::builder()
      .timeout(API_TIMEOUT)
      .build()
      .map_err(Error::HttpError)?;

    Ok(Self {
      client: Arc::new(client),
      api_key: api_key.to_string(),
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  fn stats_url(&self, time_range: &WakaTimeRange) -> String {
    format!("{}/v1/users/current/stats/{}", self.base_url, time_range)
  }

  fn build_headers(&self) -> Result<reqwest::header::HeaderMap, Error> {
    let mut headers = reqwest::header::HeaderMap::new();
    let encoded_key = STANDARD.encode(&self.api_key);

    headers.insert(
      reqwest::header::AUTHORIZATION,
      reqwest::header::HeaderValue::from_str(&format!("Basic {}", encoded_key))
        .map_err(|e| Error::ApiError(format!("Invalid API key: {}", e)))?,
    );

    headers.insert(
      reqwest::header::USER_AGENT,
      reqwest::header::HeaderValue::from_static(USER_AGENT),
    );

    Ok(headers)
  }
}

fn map_send_error(e: reqwest::Error) -> Error {
  if e.is_timeout() {
    Error::TimeoutError
  } else {
    Error::HttpError(e)
  }
}

pub(crate) fn parse_stats_body(body: serde_json::Value) -> Result<WakaStats, Error> {
  let data = body
    .get("data")
    .cloned()
    .ok_or_else(|| Error::ParseError("Response has no `data` object".into()))?;

  serde_json::from_value(data)
    .map_err(|e| Error::ParseError(format!("Failed to parse WakaStats: {}", e)))
}

#[async_trait]
impl WakaTimeApi for WakaTimeClient {
  #[instrument(skip(self))]
  async fn fetch_stats(&self, time_range: &WakaTimeRange) -> Result<WakaStats, Error> {
    let url = self.stats_url(time_range);
    let headers = self.build_headers()?;

    let response = self
      .client
      .get(&url)
      .headers(headers)
      .send()
      .await
      .map_err(map_send_error)?;

    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
      return Err(Error::RateLimitExceeded);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
      return Err(Error::Unauthorized(status.to_string()));
    }
    if !status.is_success() {
      error!("API request failed with status: {}", status);
      return Err(Error::ApiError(format!("API request failed: {}", status)));
    }

    let data: serde_json::Value = response
      .json()
      .await
      .map_err(|e| Error::ParseError(format!("Failed to deserialize response: {}", e)))?;

    parse_stats_body(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn empty_api_key_is_rejected() {
    assert!(matches!(WakaTimeClient::new(""), Err(Error::InvalidApiKey)));
    assert!(matches!(WakaTimeClient::new("   "), Err(Error::InvalidApiKey)));
  }

  #[test]
  fn stats_url_uses_range_segment() {
    let client = WakaTimeClient::with_base_url("key", "http://localhost:8080/api/").unwrap();
    assert_eq!(
      client.stats_url(&WakaTimeRange::Last30Days),
      "http://localhost:8080/api/v1/users/current/stats/last_30_days"
    );
  }

  #[test]
  fn authorization_is_basic_base64_of_key() {
    let client = WakaTimeClient::new("waka_123").unwrap();
    let headers = client.build_headers().unwrap();
    let header = |name: reqwest::header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
    assert_eq!(header(reqwest::header::AUTHORIZATION), Some("Basic d2FrYV8xMjM="));
    assert_eq!(header(reqwest::header::USER_AGENT), Some(USER_AGENT));
  }

  #[test]
  fn parses_languages_in_api_order() {
    let body = json!({
      "data": {
        "start": "2025-01-01T00:00:00Z",
        "end": "2025-01-31T00:00:00Z",
        "human_readable_range": "last 30 days",
        "human_readable_total": "40 hrs 2 mins",
        "languages": [
          {"name": "Rust", "percent": 61.25, "text": "24 hrs 31 mins", "total_seconds": 88260.0},
          {"name": "Go", "percent": 38.75, "text": "15 hrs 31 mins"}
        ]
      }
    });
    let stats = parse_stats_body(body).unwrap();
    let languages = stats.languages.unwrap();

    assert_eq!(stats.human_readable_range.as_deref(), Some("last 30 days"));
    assert_eq!(stats.human_readable_total.as_deref(), Some("40 hrs 2 mins"));
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0], Language::new("Rust", 61.25, "24 hrs 31 mins"));
    assert_eq!(languages[1].name, "Go");
  }

  #[test]
  fn missing_languages_is_none() {
    let stats = parse_stats_body(json!({"data": {"is_up_to_date": false}})).unwrap();
    assert!(stats.languages.is_none());
  }

  #[test]
  fn missing_data_is_a_parse_error() {
    let err = parse_stats_body(json!({"error": "Unauthorized"})).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
  }

  #[tokio::test]
  async fn slow_server_is_a_timeout() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold the connection without ever answering.
    let server = tokio::spawn(async move {
      let (socket, _) = listener.accept().await.unwrap();
      tokio::time::sleep(std::time::Duration::from_secs(30)).await;
      drop(socket);
    });

    let client = WakaTimeClient {
      client: Arc::new(
        reqwest::Client::builder()
          .timeout(std::time::Duration::from_millis(200))
          .build()
          .unwrap(),
      ),
      api_key: "key".into(),
      base_url: format!("http://{}", addr),
    };

    let err = client.fetch_stats(&WakaTimeRange::Last7Days).await.unwrap_err();
    assert!(matches!(err, Error::TimeoutError), "{err:?}");
    server.abort();
  }

  #[tokio::test]
  async fn unreachable_host_is_an_http_error() {
    let client = WakaTimeClient::with_base_url("key", "http://127.0.0.1:1").unwrap();
    let err = client.fetch_stats(&WakaTimeRange::Last7Days).await.unwrap_err();
    assert!(matches!(err, Error::HttpError(_)), "{err:?}");
  }

  #[test]
  fn percent_defaults_to_zero() {
    let stats = parse_stats_body(json!({
      "data": {"languages": [{"name": "Other", "text": "0 secs"}]}
    }))
    .unwrap();
    assert_eq!(stats.languages.unwrap()[0].percent, 0.0);
  }
}
