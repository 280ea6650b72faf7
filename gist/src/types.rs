// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A gist as seen by the updater: its id and the names of its files,
/// in the order the API listed them.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
  pub id: String,
  pub filenames: Vec<String>,
  pub updated_at: Option<DateTime<Utc>>,
}

impl Snippet {
  pub fn first_filename(&self) -> Option<&str> {
    self.filenames.first().map(String::as_str)
  }
}

/// Overwrites one file of a gist, optionally renaming it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetUpdate {
  pub(crate) filename: String,
  pub(crate) new_filename: Option<String>,
  pub(crate) content: String,
}

impl SnippetUpdate {
  pub fn builder() -> crate::SnippetUpdateBuilder {
    crate::SnippetUpdateBuilder::default()
  }

  pub fn filename(&self) -> &str {
    &self.filename
  }

  pub fn new_filename(&self) -> Option<&str> {
    self.new_filename.as_deref()
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  pub(crate) fn to_request(&self) -> UpdateGistRequest<'_> {
    let mut files = BTreeMap::new();
    files.insert(
      self.filename.as_str(),
      FileChange {
        filename: self.new_filename.as_deref(),
        content: &self.content,
      },
    );
    UpdateGistRequest { files }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GistResponse {
  pub id: String,
  // Requires serde_json's `preserve_order` so keys stay in document order.
  #[serde(default)]
  pub files: serde_json::Map<String, serde_json::Value>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl GistResponse {
  pub(crate) fn into_snippet(self) -> Snippet {
    Snippet {
      id: self.id,
      filenames: self.files.keys().cloned().collect(),
      updated_at: self.updated_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateGistRequest<'a> {
  pub files: BTreeMap<&'a str, FileChange<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FileChange<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub filename: Option<&'a str>,
  pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubErrorBody {
  #[serde(default)]
  pub message: String,
}
