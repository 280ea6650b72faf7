// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  glyph::GlyphTable,
  template::{Report, ReportFormatter},
  wakatime::{WakaTimeApi, WakaTimeClient},
};
use base::{Config, Credentials, Error};
use chrono::{DateTime, Utc};
use gist::{GistClient, SnippetStore, SnippetUpdate};
use tracing::{debug, info, instrument, warn};

pub struct WakaTimeService {
  config: Config,
  gist_id: String,
  client: Box<dyn WakaTimeApi>,
  store: Box<dyn SnippetStore>,
  formatter: ReportFormatter,
}

#[derive(Debug, Clone)]
pub struct UpdateResult {
  pub was_updated: bool,
  /// Name the gist file had before it was overwritten.
  pub filename: Option<String>,
  pub report: Report,
  pub last_update: Option<DateTime<Utc>>,
  /// Total coding time over the range as WakaTime words it, e.g. "40 hrs 2 mins".
  pub total_time: Option<String>,
  pub range_label: Option<String>,
}

impl WakaTimeService {
  pub fn new(config: Config, credentials: &Credentials) -> Result<Self, Error> {
    let client = Box::new(WakaTimeClient::new(&credentials.wakatime_api_key)?);
    let store = Box::new(
      GistClient::builder()
        .token(credentials.github_token.clone())
        .build()?,
    );

    Ok(Self::with_clients(
      config,
      credentials.gist_id.clone(),
      client,
      store,
    ))
  }

  pub fn with_clients(
    config: Config,
    gist_id: String,
    client: Box<dyn WakaTimeApi>,
    store: Box<dyn SnippetStore>,
  ) -> Self {
    let formatter = ReportFormatter::new(GlyphTable::with_overrides(config.glyphs.clone()))
      .with_max_lines(config.wakatime.lang_count);

    Self {
      config,
      gist_id,
      client,
      store,
      formatter,
    }
  }

  #[instrument(skip(self), fields(gist_id = %self.gist_id))]
  pub async fn run(&self) -> Result<UpdateResult, Error> {
    info!("Starting WakaTime stats update");

    let stats = self
      .client
      .fetch_stats(&self.config.wakatime.time_range)
      .await
      .map_err(Error::stats_fetch)?;

    let languages = stats.languages.as_deref().ok_or_else(|| {
      Error::stats_fetch(Error::ParseError("No language data found in stats".into()))
    })?;

    if let Some(total) = &stats.human_readable_total {
      info!(
        "Coding time: {} ({})",
        total,
        stats.human_readable_range.as_deref().unwrap_or("unknown range")
      );
    }
    debug!("Languages found: {}", languages.len());
    for (idx, lang) in languages.iter().enumerate() {
      debug!("{}. {} - {}% - {}", idx + 1, lang.name, lang.percent, lang.text);
    }

    let report = self.formatter.format_report(languages);
    if report.is_empty() {
      warn!("No lines generated, leaving the gist untouched");
      return Ok(UpdateResult {
        was_updated: false,
        filename: None,
        report,
        last_update: None,
        total_time: stats.human_readable_total.clone(),
        range_label: stats.human_readable_range.clone(),
      });
    }
    debug!("Final gist content:\n{}", report);

    let snippet = self
      .store
      .fetch(&self.gist_id)
      .await
      .map_err(Error::snippet_read)?;

    let filename = snippet
      .first_filename()
      .ok_or_else(|| {
        Error::snippet_read(Error::NotFound(format!("gist {} has no files", self.gist_id)))
      })?
      .to_string();

    let update = SnippetUpdate::builder()
      .file(&filename)
      .rename(&self.config.gist.title)
      .content(report.to_string())
      .build()?;

    self
      .store
      .update(&self.gist_id, &update)
      .await
      .map_err(Error::snippet_write)?;

    info!("✅ Updated gist file {:?} with {} line(s)", filename, report.len());
    Ok(UpdateResult {
      was_updated: true,
      filename: Some(filename),
      report,
      last_update: snippet.updated_at,
      total_time: stats.human_readable_total.clone(),
      range_label: stats.human_readable_range.clone(),
    })
  }
}
