// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Result;
use base::{Config, Credentials};
use std::{env, path::PathBuf};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;
use wakatime::WakaTimeService;

const DEFAULT_CONFIG_PATH: &str = "wakagist.toml";

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
}

fn config_path() -> PathBuf {
  env::var_os("WAKAGIST_CONFIG")
    .map(PathBuf::from)
    .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  dotenvy::dotenv().ok();
  setup_logging();

  let credentials = Credentials::from_env()?;
  let config = Config::load_or_default(config_path())?;

  run(config, &credentials).await
}

#[instrument(skip(config, credentials))]
async fn run(config: Config, credentials: &Credentials) -> Result<()> {
  let service = WakaTimeService::new(config, credentials)?;

  match service.run().await {
    Ok(result) if result.was_updated => {
      info!(
        "✅ Success to update the gist 🎉 ({} over {}, previous update: {})",
        result.total_time.as_deref().unwrap_or("N/A"),
        result.range_label.as_deref().unwrap_or("N/A"),
        result
          .last_update
          .map_or("N/A".to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
      );
    }
    Ok(_) => info!("No language stats to report, gist left as is"),
    Err(e) => {
      error!("❌ {e}");
      std::process::exit(1);
    }
  }

  Ok(())
}
