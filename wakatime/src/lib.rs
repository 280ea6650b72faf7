// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod glyph;
pub mod service;
pub mod template;
pub mod wakatime;

pub use glyph::{GlyphTable, DEFAULT_GLYPH};
pub use service::{UpdateResult, WakaTimeService};
pub use template::{render_bar, to_fixed_1, truncate, Report, ReportFormatter};
pub use wakatime::{Language, WakaStats, WakaTimeApi, WakaTimeClient};

pub(crate) const API_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
pub(crate) const USER_AGENT: &str = concat!("wakagist/", env!("CARGO_PKG_VERSION"));
