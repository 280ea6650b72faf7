// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{glyph::GlyphTable, wakatime::Language};
use std::{fmt, iter};
use tracing::{debug, instrument};

pub const NAME_WIDTH: usize = 10;
pub const TIME_WIDTH: usize = 14;
pub const GRAPH_WIDTH: usize = 21;
pub const MAX_LINES: usize = 5;

/// Bar glyphs in eighths of a cell, empty to full.
pub const BLOCKS: [char; 9] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const ELLIPSIS: &str = "...";

/// Cuts `name` down to `max_len` chars, marking the cut with "...".
///
/// With `max_len <= 3` an over-long name becomes just the ellipsis.
pub fn truncate(name: &str, max_len: usize) -> String {
  if name.chars().count() <= max_len {
    return name.to_string();
  }

  let mut out: String = name.chars().take(max_len.saturating_sub(ELLIPSIS.len())).collect();
  out.push_str(ELLIPSIS);
  out
}

/// Draws `percent` as exactly `width` cells with 1/8 cell resolution.
/// Anything at or above 100% is a full bar.
pub fn render_bar(percent: f64, width: usize) -> String {
  let full_block = BLOCKS[BLOCKS.len() - 1];
  // `as` saturates: negative and NaN become 0.
  let eighths = (width as f64 * 8.0 * percent / 100.0).floor() as usize;
  let full_blocks = eighths / 8;

  if full_blocks >= width {
    return iter::repeat(full_block).take(width).collect();
  }

  let mut bar = String::with_capacity(width * full_block.len_utf8());
  bar.extend(iter::repeat(full_block).take(full_blocks));
  bar.push(BLOCKS[eighths % 8]);
  bar.extend(iter::repeat(BLOCKS[0]).take(width - full_blocks - 1));
  bar
}

/// One-decimal rendering with `Number.prototype.toFixed(1)` rounding:
/// exact ties round away from zero instead of to even.
pub fn to_fixed_1(value: f64) -> String {
  let magnitude = value.abs();
  let scaled = magnitude * 10.0;
  // The product is exact only when the fused error term is zero.
  let exact = magnitude.mul_add(10.0, -scaled) == 0.0;

  let digits = if exact && scaled.fract() == 0.5 {
    format!("{:.1}", (scaled.floor() + 1.0) / 10.0)
  } else {
    format!("{:.1}", magnitude)
  };

  if value < 0.0 {
    format!("-{}", digits)
  } else {
    digits
  }
}

/// The rendered chart, one line per language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
  lines: Vec<String>,
}

impl Report {
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.lines.join("\n"))
  }
}

#[derive(Debug, Clone)]
pub struct ReportFormatter {
  glyphs: GlyphTable,
  max_lines: usize,
  name_width: usize,
  time_width: usize,
  graph_width: usize,
}

impl Default for ReportFormatter {
  fn default() -> Self {
    Self::new(GlyphTable::default())
  }
}

impl ReportFormatter {
  pub fn new(glyphs: GlyphTable) -> Self {
    Self {
      glyphs,
      max_lines: MAX_LINES,
      name_width: NAME_WIDTH,
      time_width: TIME_WIDTH,
      graph_width: GRAPH_WIDTH,
    }
  }

  /// Caps the number of rendered languages; 0 renders all of them.
  pub fn with_max_lines(mut self, max_lines: usize) -> Self {
    self.max_lines = max_lines;
    self
  }

  pub fn format_line(&self, lang: &Language) -> String {
    let line = format!(
      "{} {:<name_width$} {:<time_width$} {} {:>5}%",
      self.glyphs.lookup(&lang.name),
      truncate(&lang.name, self.name_width),
      lang.text,
      render_bar(lang.percent, self.graph_width),
      to_fixed_1(lang.percent),
      name_width = self.name_width,
      time_width = self.time_width,
    );
    debug!("Generated line: \"{}\"", line);
    line
  }

  /// Formats the leading entries of `languages` in the order given.
  #[instrument(skip(self, languages), fields(available = languages.len()))]
  pub fn format_report(&self, languages: &[Language]) -> Report {
    let limit = match self.max_lines {
      0 => languages.len(),
      n => n,
    };

    let lines = languages
      .iter()
      .take(limit)
      .map(|lang| self.format_line(lang))
      .collect();

    Report { lines }
  }
}
