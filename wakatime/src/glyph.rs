// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::collections::HashMap;

/// Shown for any language missing from the table.
pub const DEFAULT_GLYPH: &str = "🔸";

/// Known languages and technologies. Keys match WakaTime's names exactly.
pub const BUILTIN_GLYPHS: &[(&str, &str)] = &[
  ("JavaScript", "✨"),
  ("TypeScript", "🔷"),
  ("HTML", "🌐"),
  ("CSS", "🎨"),
  ("SCSS", "🎨"),
  ("SASS", "🎨"),
  ("Python", "🐍"),
  ("Java", "☕"),
  ("C++", "⚡"),
  ("C#", "💜"),
  ("C", "⚡"),
  ("Go", "🐹"),
  ("Rust", "🦀"),
  ("Swift", "🍎"),
  ("Kotlin", "🟠"),
  ("Dart", "🎯"),
  ("Ruby", "💎"),
  ("PHP", "🐘"),
  ("Scala", "🔴"),
  ("React", "⚛️"),
  ("Vue", "💚"),
  ("Angular", "🅰️"),
  ("Svelte", "🧡"),
  ("Node.js", "🟢"),
  ("NodeJS", "🟢"),
  ("Django", "🐍"),
  ("Flask", "🐍"),
  ("Laravel", "🟥"),
  ("Flutter", "🎯"),
  ("React Native", "📱"),
  ("Android", "🤖"),
  ("MySQL", "🗃️"),
  ("PostgreSQL", "🐘"),
  ("MongoDB", "🍃"),
  ("Redis", "🔴"),
  ("SQL", "🗃️"),
  ("Docker", "🐳"),
  ("Kubernetes", "☸️"),
  ("Bash", "📟"),
  ("Shell", "🐚"),
  ("PowerShell", "💙"),
  ("JSON", "📋"),
  ("YAML", "📄"),
  ("XML", "📰"),
  ("Markdown", "📝"),
  ("Other", "🔧"),
];

pub fn builtin_glyph(name: &str) -> Option<&'static str> {
  BUILTIN_GLYPHS
    .iter()
    .find(|(key, _)| *key == name)
    .map(|(_, glyph)| *glyph)
}

/// Name-to-glyph lookup. Overrides win over the built-in table, and
/// anything unknown gets [`DEFAULT_GLYPH`].
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
  overrides: HashMap<String, String>,
}

impl GlyphTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
    Self { overrides }
  }

  pub fn lookup(&self, name: &str) -> &str {
    self
      .overrides
      .get(name)
      .map(String::as_str)
      .or_else(|| builtin_glyph(name))
      .unwrap_or(DEFAULT_GLYPH)
  }
}
