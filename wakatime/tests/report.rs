// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//
// Layout guarantees of the rendered chart: bar widths, line limits and
// ordering, checked against the public formatter API only.

use wakatime::{
  render_bar, template::BLOCKS, truncate, Language, ReportFormatter, DEFAULT_GLYPH,
};

fn filled_cells(bar: &str) -> usize {
  bar.chars().filter(|c| *c != BLOCKS[0]).count()
}

fn bar_of(line: &str) -> String {
  line.chars().filter(|c| BLOCKS.contains(c)).collect()
}

fn percents() -> impl Iterator<Item = f64> {
  (0..=1000).map(|i| i as f64 / 10.0)
}

#[test]
fn bar_is_always_exactly_width_cells() {
  for width in 1..=40 {
    for percent in percents() {
      let bar = render_bar(percent, width);
      assert_eq!(bar.chars().count(), width, "percent={percent} width={width}");
    }
  }
}

#[test]
fn bar_over_hundred_percent_saturates() {
  for width in 1..=30 {
    assert_eq!(render_bar(100.0, width), "█".repeat(width));
    assert_eq!(render_bar(180.5, width), "█".repeat(width));
    assert_eq!(render_bar(0.0, width), "░".repeat(width));
  }
}

#[test]
fn bar_fill_is_monotonic() {
  for width in [1, 5, 21, 33] {
    let mut prev = 0;
    for percent in percents() {
      let filled = filled_cells(&render_bar(percent, width));
      assert!(filled >= prev, "percent={percent} width={width}");
      prev = filled;
    }
  }
}

#[test]
fn truncate_respects_budget() {
  let names = ["", "C", "Rust", "TypeScript", "React Native", "Jupyter Notebook"];
  for max_len in 4..=20 {
    for name in names {
      let cut = truncate(name, max_len);
      assert!(cut.chars().count() <= max_len, "{name:?} -> {cut:?}");
      if name.chars().count() <= max_len {
        assert_eq!(cut, name);
      }
    }
  }
}

#[test]
fn empty_input_yields_no_lines() {
  let formatter = ReportFormatter::default();
  let report = formatter.format_report(&[]);
  assert!(report.is_empty());
  assert_eq!(report.to_string(), "");

  let none: Option<Vec<Language>> = None;
  let report = formatter.format_report(none.as_deref().unwrap_or_default());
  assert_eq!(report.len(), 0);
}

#[test]
fn report_is_capped_at_five_lines_in_input_order() {
  let names = ["Rust", "Go", "Python", "TypeScript", "Bash", "YAML", "JSON", "Markdown"];
  let languages: Vec<_> = names
    .iter()
    .enumerate()
    .map(|(i, name)| Language::new(*name, 40.0 - i as f64 * 5.0, "1 hr"))
    .collect();

  let report = ReportFormatter::default().format_report(&languages);

  assert_eq!(report.len(), 5);
  for (line, name) in report.lines().iter().zip(names) {
    assert!(line.contains(&format!(" {name} ")), "{line}");
  }
  assert!(!report.to_string().contains("YAML"));
}

#[test]
fn fewer_than_five_renders_all() {
  let languages = vec![
    Language::new("Rust", 80.0, "8 hrs"),
    Language::new("Go", 20.0, "2 hrs"),
  ];
  assert_eq!(ReportFormatter::default().format_report(&languages).len(), 2);
}

#[test]
fn go_example_line() {
  let line = ReportFormatter::default().format_line(&Language::new("Go", 42.567, "12 hrs 30 mins"));
  assert!(line.starts_with("🐹 "), "{line}");
  assert!(line.ends_with(" 42.6%"), "{line}");
  assert!(line.ends_with("  42.6%"), "{line}");
}

#[test]
fn percent_column_rounds_exact_ties_up() {
  let formatter = ReportFormatter::default();
  let cases = [
    (61.25, " 61.3%"),
    (12.25, " 12.3%"),
    (0.25, "  0.3%"),
    (38.75, " 38.8%"),
    (0.05, "  0.1%"),
  ];
  for (percent, tail) in cases {
    let line = formatter.format_line(&Language::new("Rust", percent, "1 hr"));
    assert!(line.ends_with(&format!("{} {}", bar_of(&line), tail)), "{percent}: {line}");
  }
}

#[test]
fn unmapped_language_uses_default_glyph() {
  let line = ReportFormatter::default().format_line(&Language::new("Zig", 3.2, "1 hr 2 mins"));
  assert!(line.starts_with(&format!("{DEFAULT_GLYPH} Zig ")), "{line}");
  assert!(line.starts_with("🔸"), "{line}");
}

#[test]
fn lines_share_column_layout() {
  let languages = vec![
    Language::new("JavaScript", 51.3, "20 hrs 5 mins"),
    Language::new("Jupyter Notebook", 30.0, "11 hrs 44 mins"),
    Language::new("C", 18.7, "7 hrs 18 mins"),
  ];
  let report = ReportFormatter::default().format_report(&languages);

  // Everything after the glyph has the same char width on every line.
  let widths: Vec<usize> = report
    .lines()
    .iter()
    .map(|line| line.split_once(' ').unwrap().1.chars().count())
    .collect();
  assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
  assert_eq!(widths[0], 10 + 1 + 14 + 1 + 21 + 1 + 6);
  assert!(report.lines()[1].contains("Jupyter..."));
}

#[test]
fn sorted_input_keeps_descending_bars() {
  let languages = vec![
    Language::new("Rust", 60.0, "6 hrs"),
    Language::new("Go", 25.0, "2 hrs 30 mins"),
    Language::new("Bash", 15.0, "1 hr 30 mins"),
  ];
  let report = ReportFormatter::default().format_report(&languages);

  let fills: Vec<usize> = report.lines().iter().map(|l| filled_cells(&bar_of(l))).collect();
  assert!(fills.windows(2).all(|w| w[0] >= w[1]), "{fills:?}");
}

#[test]
fn unsorted_input_is_not_reordered() {
  let languages = vec![
    Language::new("Bash", 15.0, "1 hr 30 mins"),
    Language::new("Rust", 60.0, "6 hrs"),
    Language::new("Go", 25.0, "2 hrs 30 mins"),
  ];
  let report = ReportFormatter::default().format_report(&languages);

  assert!(report.lines()[0].starts_with("📟 Bash"));
  assert!(report.lines()[1].starts_with("🦀 Rust"));
  assert!(report.lines()[2].starts_with("🐹 Go"));
}
