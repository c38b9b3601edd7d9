mod styling;

pub use styling::{bright, bright_green, dim};
use styling::cyan;

/// A line made of `width` copies of `separator`.
pub fn separator_line(separator: char, width: usize) -> String {
    std::iter::repeat(separator).take(width).collect()
}

/// Renders the opening banner: a separator line, the title, another separator line.
///
/// The returned text has no trailing newline.
pub fn render_banner(title: &str, separator: char, width: usize) -> String {
    let line = separator_line(separator, width);
    format!("{line}\n{}\n{line}", bright(title))
}

/// Renders a `label: value` line with the label highlighted.
pub fn render_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{} {}", cyan(format!("{label}:")), value)
}
