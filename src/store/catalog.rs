//! Color-catalog parsing.
//!
//! The catalog ships as a delimited text file with one color per line,
//! `"#RRGGBB (r, g, b)",Name`. Only the hex and the name matter; the RGB
//! triple inside the quotes is ignored.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::CatalogColor;

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^"?(#[0-9A-Fa-f]{6})[^"\n]*"?,(.+)$"#).expect("catalog line pattern is valid")
    })
}

/// Parse catalog file contents into display colors, sorted by name.
///
/// Blank lines, `//` comments, and lines that don't match the expected shape
/// are skipped rather than reported; the catalog is best-effort reference
/// data and a bad line should not take the rest of it down.
pub fn parse_catalog(input: &str) -> Vec<CatalogColor> {
    let mut colors: Vec<CatalogColor> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .filter_map(|line| {
            line_pattern().captures(line).map(|caps| CatalogColor {
                hex: caps[1].to_string(),
                name: caps[2].trim().to_string(),
            })
        })
        .collect();
    colors.sort_by(|a, b| a.name.cmp(&b.name));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_quoted_lines_and_sorts_by_name() {
        let input = "\"#8B4513 (139, 69, 19)\",Saddle Brown\n\"#FF0000 (255, 0, 0)\",Apple Red\n";
        let colors = parse_catalog(input);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].name, "Apple Red");
        assert_eq!(colors[0].hex, "#FF0000");
        assert_eq!(colors[1].name, "Saddle Brown");
    }

    #[test]
    fn test_skips_comments_and_junk() {
        let input = "// herd colors\n\n\"#112233 (17, 34, 51)\",Slate\nnot a color line\n";
        let colors = parse_catalog(input);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "Slate");
    }
}
