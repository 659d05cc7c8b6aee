//! Static font metrics for the resume layout engine.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Helvetica AFM tables — the face the export routine renders with.
//! This is an approximation: a real renderer shapes glyphs, but a static
//! table is deterministic, needs no font files, and is accurate enough for
//! word-wrap decisions at resume font sizes.
//!
//! The table covers ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Conversion factor from points to millimetres (25.4 / 72).
pub const PT_TO_MM: f32 = 0.352_778;

// ────────────────────────────────────────────────────────────────────────────
// Font tiers
// ────────────────────────────────────────────────────────────────────────────

/// The four font-size tiers a positioned block can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontTier {
    /// The candidate's name in the page header.
    Title,
    /// Section titles (Summary, Skills, Experience, Education).
    Heading,
    /// Row primary labels: email, position, degree.
    Body,
    /// Wrapped paragraphs, durations, years, companies, institutions.
    Caption,
}

impl FontTier {
    /// Font size in points for this tier.
    pub fn size_pt(self) -> f32 {
        match self {
            FontTier::Title => 24.0,
            FontTier::Heading => 16.0,
            FontTier::Body => 12.0,
            FontTier::Caption => 10.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for the resume page, in millimetres.
///
/// Defaults describe the single-column A4-like page the export format uses:
/// 210×297, content starting at x=20 with a 170mm usable width, a secondary
/// right column at x=150, and flowed content resuming at y=30 on
/// continuation pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Left edge of all flowed content.
    pub margin_left: f32,
    /// Usable width for wrapped text.
    pub content_width: f32,
    /// X offset of the secondary column (durations, years).
    pub secondary_x: f32,
    /// Y where content starts on continuation pages.
    pub top_y: f32,
    /// Space reserved at the bottom of every page.
    pub bottom_margin: f32,
}

impl PageConfig {
    /// Largest y a block may be emitted at before a page break is forced.
    pub fn content_limit(&self) -> f32 {
        self.page_height - self.bottom_margin
    }
}

/// Returns the default page config (210×297mm, 20mm left margin,
/// 170mm content width, secondary column at 150mm).
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width: 210.0,
        page_height: 297.0,
        margin_left: 20.0,
        content_width: 170.0,
        secondary_x: 150.0,
        top_y: 30.0,
        bottom_margin: 20.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font face.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in millimetres at `size_pt`.
    pub fn text_width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * PT_TO_MM
    }

    /// Greedy word-wrap: splits `text` into lines no wider than
    /// `max_width_mm` at `size_pt`.
    ///
    /// Words are never broken; a single word wider than the limit occupies
    /// its own (overfull) line. Whitespace runs collapse to single spaces.
    /// Empty or whitespace-only input yields no lines.
    pub fn wrap_text(&self, text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }

        let space_mm = self.space_width * size_pt * PT_TO_MM;
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in &words {
            let word_mm = self.text_width_mm(word, size_pt);

            if !current.is_empty() && current_width + space_mm + word_mm > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_mm;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += space_mm;
                }
                current.push_str(word);
                current_width += word_mm;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width table (95 ASCII printable characters)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — standard AFM advance widths divided by 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Returns the static metric table used by the layout engine.
pub fn get_metrics() -> &'static FontMetricTable {
    &HELVETICA_TABLE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let width = get_metrics().measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = get_metrics().measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics();
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let metrics = get_metrics();
        let at_10 = metrics.text_width_mm("Engineer", 10.0);
        let at_20 = metrics.text_width_mm("Engineer", 20.0);
        assert!(
            (at_20 - at_10 * 2.0).abs() < 1e-3,
            "doubling the size should double the width"
        );
    }

    #[test]
    fn test_wrap_text_empty_yields_no_lines() {
        assert!(get_metrics().wrap_text("", 10.0, 170.0).is_empty());
        assert!(get_metrics().wrap_text("   ", 10.0, 170.0).is_empty());
    }

    #[test]
    fn test_wrap_text_short_string_single_line() {
        let lines = get_metrics().wrap_text("Engineer.", 10.0, 170.0);
        assert_eq!(lines, vec!["Engineer."]);
    }

    #[test]
    fn test_wrap_text_long_text_wraps() {
        let text = "word ".repeat(100);
        let lines = get_metrics().wrap_text(&text, 10.0, 170.0);
        assert!(lines.len() > 1, "repeated text must wrap at 170mm");
        for line in &lines {
            assert!(!line.is_empty(), "wrapping must not emit empty lines");
            assert!(
                get_metrics().text_width_mm(line, 10.0) <= 170.0 + 1e-3,
                "line '{line}' exceeds the content width"
            );
        }
    }

    #[test]
    fn test_wrap_text_preserves_word_sequence() {
        let text = "Built and operated a multi-tenant ingestion pipeline \
                    handling forty thousand events per second at peak load";
        let lines = get_metrics().wrap_text(text, 10.0, 60.0);
        let rejoined = lines.join(" ");
        let normalized: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, normalized.join(" "));
    }

    #[test]
    fn test_wrap_text_overwide_word_gets_own_line() {
        let giant = "x".repeat(300);
        let text = format!("short {giant} tail");
        let lines = get_metrics().wrap_text(&text, 10.0, 170.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "short");
        assert_eq!(lines[1], giant);
        assert_eq!(lines[2], "tail");
    }

    #[test]
    fn test_font_tier_sizes() {
        assert_eq!(FontTier::Title.size_pt(), 24.0);
        assert_eq!(FontTier::Heading.size_pt(), 16.0);
        assert_eq!(FontTier::Body.size_pt(), 12.0);
        assert_eq!(FontTier::Caption.size_pt(), 10.0);
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = default_page_config();
        assert_eq!(config.content_width, 170.0);
        assert_eq!(config.margin_left, 20.0);
        assert!(config.secondary_x > config.margin_left);
        assert!(config.content_limit() < config.page_height);
    }
}
