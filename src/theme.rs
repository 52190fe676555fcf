use crate::settings::GlobalEmailSettings;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Accent hexes the curated templates ship with. Only these are ever
/// swapped for the caller's primary color, and only on `<a>` backgrounds.
const DEFAULT_ACCENT_COLORS: &[&str] = &["#4f46e5", "#6366f1", "#4338ca", "#2563eb"];

/// Conservative per-block post-pass, run once after all mappings.
pub fn apply_theme(html: &str, settings: &GlobalEmailSettings) -> String {
    let html = apply_font_family(html, &settings.font_family);
    let html = apply_brand_color(&html, &settings.primary_color);
    backfill_cell_backgrounds(&html)
}

/// Replace every quoted `font-family: '...'` occurrence with the caller's
/// font. Unquoted stacks are left alone — they are structural fallbacks.
fn apply_font_family(html: &str, font: &str) -> String {
    static FONT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = FONT_REGEX.get_or_init(|| Regex::new(r"(?i)font-family:\s*'[^']*'").unwrap());
    re.replace_all(html, |_: &Captures| format!("font-family: '{}'", font))
        .into_owned()
}

/// Swap whitelisted accent backgrounds inside `<a ... style="...">` open
/// tags for the caller's primary color. No other color is ever touched —
/// text colors and arbitrary backgrounds keep their authored values.
fn apply_brand_color(html: &str, primary: &str) -> String {
    static A_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    static BG_REGEX: OnceLock<Regex> = OnceLock::new();
    let a_re = A_TAG_REGEX.get_or_init(|| Regex::new(r"(?is)<a(\s[^>]*)?>").unwrap());
    let bg_re = BG_REGEX
        .get_or_init(|| Regex::new(r"(?i)background-color:\s*(#[0-9a-fA-F]{6})").unwrap());

    a_re.replace_all(html, |caps: &Captures| {
        let tag = &caps[0];
        if !tag.to_lowercase().contains("style") {
            return tag.to_string();
        }
        bg_re
            .replace_all(tag, |bg: &Captures| {
                if DEFAULT_ACCENT_COLORS.contains(&bg[1].to_lowercase().as_str()) {
                    format!("background-color: {}", primary)
                } else {
                    bg[0].to_string()
                }
            })
            .into_owned()
    })
    .into_owned()
}

/// Append a white background to every `<td style="...">` that has none,
/// so a colored outer canvas cannot bleed through content cells.
fn backfill_cell_backgrounds(html: &str) -> String {
    static TD_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    static STYLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let td_re = TD_TAG_REGEX.get_or_init(|| Regex::new(r"(?is)<td(\s[^>]*)?>").unwrap());
    let style_re =
        STYLE_REGEX.get_or_init(|| Regex::new(r#"(?i)style\s*=\s*"([^"]*)""#).unwrap());

    td_re
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            let Some(style) = style_re.captures(tag) else {
                return tag.to_string();
            };
            if style[1].to_lowercase().contains("background-color") {
                return tag.to_string();
            }
            let existing = style[1].trim_end();
            let separator = if existing.is_empty() {
                ""
            } else if existing.ends_with(';') {
                " "
            } else {
                "; "
            };
            let patched = format!(
                "style=\"{}{}background-color: #ffffff;\"",
                existing, separator
            );
            let range = style.get(0).unwrap();
            format!("{}{}{}", &tag[..range.start()], patched, &tag[range.end()..])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(font: &str, primary: &str) -> GlobalEmailSettings {
        GlobalEmailSettings {
            font_family: font.to_string(),
            primary_color: primary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_font_family_swapped_everywhere() {
        let html = concat!(
            "<p style=\"font-family: 'Helvetica', Arial, sans-serif\">a</p>",
            "<td style=\"font-family:'Georgia'\">b</td>"
        );
        let out = apply_theme(html, &settings("Inter", "#4f46e5"));
        assert_eq!(out.matches("font-family: 'Inter'").count(), 2);
        assert!(!out.contains("Helvetica"));
        assert!(!out.contains("Georgia"));
    }

    #[test]
    fn test_unquoted_font_stack_untouched() {
        let html = "<p style=\"font-family: Arial, sans-serif\">a</p>";
        let out = apply_theme(html, &settings("Inter", "#4f46e5"));
        assert!(out.contains("font-family: Arial, sans-serif"));
    }

    #[test]
    fn test_whitelisted_anchor_background_swapped() {
        let html = r##"<a href="#" style="background-color: #4f46e5; color: #ffffff">Go</a>"##;
        let out = apply_theme(html, &settings("Arial", "#ff0000"));
        assert!(out.contains("background-color: #ff0000"));
        assert!(out.contains("color: #ffffff"));
    }

    #[test]
    fn test_non_anchor_color_untouched() {
        let html = r#"<p style="color:#4f46e5">text</p>"#;
        let out = apply_theme(html, &settings("Arial", "#ff0000"));
        assert!(out.contains("color:#4f46e5"));
        assert!(!out.contains("#ff0000"));
    }

    #[test]
    fn test_non_whitelisted_anchor_background_untouched() {
        let html = r##"<a href="#" style="background-color: #222222">Go</a>"##;
        let out = apply_theme(html, &settings("Arial", "#ff0000"));
        assert!(out.contains("background-color: #222222"));
    }

    #[test]
    fn test_whitelist_match_is_case_insensitive() {
        let html = r##"<a href="#" style="background-color: #4F46E5">Go</a>"##;
        let out = apply_theme(html, &settings("Arial", "#00ff00"));
        assert!(out.contains("background-color: #00ff00"));
    }

    #[test]
    fn test_bare_td_gets_white_backfill() {
        let html = r#"<td style="padding: 16px">x</td>"#;
        let out = apply_theme(html, &settings("Arial", "#4f46e5"));
        assert_eq!(
            out,
            r#"<td style="padding: 16px; background-color: #ffffff;">x</td>"#
        );
    }

    #[test]
    fn test_td_with_background_untouched() {
        let html = r#"<td style="padding: 16px; background-color: #111827;">x</td>"#;
        let out = apply_theme(html, &settings("Arial", "#4f46e5"));
        assert!(out.contains("background-color: #111827"));
        assert!(!out.contains("#ffffff"));
    }

    #[test]
    fn test_td_without_style_untouched() {
        let html = "<td align=\"center\">x</td>";
        let out = apply_theme(html, &settings("Arial", "#4f46e5"));
        assert_eq!(out, html);
    }
}
