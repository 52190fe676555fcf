use regex::Regex;
use std::sync::OnceLock;

/// A parsed simple selector: a tag name plus attribute predicates.
///
/// Descendant selectors collapse to their rightmost simple selector —
/// `table td a` selects exactly what `a` selects. Ancestor constraints are
/// not enforced; authored mapping tables rely on this.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub tag: String,
    pub predicates: Vec<AttributePredicate>,
}

/// One `[...]` group. All predicates on a selector must hold (implicit AND).
#[derive(Debug, Clone, PartialEq)]
pub enum AttributePredicate {
    /// `[attr]` — the attribute is present with a value
    Present { name: String },
    /// `[attr="v"]` — the attribute value equals `v`
    Equals { name: String, value: String },
    /// `[attr*="v"]` — the attribute value contains `v`
    Contains { name: String, value: String },
}

impl Selector {
    /// Parse a selector string. Never fails: anything that doesn't match the
    /// `tag[attr...]` grammar is treated as a bare tag name.
    pub fn parse(selector: &str) -> Selector {
        let simple = rightmost_simple(selector.trim());

        static SIMPLE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SIMPLE_REGEX
            .get_or_init(|| Regex::new(r"^(\w+)((?:\[[^\]]+\])*)$").unwrap());

        let Some(caps) = re.captures(simple) else {
            return Selector {
                tag: simple.to_string(),
                predicates: Vec::new(),
            };
        };

        let tag = caps[1].to_string();
        let mut predicates = Vec::new();

        static GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
        let group_re = GROUP_REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]").unwrap());
        for group in group_re.captures_iter(&caps[2]) {
            predicates.push(parse_predicate(&group[1]));
        }

        Selector { tag, predicates }
    }

    /// Evaluate every predicate against the raw text of one open tag.
    ///
    /// The tag text is whitespace-normalized first so attributes split
    /// across lines in hand-formatted templates still match.
    pub fn matches_open_tag(&self, open_tag: &str) -> bool {
        let normalized = collapse_whitespace(open_tag);
        self.predicates.iter().all(|p| p.matches(&normalized))
    }
}

impl AttributePredicate {
    fn matches(&self, tag_text: &str) -> bool {
        match self {
            AttributePredicate::Present { name } => {
                let re = Regex::new(&format!(r"(?i)\b{}\s*=", regex::escape(name))).unwrap();
                re.is_match(tag_text)
            }
            AttributePredicate::Equals { name, value } => {
                attribute_value(tag_text, name).is_some_and(|v| v == *value)
            }
            AttributePredicate::Contains { name, value } => {
                attribute_value(tag_text, name).is_some_and(|v| v.contains(value.as_str()))
            }
        }
    }
}

/// Extract a double-quoted attribute value from open-tag text.
/// Attribute-name comparison is case-insensitive.
fn attribute_value(tag_text: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r#"(?i)\b{}\s*=\s*"([^"]*)""#,
        regex::escape(name)
    ))
    .unwrap();
    re.captures(tag_text).map(|caps| caps[1].to_string())
}

fn parse_predicate(group: &str) -> AttributePredicate {
    if let Some(idx) = group.find("*=") {
        let name = group[..idx].trim().to_string();
        let value = trim_quotes(group[idx + 2..].trim());
        return AttributePredicate::Contains { name, value };
    }
    if let Some(idx) = group.find('=') {
        let name = group[..idx].trim().to_string();
        let value = trim_quotes(group[idx + 1..].trim());
        return AttributePredicate::Equals { name, value };
    }
    AttributePredicate::Present {
        name: group.trim().to_string(),
    }
}

fn trim_quotes(value: &str) -> String {
    value
        .trim_start_matches(['"', '\''])
        .trim_end_matches(['"', '\''])
        .to_string()
}

/// Keep only the substring after the last top-level space. Spaces inside
/// `[...]` are not split points, so `td[data-label="two words"]` survives.
fn rightmost_simple(selector: &str) -> &str {
    let mut depth = 0usize;
    let mut last_split = None;
    for (idx, ch) in selector.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => last_split = Some(idx),
            _ => {}
        }
    }
    match last_split {
        Some(idx) => &selector[idx + 1..],
        None => selector,
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    static WS_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = WS_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_tag() {
        let sel = Selector::parse("td");
        assert_eq!(sel.tag, "td");
        assert!(sel.predicates.is_empty());
    }

    #[test]
    fn test_presence_predicate() {
        let sel = Selector::parse("img[src]");
        assert_eq!(sel.tag, "img");
        assert_eq!(
            sel.predicates,
            vec![AttributePredicate::Present {
                name: "src".to_string()
            }]
        );
    }

    #[test]
    fn test_equals_predicate() {
        let sel = Selector::parse(r#"a[href="https://example.com"]"#);
        assert_eq!(
            sel.predicates,
            vec![AttributePredicate::Equals {
                name: "href".to_string(),
                value: "https://example.com".to_string()
            }]
        );
    }

    #[test]
    fn test_contains_predicate() {
        let sel = Selector::parse(r#"td[class*="feature"]"#);
        assert_eq!(
            sel.predicates,
            vec![AttributePredicate::Contains {
                name: "class".to_string(),
                value: "feature".to_string()
            }]
        );
    }

    #[test]
    fn test_multiple_predicates_and() {
        let sel = Selector::parse(r#"a[href][class*="btn"]"#);
        assert_eq!(sel.predicates.len(), 2);
        assert!(sel.matches_open_tag(r#"<a href="https://x.test" class="btn primary">"#));
        assert!(!sel.matches_open_tag(r#"<a class="btn primary">"#));
    }

    #[test]
    fn test_descendant_collapses_to_rightmost() {
        let sel = Selector::parse(r#"table td a[class*="btn"]"#);
        assert_eq!(sel.tag, "a");
        assert_eq!(sel.predicates.len(), 1);
    }

    #[test]
    fn test_space_inside_brackets_not_a_split_point() {
        let sel = Selector::parse(r#"td[data-label="two words"]"#);
        assert_eq!(sel.tag, "td");
        assert_eq!(
            sel.predicates,
            vec![AttributePredicate::Equals {
                name: "data-label".to_string(),
                value: "two words".to_string()
            }]
        );
    }

    #[test]
    fn test_garbage_falls_back_to_bare_tag() {
        let sel = Selector::parse("p.intro");
        assert_eq!(sel.tag, "p.intro");
        assert!(sel.predicates.is_empty());
    }

    #[test]
    fn test_multiline_attributes_match() {
        let sel = Selector::parse(r#"td[class*="cell"]"#);
        let open_tag = "<td\n    class=\"cell dark\"\n    align=\"center\">";
        assert!(sel.matches_open_tag(open_tag));
    }

    #[test]
    fn test_attribute_name_case_insensitive() {
        let sel = Selector::parse(r#"img[SRC*="logo"]"#);
        assert!(sel.matches_open_tag(r#"<img src="https://cdn.test/logo.png" />"#));
    }
}
