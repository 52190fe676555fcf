use crate::selector::Selector;
use regex::Regex;
use tracing::warn;

/// Tags that cannot legally nest inside themselves. Their span ends at the
/// first matching close tag, no depth tracking needed.
const NON_NESTABLE_TAGS: &[&str] = &["a", "button", "img", "input", "br", "hr"];

/// One located element: an exact substring of the scanned buffer.
///
/// `html == &buffer[start..end]` at scan time. Matches are never reused
/// across mutations — earlier splices shift offsets, so callers re-locate
/// against the current buffer before every mapping application.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMatch {
    pub html: String,
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

/// Find every element matching `selector`, in document order.
///
/// The scan walks open tags of the selector's tag name, evaluates attribute
/// predicates on the raw open-tag text, and computes each accepted match's
/// full span. Elements with no matching close tag are dropped with a
/// warning rather than aborting the scan.
pub fn find_elements(html: &str, selector: &Selector) -> Vec<ElementMatch> {
    let tag = selector.tag.to_lowercase();
    let Ok(open_re) = Regex::new(&format!(r"(?is)<{}(\s[^>]*)?>", regex::escape(&tag))) else {
        return Vec::new();
    };
    let close_re = Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(&tag))).unwrap();

    let mut matches = Vec::new();
    for open in open_re.find_iter(html) {
        if !selector.matches_open_tag(open.as_str()) {
            continue;
        }
        let Some(end) = element_end(html, &tag, open.as_str(), open.end(), &open_re, &close_re)
        else {
            warn!(tag = %tag, offset = open.start(), "dropping unterminated element");
            continue;
        };
        matches.push(ElementMatch {
            html: html[open.start()..end].to_string(),
            tag: tag.clone(),
            start: open.start(),
            end,
        });
    }
    matches
}

/// Compute the byte offset one past the element's final `>`.
fn element_end(
    html: &str,
    tag: &str,
    open_text: &str,
    open_end: usize,
    open_re: &Regex,
    close_re: &Regex,
) -> Option<usize> {
    // Self-closing open tag is the whole element.
    if open_text.trim_end().ends_with("/>") {
        return Some(open_end);
    }

    if NON_NESTABLE_TAGS.contains(&tag) {
        // Direct forward search: these tags never contain themselves.
        return close_re.find_at(html, open_end).map(|c| c.end());
    }

    // Depth-tracked scan for nestable tags. Starting inside the element at
    // depth 1, whichever of the next same-name open or close tag comes
    // first moves the depth; depth 0 closes the element.
    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_close = close_re.find_at(html, pos)?;
        let next_open = open_re.find_at(html, pos);

        match next_open {
            Some(o) if o.start() < next_close.start() => {
                depth += 1;
                pos = o.end();
            }
            _ => {
                depth -= 1;
                pos = next_close.end();
                if depth == 0 {
                    return Some(next_close.end());
                }
            }
        }
    }
}
