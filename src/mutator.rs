use crate::locator::{find_elements, ElementMatch};
use crate::mapping::{resolve_path, AttributeRule, ElementMapping, ItemMapping, MappingKind, ValueSource};
use crate::selector::Selector;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

/// Escape text for safe injection into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Apply one mapping against the current buffer, returning the new buffer.
///
/// Matches are located fresh against `html` — never carried over from a
/// previous application, since earlier splices shift offsets.
pub fn apply_mapping(html: &str, mapping: &ElementMapping, data: &Value) -> String {
    let selector = Selector::parse(&mapping.selector);
    match &mapping.kind {
        MappingKind::Single {
            attributes,
            content,
        } => apply_single_mapping(html, &mapping.selector, &selector, attributes, content.as_ref(), data),
        MappingKind::Repeating { array_path, item } => {
            apply_repeating_mapping(html, &mapping.selector, &selector, array_path, item, data)
        }
    }
}

/// Rewrite the first located element and splice it back at the first index
/// of its exact substring in the buffer.
fn apply_single_mapping(
    html: &str,
    selector_text: &str,
    selector: &Selector,
    attributes: &[AttributeRule],
    content: Option<&ValueSource>,
    data: &Value,
) -> String {
    let matches = find_elements(html, selector);
    let Some(first) = matches.first() else {
        warn!(selector = selector_text, "no matching element, mapping skipped");
        return html.to_string();
    };

    let updated = populate_element(&first.html, &first.tag, attributes, content, data, None);

    // The element was located against this exact buffer, so its substring
    // is present; first occurrence is the reference behavior.
    let Some(pos) = html.find(first.html.as_str()) else {
        return html.to_string();
    };
    splice_segments(html, &[(pos, pos + first.html.len(), updated.as_str())])
}

/// Project an array onto the pre-existing template slots.
///
/// Clones always come from the first found instance. Instances are replaced
/// in place, last to first, each located by backward search bounded above by
/// the next instance's start offset — identical substrings cannot be
/// confused, and earlier replacements never shift pending positions.
/// Items beyond the slot count are dropped; rows are never cloned in.
fn apply_repeating_mapping(
    html: &str,
    selector_text: &str,
    selector: &Selector,
    array_path: &str,
    item: &ItemMapping,
    data: &Value,
) -> String {
    let Some(items) = resolve_path(data, array_path).and_then(Value::as_array) else {
        debug!(selector = selector_text, array_path, "array path unresolved, mapping skipped");
        return html.to_string();
    };
    let matches = find_elements(html, selector);
    if matches.is_empty() {
        warn!(selector = selector_text, "no template instances, mapping skipped");
        return html.to_string();
    }

    let count = items.len().min(matches.len());
    if items.len() > matches.len() {
        warn!(
            selector = selector_text,
            dropped = items.len() - matches.len(),
            slots = matches.len(),
            "more items than template slots, extra items dropped"
        );
    }

    let template = &matches[0];
    let populated: Vec<String> = items
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, item_data)| {
            populate_element(
                &template.html,
                &template.tag,
                &item.attributes,
                item.content.as_ref(),
                item_data,
                Some(i),
            )
        })
        .collect();

    let mut spans: Vec<(usize, usize, &str)> = Vec::with_capacity(count);
    for i in (0..count).rev() {
        let bound = match matches.get(i + 1) {
            Some(next) => next.start,
            None => html.len(),
        };
        let Some(pos) = backward_find(html, &matches[i], bound) else {
            warn!(selector = selector_text, instance = i, "instance not found in buffer, skipped");
            continue;
        };
        spans.push((pos, pos + matches[i].html.len(), populated[i].as_str()));
    }
    spans.sort_by_key(|span| span.0);
    splice_segments(html, &spans)
}

fn backward_find(html: &str, instance: &ElementMatch, bound: usize) -> Option<usize> {
    html[..bound].rfind(instance.html.as_str())
}

fn populate_element(
    element: &str,
    tag: &str,
    attributes: &[AttributeRule],
    content: Option<&ValueSource>,
    data: &Value,
    index: Option<usize>,
) -> String {
    let mut updated = element.to_string();
    for rule in attributes {
        if let Some(value) = rule.value.resolve(data, index) {
            updated = update_attribute(&updated, &rule.attribute, &value);
        }
    }
    if let Some(source) = content {
        if let Some(value) = source.resolve(data, index) {
            updated = update_content(&updated, tag, &value);
        }
    }
    updated
}

/// Replace an existing attribute in place, or inject it before the open
/// tag's closing `>`. Values are HTML-escaped.
pub fn update_attribute(element: &str, attribute: &str, value: &str) -> String {
    let escaped = escape_html(value);
    let re = Regex::new(&format!(
        r#"(?i)\b{}\s*=\s*"[^"]*""#,
        regex::escape(attribute)
    ))
    .unwrap();
    if let Some(m) = re.find(element) {
        let mut out = String::with_capacity(element.len() + escaped.len());
        out.push_str(&element[..m.start()]);
        out.push_str(attribute);
        out.push_str("=\"");
        out.push_str(&escaped);
        out.push('"');
        out.push_str(&element[m.end()..]);
        return out;
    }

    let Some(gt) = element.find('>') else {
        return element.to_string();
    };
    // Keep self-closing tags self-closing: inject before the `/`.
    let insert_at = match element[..gt].rfind('/') {
        Some(slash) if element[slash + 1..gt].trim().is_empty() => slash,
        _ => gt,
    };
    format!(
        "{} {}=\"{}\"{}",
        element[..insert_at].trim_end(),
        attribute,
        escaped,
        &element[insert_at..]
    )
}

/// Replace an element's text content.
///
/// Elements wrapped in `<span>` shims (button padding, Outlook fallbacks)
/// get only the innermost non-empty span's text replaced, skipping spans
/// inside MSO conditional comments. Anything else has everything between
/// the first `>` and the last matching close tag replaced.
pub fn update_content(element: &str, tag: &str, value: &str) -> String {
    let escaped = escape_html(value);

    if let Some((start, end)) = span_text_slot(element) {
        return splice_segments(element, &[(start, end, escaped.as_str())]);
    }

    let Some(open_end) = element.find('>') else {
        return element.to_string();
    };
    let lower = element.to_lowercase();
    let Some(close) = lower.rfind(&format!("</{}", tag.to_lowercase())) else {
        // Void or self-closing element: nothing to hold content.
        return element.to_string();
    };
    if close <= open_end {
        return element.to_string();
    }
    splice_segments(element, &[(open_end + 1, close, escaped.as_str())])
}

/// Locate the inner-text span of the innermost non-empty `<span>` that is
/// not part of an Outlook/MSO conditional-comment shim.
fn span_text_slot(element: &str) -> Option<(usize, usize)> {
    let spans = find_elements(element, &Selector::parse("span"));
    if spans.is_empty() {
        return None;
    }
    let comment_ranges = conditional_comment_ranges(element);

    let candidates: Vec<&ElementMatch> = spans
        .iter()
        .filter(|span| {
            if comment_ranges
                .iter()
                .any(|(start, end)| span.start >= *start && span.start < *end)
            {
                return false;
            }
            span_inner(&span.html)
                .map(|(s, e)| !span.html[s..e].trim().is_empty())
                .unwrap_or(false)
        })
        .collect();

    // Innermost: a candidate that contains no other candidate.
    let innermost = candidates.iter().find(|outer| {
        !candidates
            .iter()
            .any(|inner| inner.start > outer.start && inner.end <= outer.end)
    })?;

    let (inner_start, inner_end) = span_inner(&innermost.html)?;
    Some((innermost.start + inner_start, innermost.start + inner_end))
}

/// Byte range of a span element's inner content, relative to the element.
fn span_inner(span_html: &str) -> Option<(usize, usize)> {
    let open_end = span_html.find('>')? + 1;
    let close = span_html.to_lowercase().rfind("</span")?;
    if close < open_end {
        return None;
    }
    Some((open_end, close))
}

/// All `<!--[if ...]> ... <![endif]-->` ranges in the element.
fn conditional_comment_ranges(element: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut cursor = 0;
    while let Some(rel_start) = element[cursor..].find("<!--[if") {
        let start = cursor + rel_start;
        let Some(rel_end) = element[start..].find("<![endif]-->") else {
            break;
        };
        let end = start + rel_end + "<![endif]-->".len();
        ranges.push((start, end));
        cursor = end;
    }
    ranges
}

/// Rebuild a buffer from (start, end, replacement) spans over the original.
/// Spans must be sorted and non-overlapping; anything outside them is
/// copied through verbatim.
fn splice_segments(html: &str, spans: &[(usize, usize, &str)]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for (start, end, replacement) in spans {
        if *start < cursor {
            continue;
        }
        out.push_str(&html[cursor..*start]);
        out.push_str(replacement);
        cursor = *end;
    }
    out.push_str(&html[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ElementMapping;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_update_attribute_in_place() {
        let element = r#"<a href="https://old.test" class="btn">Go</a>"#;
        let updated = update_attribute(element, "href", "https://new.test");
        assert_eq!(updated, r#"<a href="https://new.test" class="btn">Go</a>"#);
    }

    #[test]
    fn test_update_attribute_injects_when_missing() {
        let element = r#"<p style="margin:0">Hi</p>"#;
        let updated = update_attribute(element, "align", "center");
        assert_eq!(updated, r#"<p style="margin:0" align="center">Hi</p>"#);
    }

    #[test]
    fn test_update_attribute_keeps_self_closing() {
        let element = r#"<img src="https://a.test/x.png" />"#;
        let updated = update_attribute(element, "alt", "Logo");
        assert_eq!(updated, r#"<img src="https://a.test/x.png" alt="Logo"/>"#);
    }

    #[test]
    fn test_update_attribute_escapes_value() {
        let element = "<a href=\"#\">x</a>";
        let updated = update_attribute(element, "href", r#"https://t.test/?a="b""#);
        assert_eq!(
            updated,
            r#"<a href="https://t.test/?a=&quot;b&quot;">x</a>"#
        );
    }

    #[test]
    fn test_update_content_simple_element() {
        let updated = update_content("<p>PLACEHOLDER</p>", "p", "Acme");
        assert_eq!(updated, "<p>Acme</p>");
    }

    #[test]
    fn test_update_content_replaces_innermost_span() {
        let element = "<a href=\"#\"><span style=\"color:#ffffff\">Click here</span></a>";
        let updated = update_content(element, "a", "Buy now");
        assert_eq!(
            updated,
            "<a href=\"#\"><span style=\"color:#ffffff\">Buy now</span></a>"
        );
    }

    #[test]
    fn test_update_content_skips_mso_shim_span() {
        let element = concat!(
            "<a href=\"#\">",
            "<!--[if mso]><i><span style=\"mso-font-width:150%\">&nbsp;</span></i><![endif]-->",
            "<span>Label</span>",
            "</a>"
        );
        let updated = update_content(element, "a", "New label");
        assert!(updated.contains("<span>New label</span>"));
        assert!(updated.contains("mso-font-width:150%"));
    }

    #[test]
    fn test_update_content_escapes_value() {
        let updated = update_content("<p>x</p>", "p", "<script>");
        assert_eq!(updated, "<p>&lt;script&gt;</p>");
    }

    #[test]
    fn test_update_content_nested_markup_replaced_wholesale() {
        let updated = update_content("<td><b>old</b> text</td>", "td", "new");
        assert_eq!(updated, "<td>new</td>");
    }

    #[test]
    fn test_single_mapping_unresolved_path_is_identity() {
        let html = r#"<p class="name">PLACEHOLDER</p>"#;
        let mapping = ElementMapping::single("p").content("missingField");
        let out = apply_mapping(html, &mapping, &json!({"companyName": "Acme"}));
        assert_eq!(out, html);
    }

    #[test]
    fn test_single_mapping_no_match_is_identity() {
        let html = "<div>nothing here</div>";
        let mapping = ElementMapping::single("h1").content("title");
        let out = apply_mapping(html, &mapping, &json!({"title": "T"}));
        assert_eq!(out, html);
    }

    #[test]
    fn test_single_mapping_populates_first_match_only() {
        let html = "<p>one</p><p>two</p>";
        let mapping = ElementMapping::single("p").content("body");
        let out = apply_mapping(html, &mapping, &json!({"body": "filled"}));
        assert_eq!(out, "<p>filled</p><p>two</p>");
    }

    #[test]
    fn test_repeating_mapping_fills_slots_in_order() {
        let html = r#"<td class="f">A</td><td class="f">A</td>"#;
        let mapping = ElementMapping::repeating(r#"td[class*="f"]"#, "features").content("title");
        let out = apply_mapping(
            html,
            &mapping,
            &json!({"features": [{"title": "Fast"}, {"title": "Safe"}]}),
        );
        assert_eq!(out, r#"<td class="f">Fast</td><td class="f">Safe</td>"#);
    }

    #[test]
    fn test_repeating_mapping_drops_extra_items() {
        let html = r#"<td class="f">A</td><td class="f">A</td>"#;
        let items = json!({"features": [
            {"title": "1"}, {"title": "2"}, {"title": "3"}, {"title": "4"}, {"title": "5"}
        ]});
        let mapping = ElementMapping::repeating(r#"td[class*="f"]"#, "features").content("title");
        let out = apply_mapping(html, &mapping, &items);
        assert_eq!(out, r#"<td class="f">1</td><td class="f">2</td>"#);
    }

    #[test]
    fn test_repeating_mapping_clones_from_first_instance() {
        // Instance 2 diverges; the clone source is instance 1, so the
        // divergence is overwritten.
        let html = r#"<td class="f" align="left">A</td><td class="f" align="right">A</td>"#;
        let mapping = ElementMapping::repeating(r#"td[class*="f"]"#, "features").content("title");
        let out = apply_mapping(
            html,
            &mapping,
            &json!({"features": [{"title": "X"}, {"title": "Y"}]}),
        );
        assert_eq!(
            out,
            r#"<td class="f" align="left">X</td><td class="f" align="left">Y</td>"#
        );
    }

    #[test]
    fn test_repeating_mapping_identical_slots_disambiguated() {
        // Three byte-identical slots; bounded backward search must hit each
        // instance exactly once.
        let html = "<li>item</li><li>item</li><li>item</li>";
        let mapping = ElementMapping::repeating("li", "items").content_index();
        let out = apply_mapping(html, &mapping, &json!({"items": [{}, {}, {}]}));
        assert_eq!(out, "<li>1</li><li>2</li><li>3</li>");
    }

    #[test]
    fn test_repeating_mapping_fewer_items_leaves_trailing_slots() {
        let html = r#"<td class="f">A</td><td class="f">A</td><td class="f">A</td>"#;
        let mapping = ElementMapping::repeating(r#"td[class*="f"]"#, "features").content("title");
        let out = apply_mapping(html, &mapping, &json!({"features": [{"title": "only"}]}));
        assert_eq!(
            out,
            r#"<td class="f">only</td><td class="f">A</td><td class="f">A</td>"#
        );
    }

    #[test]
    fn test_repeating_item_attribute_updates() {
        let html = r##"<a class="s" href="#">x</a><a class="s" href="#">x</a>"##;
        let mapping = ElementMapping::repeating(r#"a[class*="s"]"#, "links")
            .attr("href", "url")
            .content("network");
        let out = apply_mapping(
            html,
            &mapping,
            &json!({"links": [
                {"network": "X", "url": "https://x.test"},
                {"network": "Y", "url": "https://y.test"}
            ]}),
        );
        assert_eq!(
            out,
            r#"<a class="s" href="https://x.test">X</a><a class="s" href="https://y.test">Y</a>"#
        );
    }
}
