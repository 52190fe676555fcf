//! Editorial blocks: hero, text, image, button, cta, quote, list, video.

use crate::mapping::ElementMapping;

/// Shared by the `centered` and `split` hero layouts; both templates use
/// the same slot classes.
pub fn hero() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h1[class*="bm-hero-title"]"#).content("title"),
        ElementMapping::single(r#"p[class*="bm-hero-subtitle"]"#).content("subtitle"),
        ElementMapping::single(r#"img[class*="bm-hero-img"]"#)
            .attr("src", "imageUrl")
            .attr("alt", "imageAlt"),
        ElementMapping::single(r#"a[class*="bm-hero-btn"]"#)
            .attr("href", "buttonUrl")
            .content("buttonLabel"),
    ]
}

pub fn text() -> Vec<ElementMapping> {
    vec![ElementMapping::single(r#"p[class*="bm-body"]"#).content("body")]
}

pub fn image() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"a[class*="bm-image-link"]"#).attr("href", "linkUrl"),
        ElementMapping::single(r#"img[class*="bm-image"]"#)
            .attr("src", "url")
            .attr("alt", "alt"),
        ElementMapping::single(r#"p[class*="bm-caption"]"#).content("caption"),
    ]
}

pub fn button() -> Vec<ElementMapping> {
    vec![ElementMapping::single(r#"a[class*="bm-btn"]"#)
        .attr("href", "url")
        .content("label")]
}

pub fn cta() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-cta-title"]"#).content("title"),
        ElementMapping::single(r#"p[class*="bm-cta-body"]"#).content("body"),
        ElementMapping::single(r#"a[class*="bm-cta-btn"]"#)
            .attr("href", "buttonUrl")
            .content("buttonLabel"),
    ]
}

pub fn quote() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"p[class*="bm-quote-text"]"#).content("quote"),
        ElementMapping::single(r#"p[class*="bm-quote-attribution"]"#).content("attribution"),
    ]
}

pub fn list_numbered() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-list-title"]"#).content("title"),
        ElementMapping::repeating(r#"span[class*="bm-ordinal"]"#, "items").content_index(),
        ElementMapping::repeating(r#"td[class*="bm-item-text"]"#, "items").content("text"),
    ]
}

pub fn list_bulleted() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-list-title"]"#).content("title"),
        ElementMapping::repeating(r#"td[class*="bm-item-text"]"#, "items").content("text"),
    ]
}

pub fn video() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-video-title"]"#).content("title"),
        ElementMapping::single(r#"a[class*="bm-video-link"]"#).attr("href", "videoUrl"),
        ElementMapping::single(r#"img[class*="bm-video-thumb"]"#).attr("src", "thumbnailUrl"),
        ElementMapping::single(r#"p[class*="bm-video-caption"]"#).content("caption"),
    ]
}
