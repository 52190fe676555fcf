//! Chrome blocks: header, footer, spacer, and the link strips.

use crate::mapping::ElementMapping;

pub fn header_default() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"img[class*="bm-logo"]"#)
            .attr("src", "logoUrl")
            .attr("alt", "logoAlt"),
        ElementMapping::single(r#"p[class*="bm-company"]"#).content("companyName"),
        ElementMapping::single(r#"p[class*="bm-tagline"]"#).content("tagline"),
    ]
}

pub fn header_centered() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"p[class*="bm-company"]"#).content("companyName"),
        ElementMapping::single(r#"p[class*="bm-tagline"]"#).content("tagline"),
    ]
}

pub fn logos_row() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-logos-title"]"#).content("title"),
        ElementMapping::repeating(r#"img[class*="bm-logo-img"]"#, "logos")
            .attr("src", "url")
            .attr("alt", "alt"),
    ]
}

pub fn social_row() -> Vec<ElementMapping> {
    vec![ElementMapping::repeating(r#"a[class*="bm-social-link"]"#, "links")
        .attr("href", "url")
        .content("network")]
}

pub fn spacer_default() -> Vec<ElementMapping> {
    vec![ElementMapping::single(r#"td[class*="bm-spacer"]"#).attr("height", "height")]
}

pub fn footer_default() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"p[class*="bm-footer-company"]"#).content("companyName"),
        ElementMapping::single(r#"p[class*="bm-footer-address"]"#).content("address"),
        ElementMapping::single(r#"a[class*="bm-unsubscribe"]"#)
            .attr("href", "unsubscribeUrl")
            .content_literal("Unsubscribe"),
        ElementMapping::single(r#"a[class*="bm-preferences"]"#)
            .attr("href", "preferencesUrl")
            .content_literal("Email preferences"),
        ElementMapping::single(r#"p[class*="bm-footer-legal"]"#).content("legalText"),
    ]
}

pub fn footer_minimal() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"p[class*="bm-footer-company"]"#).content("companyName"),
        ElementMapping::single(r#"a[class*="bm-unsubscribe"]"#)
            .attr("href", "unsubscribeUrl")
            .content_literal("Unsubscribe"),
    ]
}
