//! Array-driven blocks: each selector addresses N identical template slots
//! and projects one array field onto them.

use crate::mapping::ElementMapping;

pub fn features_grid() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-features-title"]"#).content("title"),
        ElementMapping::repeating(r#"img[class*="bm-feature-icon"]"#, "features")
            .attr("src", "iconUrl"),
        ElementMapping::repeating(r#"h3[class*="bm-feature-title"]"#, "features")
            .content("title"),
        ElementMapping::repeating(r#"p[class*="bm-feature-desc"]"#, "features")
            .content("description"),
    ]
}

pub fn features_list() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-features-title"]"#).content("title"),
        ElementMapping::repeating(r#"h3[class*="bm-feature-title"]"#, "features")
            .content("title"),
        ElementMapping::repeating(r#"p[class*="bm-feature-desc"]"#, "features")
            .content("description"),
    ]
}

pub fn stats_row() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-stats-title"]"#).content("title"),
        ElementMapping::repeating(r#"p[class*="bm-stat-value"]"#, "stats").content("value"),
        ElementMapping::repeating(r#"p[class*="bm-stat-label"]"#, "stats").content("label"),
    ]
}

pub fn pricing_cards() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-pricing-title"]"#).content("title"),
        ElementMapping::repeating(r#"h3[class*="bm-plan-name"]"#, "plans").content("name"),
        ElementMapping::repeating(r#"span[class*="bm-plan-price"]"#, "plans").content("price"),
        ElementMapping::repeating(r#"span[class*="bm-plan-period"]"#, "plans").content("period"),
        ElementMapping::repeating(r#"p[class*="bm-plan-desc"]"#, "plans").content("description"),
        ElementMapping::repeating(r#"a[class*="bm-plan-btn"]"#, "plans")
            .attr("href", "buttonUrl")
            .content("buttonLabel"),
    ]
}

pub fn testimonials_cards() -> Vec<ElementMapping> {
    vec![
        ElementMapping::repeating(r#"p[class*="bm-quote-text"]"#, "testimonials")
            .content("quote"),
        ElementMapping::repeating(r#"p[class*="bm-quote-author"]"#, "testimonials")
            .content("author"),
        ElementMapping::repeating(r#"p[class*="bm-quote-role"]"#, "testimonials").content("role"),
    ]
}

pub fn gallery_grid() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-gallery-title"]"#).content("title"),
        ElementMapping::repeating(r#"a[class*="bm-gallery-link"]"#, "images")
            .attr("href", "linkUrl"),
        ElementMapping::repeating(r#"img[class*="bm-gallery-img"]"#, "images")
            .attr("src", "url")
            .attr("alt", "alt"),
    ]
}

pub fn products_row() -> Vec<ElementMapping> {
    vec![
        ElementMapping::single(r#"h2[class*="bm-products-title"]"#).content("title"),
        ElementMapping::repeating(r#"img[class*="bm-product-img"]"#, "products")
            .attr("src", "imageUrl"),
        ElementMapping::repeating(r#"h3[class*="bm-product-name"]"#, "products").content("name"),
        ElementMapping::repeating(r#"p[class*="bm-product-price"]"#, "products").content("price"),
        ElementMapping::repeating(r#"a[class*="bm-product-link"]"#, "products").attr("href", "url"),
    ]
}
