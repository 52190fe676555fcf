//! Static mapping tables binding template selectors to block data paths.
//!
//! Authored once per (block type, variant) against the curated template
//! set; not runtime-editable. Declaration order matters: mappings are
//! applied in order against the evolving buffer.

mod collections;
mod content;
mod structure;

use crate::blocks::BlockType;
use crate::mapping::ElementMapping;

/// Look up the mapping list for a (block type, variant) pair.
///
/// `None` means the template (if any) is rendered verbatim; an empty list
/// means "no substitutions, but run the theme overlay".
pub fn mappings_for(block_type: BlockType, variant: &str) -> Option<Vec<ElementMapping>> {
    match (block_type, variant) {
        (BlockType::Header, "default") => Some(structure::header_default()),
        (BlockType::Header, "centered") => Some(structure::header_centered()),
        (BlockType::Hero, "centered") => Some(content::hero()),
        (BlockType::Hero, "split") => Some(content::hero()),
        (BlockType::Text, "default") => Some(content::text()),
        (BlockType::Image, "default") => Some(content::image()),
        (BlockType::Button, "default") => Some(content::button()),
        (BlockType::Cta, "banner") => Some(content::cta()),
        (BlockType::Features, "grid") => Some(collections::features_grid()),
        (BlockType::Features, "list") => Some(collections::features_list()),
        (BlockType::Stats, "row") => Some(collections::stats_row()),
        (BlockType::Pricing, "cards") => Some(collections::pricing_cards()),
        (BlockType::Testimonials, "cards") => Some(collections::testimonials_cards()),
        (BlockType::Gallery, "grid") => Some(collections::gallery_grid()),
        (BlockType::Products, "row") => Some(collections::products_row()),
        (BlockType::Logos, "row") => Some(structure::logos_row()),
        (BlockType::Social, "row") => Some(structure::social_row()),
        (BlockType::List, "numbered") => Some(content::list_numbered()),
        (BlockType::List, "bulleted") => Some(content::list_bulleted()),
        (BlockType::Quote, "default") => Some(content::quote()),
        (BlockType::Video, "default") => Some(content::video()),
        (BlockType::Divider, "default") => Some(Vec::new()),
        (BlockType::Spacer, "default") => Some(structure::spacer_default()),
        (BlockType::Footer, "default") => Some(structure::footer_default()),
        (BlockType::Footer, "minimal") => Some(structure::footer_minimal()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_has_no_mappings() {
        assert!(mappings_for(BlockType::Hero, "diagonal").is_none());
    }

    #[test]
    fn test_divider_has_empty_mapping_list() {
        let mappings = mappings_for(BlockType::Divider, "default").unwrap();
        assert!(mappings.is_empty());
    }

    #[test]
    fn test_hero_variants_share_one_table() {
        assert_eq!(
            mappings_for(BlockType::Hero, "centered"),
            mappings_for(BlockType::Hero, "split")
        );
    }
}
