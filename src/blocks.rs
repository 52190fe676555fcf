use serde::{Deserialize, Serialize};

/// One semantic content unit, discriminated by `blockType`.
///
/// Blocks arrive fully validated from the content pipeline and are
/// read-only inside the engine. The discriminant selects the applicable
/// template and mapping set; everything downstream of the orchestrator
/// treats the block as a generic path-addressable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType", rename_all = "camelCase")]
pub enum SemanticBlock {
    Header(HeaderBlock),
    Hero(HeroBlock),
    Text(TextBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Cta(CtaBlock),
    Features(FeaturesBlock),
    Stats(StatsBlock),
    Pricing(PricingBlock),
    Testimonials(TestimonialsBlock),
    Gallery(GalleryBlock),
    Products(ProductsBlock),
    Logos(LogosBlock),
    Social(SocialBlock),
    List(ListBlock),
    Quote(QuoteBlock),
    Video(VideoBlock),
    Divider(DividerBlock),
    Spacer(SpacerBlock),
    Footer(FooterBlock),
}

/// Block type discriminant, used as the template/mapping registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Header,
    Hero,
    Text,
    Image,
    Button,
    Cta,
    Features,
    Stats,
    Pricing,
    Testimonials,
    Gallery,
    Products,
    Logos,
    Social,
    List,
    Quote,
    Video,
    Divider,
    Spacer,
    Footer,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Cta => "cta",
            BlockType::Features => "features",
            BlockType::Stats => "stats",
            BlockType::Pricing => "pricing",
            BlockType::Testimonials => "testimonials",
            BlockType::Gallery => "gallery",
            BlockType::Products => "products",
            BlockType::Logos => "logos",
            BlockType::Social => "social",
            BlockType::List => "list",
            BlockType::Quote => "quote",
            BlockType::Video => "video",
            BlockType::Divider => "divider",
            BlockType::Spacer => "spacer",
            BlockType::Footer => "footer",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SemanticBlock {
    pub fn block_type(&self) -> BlockType {
        match self {
            SemanticBlock::Header(_) => BlockType::Header,
            SemanticBlock::Hero(_) => BlockType::Hero,
            SemanticBlock::Text(_) => BlockType::Text,
            SemanticBlock::Image(_) => BlockType::Image,
            SemanticBlock::Button(_) => BlockType::Button,
            SemanticBlock::Cta(_) => BlockType::Cta,
            SemanticBlock::Features(_) => BlockType::Features,
            SemanticBlock::Stats(_) => BlockType::Stats,
            SemanticBlock::Pricing(_) => BlockType::Pricing,
            SemanticBlock::Testimonials(_) => BlockType::Testimonials,
            SemanticBlock::Gallery(_) => BlockType::Gallery,
            SemanticBlock::Products(_) => BlockType::Products,
            SemanticBlock::Logos(_) => BlockType::Logos,
            SemanticBlock::Social(_) => BlockType::Social,
            SemanticBlock::List(_) => BlockType::List,
            SemanticBlock::Quote(_) => BlockType::Quote,
            SemanticBlock::Video(_) => BlockType::Video,
            SemanticBlock::Divider(_) => BlockType::Divider,
            SemanticBlock::Spacer(_) => BlockType::Spacer,
            SemanticBlock::Footer(_) => BlockType::Footer,
        }
    }

    /// Explicit layout variant, when the block carries one.
    pub fn variant(&self) -> Option<&str> {
        match self {
            SemanticBlock::Header(b) => b.variant.as_deref(),
            SemanticBlock::Hero(b) => b.variant.as_deref(),
            SemanticBlock::Text(b) => b.variant.as_deref(),
            SemanticBlock::Image(b) => b.variant.as_deref(),
            SemanticBlock::Button(b) => b.variant.as_deref(),
            SemanticBlock::Cta(_) => None, // cta layouts come from `style`, see resolve_variant
            SemanticBlock::Features(b) => b.variant.as_deref(),
            SemanticBlock::Stats(b) => b.variant.as_deref(),
            SemanticBlock::Pricing(b) => b.variant.as_deref(),
            SemanticBlock::Testimonials(b) => b.variant.as_deref(),
            SemanticBlock::Gallery(b) => b.variant.as_deref(),
            SemanticBlock::Products(b) => b.variant.as_deref(),
            SemanticBlock::Logos(b) => b.variant.as_deref(),
            SemanticBlock::Social(b) => b.variant.as_deref(),
            SemanticBlock::List(b) => b.variant.as_deref(),
            SemanticBlock::Quote(b) => b.variant.as_deref(),
            SemanticBlock::Video(b) => b.variant.as_deref(),
            SemanticBlock::Divider(b) => b.variant.as_deref(),
            SemanticBlock::Spacer(b) => b.variant.as_deref(),
            SemanticBlock::Footer(b) => b.variant.as_deref(),
        }
    }
}

/// Header block - logo and company name at the top of the email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Hero block - headline section with optional image and button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Text block - a paragraph of body copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Image block - full-width image with optional caption and link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Button block - standalone call-to-action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBlock {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// CTA block - emphasized call-to-action section
///
/// Carries a `style` instead of a `variant`; all three styles share one
/// template/mapping pair (see `render::resolve_variant`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    pub title: String,
    pub button_label: String,
    pub button_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CtaStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    Banner,
    Boxed,
    Inline,
}

/// Features block - grid or list of product features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesBlock {
    pub features: Vec<FeatureItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Stats block - row of headline numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    pub stats: Vec<StatItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

/// Pricing block - side-by-side plan cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBlock {
    pub plans: Vec<PricingPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

/// Testimonials block - customer quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsBlock {
    pub testimonials: Vec<Testimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Gallery block - grid of images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryBlock {
    pub images: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// Products block - featured products with price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsBlock {
    pub products: Vec<ProductItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Logos block - partner/client logo strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogosBlock {
    pub logos: Vec<LogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoItem {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Social block - social network links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialBlock {
    pub links: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub network: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// List block - numbered or bulleted list of short items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    pub items: Vec<ListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
}

/// Quote block - a single pull quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBlock {
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Video block - thumbnail linking out to a hosted video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    pub thumbnail_url: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Divider block - horizontal rule between sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Spacer block - fixed vertical whitespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Footer block - company details and unsubscribe links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterBlock {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_type_discriminant() {
        let block = SemanticBlock::Footer(FooterBlock {
            company_name: "Acme".to_string(),
            address: None,
            unsubscribe_url: None,
            preferences_url: None,
            legal_text: None,
            variant: None,
        });
        assert_eq!(block.block_type(), BlockType::Footer);
        assert_eq!(block.block_type().as_str(), "footer");
    }

    #[test]
    fn test_deserialize_tagged_block() {
        let json = r#"{"blockType": "hero", "title": "Welcome", "subtitle": "Hi"}"#;
        let block: SemanticBlock = serde_json::from_str(json).unwrap();
        match block {
            SemanticBlock::Hero(hero) => {
                assert_eq!(hero.title, "Welcome");
                assert_eq!(hero.subtitle.as_deref(), Some("Hi"));
            }
            other => panic!("Expected hero block, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_block_type_rejected() {
        let json = r#"{"blockType": "carousel", "title": "Nope"}"#;
        let result: Result<SemanticBlock, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_variant_exposed() {
        let block = SemanticBlock::Hero(HeroBlock {
            title: "T".to_string(),
            subtitle: None,
            image_url: None,
            image_alt: None,
            button_label: None,
            button_url: None,
            variant: Some("split".to_string()),
        });
        assert_eq!(block.variant(), Some("split"));
    }
}
