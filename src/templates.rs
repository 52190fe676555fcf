use crate::blocks::BlockType;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Where raw template HTML comes from. Content is opaque to the engine;
/// `None` is the one hard failure the orchestrator surfaces to callers.
pub trait TemplateSource {
    fn load(&self, block_type: BlockType, variant: &str) -> Option<String>;
}

/// Compile-time registry of the curated template set shipped with the crate.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("header", "default", include_str!("../templates/header-default.html")),
    ("header", "centered", include_str!("../templates/header-centered.html")),
    ("hero", "centered", include_str!("../templates/hero-centered.html")),
    ("hero", "split", include_str!("../templates/hero-split.html")),
    ("text", "default", include_str!("../templates/text-default.html")),
    ("image", "default", include_str!("../templates/image-default.html")),
    ("button", "default", include_str!("../templates/button-default.html")),
    ("cta", "banner", include_str!("../templates/cta-banner.html")),
    ("features", "grid", include_str!("../templates/features-grid.html")),
    ("features", "list", include_str!("../templates/features-list.html")),
    ("stats", "row", include_str!("../templates/stats-row.html")),
    ("pricing", "cards", include_str!("../templates/pricing-cards.html")),
    ("testimonials", "cards", include_str!("../templates/testimonials-cards.html")),
    ("gallery", "grid", include_str!("../templates/gallery-grid.html")),
    ("products", "row", include_str!("../templates/products-row.html")),
    ("logos", "row", include_str!("../templates/logos-row.html")),
    ("social", "row", include_str!("../templates/social-row.html")),
    ("list", "numbered", include_str!("../templates/list-numbered.html")),
    ("list", "bulleted", include_str!("../templates/list-bulleted.html")),
    ("quote", "default", include_str!("../templates/quote-default.html")),
    ("video", "default", include_str!("../templates/video-default.html")),
    ("divider", "default", include_str!("../templates/divider-default.html")),
    ("spacer", "default", include_str!("../templates/spacer-default.html")),
    ("footer", "default", include_str!("../templates/footer-default.html")),
    ("footer", "minimal", include_str!("../templates/footer-minimal.html")),
];

/// The embedded template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateSource for BuiltinTemplates {
    fn load(&self, block_type: BlockType, variant: &str) -> Option<String> {
        BUILTIN
            .iter()
            .find(|(t, v, _)| *t == block_type.as_str() && *v == variant)
            .map(|(_, _, html)| html.to_string())
    }
}

/// Filesystem source reading `<root>/<type>-<variant>.html`, for
/// deployments that override the builtin set. I/O failures degrade to
/// `None` with a warning, exactly like an unknown key.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirTemplates { root: root.into() }
    }
}

impl TemplateSource for DirTemplates {
    fn load(&self, block_type: BlockType, variant: &str) -> Option<String> {
        let path = self
            .root
            .join(format!("{}-{}.html", block_type.as_str(), variant));
        match fs::read_to_string(&path) {
            Ok(html) => Some(html),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "template load failed");
                None
            }
        }
    }
}

/// In-memory source, for tests and embedders with generated template sets.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates {
    entries: HashMap<(String, String), String>,
}

impl StaticTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, block_type: BlockType, variant: &str, html: &str) {
        self.entries.insert(
            (block_type.as_str().to_string(), variant.to_string()),
            html.to_string(),
        );
    }
}

impl TemplateSource for StaticTemplates {
    fn load(&self, block_type: BlockType, variant: &str) -> Option<String> {
        self.entries
            .get(&(block_type.as_str().to_string(), variant.to_string()))
            .cloned()
    }
}
