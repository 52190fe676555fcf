//! # blockmail — semantic block → HTML email renderer
//!
//! Transforms typed content blocks into finished HTML email fragments by
//! splicing data into hand-authored, table-based templates. Templates are
//! never parsed into a DOM: elements are located by string scanning with
//! explicit tag-depth tracking, rewritten, and spliced back in place.
//!
//! ## Example
//! ```ignore
//! use blockmail::{render_email, GlobalEmailSettings, SemanticBlock};
//!
//! let blocks: Vec<SemanticBlock> = serde_json::from_str(r#"[
//!   {"blockType": "hero", "title": "Welcome aboard"},
//!   {"blockType": "footer", "companyName": "Acme"}
//! ]"#)?;
//!
//! let settings = GlobalEmailSettings::default();
//! let html = render_email(&blocks, &settings, Some("Welcome!"));
//! ```
//!
//! Failures degrade rather than propagate: a block with no template is
//! omitted, an unresolvable data path skips that one update, and a
//! selector with no match is a logged no-op. The engine is synchronous,
//! CPU-bound, and free of shared mutable state.

pub mod blocks;
pub mod document;
pub mod error;
pub mod locator;
pub mod mapping;
pub mod mappings;
pub mod mutator;
pub mod render;
pub mod selector;
pub mod settings;
pub mod templates;
pub mod theme;

// --- Core types ---
pub use blocks::{BlockType, SemanticBlock};
pub use document::EmailDocument;
pub use error::{BlockmailError, BlockmailResult};
pub use locator::ElementMatch;
pub use mapping::{ElementMapping, MappingKind, ValueSource};
pub use settings::GlobalEmailSettings;
pub use templates::{BuiltinTemplates, DirTemplates, StaticTemplates, TemplateSource};

/// Render one block against the builtin template set.
///
/// `None` means no template exists for the block's resolved variant; the
/// block should be omitted. Use [`render::render_block`] to supply a
/// custom [`TemplateSource`].
pub fn render_block(block: &SemanticBlock, settings: &GlobalEmailSettings) -> Option<String> {
    render::render_block(block, settings, &BuiltinTemplates)
}

/// Render a block list into a complete email document against the builtin
/// template set, with an optional hidden preheader.
pub fn render_email(
    blocks: &[SemanticBlock],
    settings: &GlobalEmailSettings,
    preview_text: Option<&str>,
) -> String {
    render::render_email(blocks, settings, preview_text, &BuiltinTemplates)
}

/// Render a parsed [`EmailDocument`] against the builtin template set.
pub fn render_document(document: &EmailDocument) -> String {
    render::render_email(
        &document.blocks,
        &document.settings,
        document.preview_text.as_deref(),
        &BuiltinTemplates,
    )
}
