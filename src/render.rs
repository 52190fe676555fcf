use crate::blocks::{BlockType, SemanticBlock};
use crate::mappings::mappings_for;
use crate::mutator::{apply_mapping, escape_html};
use crate::settings::GlobalEmailSettings;
use crate::templates::TemplateSource;
use crate::theme::apply_theme;
use tracing::{debug, warn};

const DEFAULT_CANVAS_COLOR: &str = "#f4f4f5";

/// Template and mapping lookup keys for one block. The two can differ:
/// aliased block types funnel several external names onto one pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedVariant {
    pub template: String,
    pub mapping: String,
}

/// Resolve which template/mapping pair a block renders with.
///
/// Order: block-type aliasing first (CTA's three `style` values all share
/// the `banner` pair — a documented exception, not inferred), then the
/// block's explicit `variant`, then the per-type default table.
pub(crate) fn resolve_variant(block: &SemanticBlock) -> ResolvedVariant {
    if let SemanticBlock::Cta(_) = block {
        return ResolvedVariant {
            template: "banner".to_string(),
            mapping: "banner".to_string(),
        };
    }
    let variant = block
        .variant()
        .unwrap_or_else(|| default_variant(block.block_type()));
    ResolvedVariant {
        template: variant.to_string(),
        mapping: variant.to_string(),
    }
}

fn default_variant(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Header => "default",
        BlockType::Hero => "centered",
        BlockType::Text => "default",
        BlockType::Image => "default",
        BlockType::Button => "default",
        BlockType::Cta => "banner",
        BlockType::Features => "grid",
        BlockType::Stats => "row",
        BlockType::Pricing => "cards",
        BlockType::Testimonials => "cards",
        BlockType::Gallery => "grid",
        BlockType::Products => "row",
        BlockType::Logos => "row",
        BlockType::Social => "row",
        BlockType::List => "bulleted",
        BlockType::Quote => "default",
        BlockType::Video => "default",
        BlockType::Divider => "default",
        BlockType::Spacer => "default",
        BlockType::Footer => "default",
    }
}

/// Render one block to an HTML fragment.
///
/// Returns `None` only when no template exists for the resolved variant —
/// the caller omits the block. Every other failure degrades to less
/// substituted content inside the fragment.
pub fn render_block(
    block: &SemanticBlock,
    settings: &GlobalEmailSettings,
    templates: &dyn TemplateSource,
) -> Option<String> {
    let block_type = block.block_type();
    let resolved = resolve_variant(block);

    let Some(template) = templates.load(block_type, &resolved.template) else {
        warn!(%block_type, variant = %resolved.template, "no template for variant, block skipped");
        return None;
    };

    let Some(mappings) = mappings_for(block_type, &resolved.mapping) else {
        debug!(%block_type, variant = %resolved.mapping, "no mapping table, template returned verbatim");
        return Some(template);
    };

    let Ok(data) = serde_json::to_value(block) else {
        warn!(%block_type, "block not serializable, template returned verbatim");
        return Some(template);
    };

    let mut html = template;
    for mapping in &mappings {
        html = apply_mapping(&html, mapping, &data);
    }

    Some(apply_theme(&html, settings))
}

/// Render a block list into a complete email document.
///
/// Blocks that fail to render are dropped with a warning; survivors are
/// concatenated in block order and wrapped in the document shell.
pub fn render_email(
    blocks: &[SemanticBlock],
    settings: &GlobalEmailSettings,
    preview_text: Option<&str>,
    templates: &dyn TemplateSource,
) -> String {
    let mut fragments = Vec::with_capacity(blocks.len());
    for (position, block) in blocks.iter().enumerate() {
        match render_block(block, settings, templates) {
            Some(fragment) => fragments.push(fragment),
            None => warn!(position, block_type = %block.block_type(), "block omitted from document"),
        }
    }
    document_shell(&fragments.join("\n"), settings, preview_text)
}

/// Fixed document shell: head boilerplate, optional hidden preheader, and
/// a centered max-width column on the canvas color.
fn document_shell(
    body: &str,
    settings: &GlobalEmailSettings,
    preview_text: Option<&str>,
) -> String {
    let canvas = settings
        .background_color
        .as_deref()
        .unwrap_or(DEFAULT_CANVAS_COLOR);
    let preheader = match preview_text {
        Some(text) => format!(
            "<div style=\"display: none; max-height: 0px; overflow: hidden; mso-hide: all;\">{}&nbsp;&zwnj;&nbsp;&zwnj;&nbsp;&zwnj;</div>\n",
            escape_html(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<meta http-equiv="X-UA-Compatible" content="IE=edge" />
<meta name="x-apple-disable-message-reformatting" />
<!--[if mso]>
<noscript><xml><o:OfficeDocumentSettings><o:PixelsPerInch>96</o:PixelsPerInch></o:OfficeDocumentSettings></xml></noscript>
<![endif]-->
<style>
  body, table, td {{ margin: 0; padding: 0; }}
  img {{ border: 0; line-height: 100%; }}
  table {{ border-collapse: collapse; }}
</style>
</head>
<body style="margin: 0; padding: 0; background-color: {canvas};">
{preheader}<center>
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background-color: {canvas};">
  <tr>
    <td align="center" style="padding: 24px 12px; background-color: {canvas};">
      <table role="presentation" width="{width}" cellpadding="0" cellspacing="0" border="0" style="width: 100%; max-width: {width}px;">
        <tr>
          <td>
{body}
          </td>
        </tr>
      </table>
    </td>
  </tr>
</table>
</center>
</body>
</html>
"#,
        canvas = canvas,
        preheader = preheader,
        width = settings.max_width,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{CtaBlock, CtaStyle, HeroBlock, TextBlock};
    use pretty_assertions::assert_eq;

    fn hero(variant: Option<&str>) -> SemanticBlock {
        SemanticBlock::Hero(HeroBlock {
            title: "T".to_string(),
            subtitle: None,
            image_url: None,
            image_alt: None,
            button_label: None,
            button_url: None,
            variant: variant.map(str::to_string),
        })
    }

    #[test]
    fn test_default_variant_used_when_unset() {
        let resolved = resolve_variant(&hero(None));
        assert_eq!(resolved.template, "centered");
        assert_eq!(resolved.mapping, "centered");
    }

    #[test]
    fn test_explicit_variant_wins() {
        let resolved = resolve_variant(&hero(Some("split")));
        assert_eq!(resolved.template, "split");
    }

    #[test]
    fn test_cta_styles_alias_to_one_pair() {
        for style in [CtaStyle::Banner, CtaStyle::Boxed, CtaStyle::Inline] {
            let block = SemanticBlock::Cta(CtaBlock {
                title: "T".to_string(),
                button_label: "Go".to_string(),
                button_url: "https://x.test".to_string(),
                body: None,
                style: Some(style),
            });
            let resolved = resolve_variant(&block);
            assert_eq!(resolved.template, "banner");
            assert_eq!(resolved.mapping, "banner");
        }
    }

    #[test]
    fn test_text_block_default_variant() {
        let block = SemanticBlock::Text(TextBlock {
            body: "Hello".to_string(),
            variant: None,
        });
        assert_eq!(resolve_variant(&block).template, "default");
    }
}
