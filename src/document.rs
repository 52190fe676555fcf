use crate::blocks::SemanticBlock;
use crate::error::BlockmailResult;
use crate::settings::GlobalEmailSettings;
use serde::{Deserialize, Serialize};

/// A complete renderable email: settings plus an ordered block list.
///
/// This is the wire format the content pipeline hands over and the format
/// the CLI accepts from disk (JSON or YAML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDocument {
    pub settings: GlobalEmailSettings,
    /// Hidden preheader text shown in inbox previews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    pub blocks: Vec<SemanticBlock>,
}

impl EmailDocument {
    pub fn from_json(input: &str) -> BlockmailResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_yaml(input: &str) -> BlockmailResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_from_json() {
        let json = r##"{
            "settings": {"fontFamily": "Inter", "primaryColor": "#ff0000", "maxWidth": 600},
            "previewText": "Hello",
            "blocks": [{"blockType": "text", "body": "Hi there"}]
        }"##;
        let doc = EmailDocument::from_json(json).unwrap();
        assert_eq!(doc.settings.font_family, "Inter");
        assert_eq!(doc.preview_text.as_deref(), Some("Hello"));
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_document_from_yaml() {
        let yaml = "
settings:
  fontFamily: Inter
  primaryColor: '#ff0000'
  maxWidth: 600
blocks:
  - blockType: footer
    companyName: Acme
";
        let doc = EmailDocument::from_yaml(yaml).unwrap();
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.preview_text.is_none());
    }

    #[test]
    fn test_malformed_document_is_error() {
        assert!(EmailDocument::from_json("{").is_err());
    }
}
