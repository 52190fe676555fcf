use serde_json::Value;

/// Where an injected value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    /// Dot-separated accessor into the block's data. Resolving to nothing
    /// silently skips the update — optional template slots are tolerated.
    Path(String),
    /// A fixed string. Explicit sentinel, never path-resolved.
    Literal(String),
    /// The 1-based position of the current item. Repeating mappings only;
    /// used for numbered-list ordinals.
    Index,
}

/// One attribute to rewrite on the matched element.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRule {
    pub attribute: String,
    pub value: ValueSource,
}

/// Per-item updates applied to each clone of a repeating slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemMapping {
    pub attributes: Vec<AttributeRule>,
    pub content: Option<ValueSource>,
}

/// The two mapping shapes. A repeating mapping always carries an array
/// path and item updates; the enum makes that unrepresentable otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingKind {
    Single {
        attributes: Vec<AttributeRule>,
        content: Option<ValueSource>,
    },
    Repeating {
        array_path: String,
        item: ItemMapping,
    },
}

/// A declarative rule binding one template selector to block data.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMapping {
    pub selector: String,
    pub kind: MappingKind,
}

impl ElementMapping {
    pub fn single(selector: &str) -> Self {
        ElementMapping {
            selector: selector.to_string(),
            kind: MappingKind::Single {
                attributes: Vec::new(),
                content: None,
            },
        }
    }

    pub fn repeating(selector: &str, array_path: &str) -> Self {
        ElementMapping {
            selector: selector.to_string(),
            kind: MappingKind::Repeating {
                array_path: array_path.to_string(),
                item: ItemMapping::default(),
            },
        }
    }

    /// Bind an attribute to a data path. On repeating mappings the path is
    /// relative to the array item.
    pub fn attr(mut self, attribute: &str, path: &str) -> Self {
        self.push_attr(AttributeRule {
            attribute: attribute.to_string(),
            value: ValueSource::Path(path.to_string()),
        });
        self
    }

    /// Bind an attribute to a fixed literal string.
    pub fn attr_literal(mut self, attribute: &str, value: &str) -> Self {
        self.push_attr(AttributeRule {
            attribute: attribute.to_string(),
            value: ValueSource::Literal(value.to_string()),
        });
        self
    }

    /// Bind the element's text content to a data path.
    pub fn content(mut self, path: &str) -> Self {
        self.set_content(ValueSource::Path(path.to_string()));
        self
    }

    /// Bind the element's text content to a fixed literal string.
    pub fn content_literal(mut self, value: &str) -> Self {
        self.set_content(ValueSource::Literal(value.to_string()));
        self
    }

    /// Bind the element's text content to the item ordinal (1-based).
    pub fn content_index(mut self) -> Self {
        self.set_content(ValueSource::Index);
        self
    }

    fn push_attr(&mut self, rule: AttributeRule) {
        match &mut self.kind {
            MappingKind::Single { attributes, .. } => attributes.push(rule),
            MappingKind::Repeating { item, .. } => item.attributes.push(rule),
        }
    }

    fn set_content(&mut self, source: ValueSource) {
        match &mut self.kind {
            MappingKind::Single { content, .. } => *content = Some(source),
            MappingKind::Repeating { item, .. } => item.content = Some(source),
        }
    }
}

impl ValueSource {
    /// Resolve to the string that will be injected. `None` means the update
    /// is skipped. `index` is the array position for repeating items.
    pub fn resolve(&self, data: &Value, index: Option<usize>) -> Option<String> {
        match self {
            ValueSource::Path(path) => resolve_path(data, path).and_then(value_to_string),
            ValueSource::Literal(value) => Some(value.clone()),
            ValueSource::Index => index.map(|i| (i + 1).to_string()),
        }
    }
}

/// Walk a dot-separated path through a JSON value. Array segments accept
/// numeric indices.
pub fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
