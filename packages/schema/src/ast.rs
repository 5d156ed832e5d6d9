use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Ordered, immutable list of shared nodes.
///
/// Cloning a `NodeList` clones one pointer; rebuilding a list with one
/// element swapped reuses every other element.
pub type NodeList<T> = Arc<[Arc<T>]>;

/// Collect owned or shared nodes into a [`NodeList`]
pub fn node_list<T, I>(items: I) -> NodeList<T>
where
    I: IntoIterator,
    I::Item: Into<Arc<T>>,
{
    items.into_iter().map(Into::into).collect()
}

fn empty_list<T>() -> NodeList<T> {
    Arc::from(Vec::new())
}

/// Root dashboard document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LovelaceConfig {
    #[serde(default = "empty_list")]
    pub views: NodeList<ViewConfig>,

    /// Dashboard-level keys (title, background, ...) kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single page of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Present when the view content is generated by a strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<NodeList<SectionConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<NodeList<CardConfig>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Grouping of cards inside a view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<NodeList<CardConfig>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Card payload. Only the `type` key is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(rename = "type")]
    pub card_type: String,

    #[serde(flatten)]
    pub options: Map<String, Value>,
}

pub fn is_strategy_view(view: &ViewConfig) -> bool {
    view.strategy.is_some()
}

pub fn is_strategy_section(section: &SectionConfig) -> bool {
    section.strategy.is_some()
}

impl LovelaceConfig {
    pub fn new(views: NodeList<ViewConfig>) -> Self {
        Self {
            views,
            extra: Map::new(),
        }
    }

    /// Parse a dashboard document from JSON text
    pub fn from_json(source: &str) -> SchemaResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> SchemaResult<Self> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            Value::Null => Err(SchemaError::not_an_object("null")),
            Value::Bool(_) => Err(SchemaError::not_an_object("boolean")),
            Value::Number(_) => Err(SchemaError::not_an_object("number")),
            Value::String(_) => Err(SchemaError::not_an_object("string")),
            Value::Array(_) => Err(SchemaError::not_an_object("array")),
        }
    }

    pub fn to_json(&self, pretty: bool) -> SchemaResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Same document with a different view list
    pub fn with_views(&self, views: NodeList<ViewConfig>) -> Self {
        Self {
            views,
            extra: self.extra.clone(),
        }
    }
}

impl Default for LovelaceConfig {
    fn default() -> Self {
        Self::new(empty_list())
    }
}

impl ViewConfig {
    pub fn with_cards(&self, cards: NodeList<CardConfig>) -> Self {
        Self {
            cards: Some(cards),
            ..self.clone()
        }
    }

    pub fn with_sections(&self, sections: NodeList<SectionConfig>) -> Self {
        Self {
            sections: Some(sections),
            ..self.clone()
        }
    }

    /// Non-empty `path`, the only form that takes part in uniqueness checks
    pub fn url_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|path| !path.is_empty())
    }
}

impl SectionConfig {
    pub fn with_cards(&self, cards: NodeList<CardConfig>) -> Self {
        Self {
            cards: Some(cards),
            ..self.clone()
        }
    }
}

impl CardConfig {
    pub fn new(card_type: impl Into<String>) -> Self {
        Self {
            card_type: card_type.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}
