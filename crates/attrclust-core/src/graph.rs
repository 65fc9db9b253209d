//! Attributed graph data model consumed by the clustering engine.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the property bag used when the caller does not pick another one.
pub const DEFAULT_PROPERTY_KEY: &str = "properties";

/// Scalar value stored in a node property bag.
///
/// Serialized untagged so that JSON input reads naturally
/// (`{"city": "Lyon", "age": 31, "active": true}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Free text or categorical label.
    Text(String),
}

impl PropertyValue {
    /// Returns the numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Empty strings carry no information and are skipped by feature encoding.
    pub fn is_blank(&self) -> bool {
        matches!(self, PropertyValue::Text(text) if text.is_empty())
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Number(value) => write!(f, "{value}"),
            PropertyValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// Insertion-ordered key/value mapping attached to a node.
pub type PropertyBag = IndexMap<String, PropertyValue>;

/// Graph node with its property bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Caller supplied identifier, referenced by [`Edge`] endpoints.
    pub id: String,
    /// Default property bag.
    #[serde(default)]
    pub properties: PropertyBag,
    /// Additional named bags selectable through the property key option.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, PropertyBag>,
}

impl Node {
    /// Creates a node without properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: PropertyBag::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an entry to the default property bag.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Installs a named bag; `"properties"` replaces the default bag.
    pub fn with_bag(mut self, field: impl Into<String>, bag: PropertyBag) -> Self {
        let field = field.into();
        if field == DEFAULT_PROPERTY_KEY {
            self.properties = bag;
        } else {
            self.attributes.insert(field, bag);
        }
        self
    }

    /// Returns the bag stored under `field`, if any.
    pub fn bag(&self, field: &str) -> Option<&PropertyBag> {
        if field == DEFAULT_PROPERTY_KEY {
            Some(&self.properties)
        } else {
            self.attributes.get(field)
        }
    }
}

/// Directed edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the source node.
    pub source: String,
    /// Identifier of the target node.
    pub target: String,
}

impl Edge {
    /// Creates an edge between two node identifiers.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Ordered node and edge sequences handed to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphData {
    /// Nodes in input order; positions become origin indices.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in input order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphData {
    /// Creates a graph from its parts.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
