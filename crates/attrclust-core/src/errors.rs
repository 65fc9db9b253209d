//! Structured error types shared across attrclust crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ClusterError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (counts, dimensions, indices).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the clustering engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ClusterError {
    /// Invalid graph or cluster-count input.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Shape violations at the vector operation boundary.
    #[error("vector error: {0}")]
    Vector(ErrorInfo),
    /// Option parsing errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ClusterError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ClusterError::Input(info)
            | ClusterError::Vector(info)
            | ClusterError::Config(info)
            | ClusterError::Serde(info) => info,
        }
    }

    /// Error raised when clustering is requested over zero nodes.
    pub fn empty_graph() -> Self {
        ClusterError::Input(
            ErrorInfo::new("empty-graph", "clustering requires at least one node")
                .with_hint("supply a graph with at least one node"),
        )
    }

    /// Error raised when `k` is zero or exceeds the node count.
    pub fn invalid_cluster_count(k: usize, nodes: usize) -> Self {
        ClusterError::Input(
            ErrorInfo::new(
                "invalid-cluster-count",
                "cluster count must lie in 1..=node count",
            )
            .with_context("k", k.to_string())
            .with_context("nodes", nodes.to_string())
            .with_hint("use 1..=node count"),
        )
    }

    /// Error raised when two vectors of different non-zero lengths meet.
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        ClusterError::Vector(
            ErrorInfo::new("dimension-mismatch", "vector dimensions differ")
                .with_context("left", left.to_string())
                .with_context("right", right.to_string())
                .with_hint("encode every vector over the same property vocabulary"),
        )
    }
}
