use attrclust_core::errors::{ClusterError, ErrorInfo};
use attrclust_core::DEFAULT_PROPERTY_KEY;
use serde::{Deserialize, Serialize};

use crate::metric::DistanceType;
use crate::seed::check_cluster_count;

/// Default number of clusters.
pub const DEFAULT_K: usize = 3;

/// Default ceiling on assignment/update passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Predicate deciding when the partition loop ends (besides the ceiling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoppingRule {
    /// Stop after the first pass in which any centroid moved.
    #[default]
    FirstMove,
    /// Stop after the first pass in which no centroid moved.
    Stable,
}

/// Options controlling a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansOpts {
    /// Number of clusters.
    #[serde(default = "default_k")]
    pub k: usize,
    /// Property keys to encode; empty means every key seen.
    #[serde(default)]
    pub involved_keys: Vec<String>,
    /// Property keys never encoded.
    #[serde(default)]
    pub uninvolved_keys: Vec<String>,
    /// Name of the node bag holding the properties.
    #[serde(default = "default_property_key")]
    pub property_key: String,
    /// Distance metric between feature vectors.
    #[serde(default)]
    pub metric: DistanceType,
    /// Master seed for the first centroid draw.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Explicit origin index of the first centroid, bypassing the RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_centroid: Option<usize>,
    /// Ceiling on assignment/update passes.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Stopping predicate applied after each pass.
    #[serde(default)]
    pub stopping_rule: StoppingRule,
}

fn default_k() -> usize {
    DEFAULT_K
}

fn default_property_key() -> String {
    DEFAULT_PROPERTY_KEY.to_string()
}

fn default_seed() -> u64 {
    0x5EED_C1A5
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for KMeansOpts {
    fn default() -> Self {
        Self {
            k: default_k(),
            involved_keys: Vec::new(),
            uninvolved_keys: Vec::new(),
            property_key: default_property_key(),
            metric: DistanceType::default(),
            seed: default_seed(),
            first_centroid: None,
            max_iterations: default_max_iterations(),
            stopping_rule: StoppingRule::default(),
        }
    }
}

impl KMeansOpts {
    /// Options for `k` clusters with every other field defaulted.
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Returns a copy with the iteration ceiling clamped to at least one pass.
    pub fn sanitised(&self) -> Self {
        Self {
            max_iterations: self.max_iterations.max(1),
            ..self.clone()
        }
    }

    /// Checks the options against a graph with `nodes` nodes.
    pub fn validate(&self, nodes: usize) -> Result<(), ClusterError> {
        check_cluster_count(self.k, nodes)?;
        if let Some(first) = self.first_centroid {
            check_first_centroid(first, nodes)?;
        }
        Ok(())
    }

    /// Parses options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ClusterError> {
        serde_json::from_str(json).map_err(|err| parse_error("json", err.to_string()))
    }

    /// Parses options from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ClusterError> {
        serde_yaml::from_str(yaml).map_err(|err| parse_error("yaml", err.to_string()))
    }
}

pub(crate) fn check_first_centroid(first: usize, nodes: usize) -> Result<(), ClusterError> {
    if first >= nodes {
        return Err(ClusterError::Input(
            ErrorInfo::new(
                "invalid-seed-index",
                "first centroid index is outside the node range",
            )
            .with_context("index", first.to_string())
            .with_context("nodes", nodes.to_string())
            .with_hint("pick an origin index below the node count"),
        ));
    }
    Ok(())
}

fn parse_error(format: &str, message: String) -> ClusterError {
    ClusterError::Config(ErrorInfo::new("config-parse", message).with_context("format", format))
}
