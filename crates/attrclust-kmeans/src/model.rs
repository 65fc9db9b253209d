use std::fmt::{self, Display};

use attrclust_core::errors::{ClusterError, ErrorInfo};
use attrclust_core::Node;
use serde::{Deserialize, Serialize};

use crate::aggregate::ClusterEdge;
use crate::partition::StopReason;

/// Literal used for edge endpoints that do not resolve to any node.
pub const UNKNOWN_CLUSTER: &str = "undefined";

/// Identifier of a cluster, `0..k`. Serialized as its decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClusterId(usize);

impl ClusterId {
    /// Creates an identifier from its index.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index into the cluster list.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ClusterId> for String {
    fn from(value: ClusterId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ClusterId {
    type Error = ClusterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<usize>().map(ClusterId).map_err(|err| {
            ClusterError::Serde(
                ErrorInfo::new("invalid-cluster-id", err.to_string()).with_context("value", value),
            )
        })
    }
}

/// Endpoint of a cluster edge: a known cluster or the unknown sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ClusterRef {
    /// Endpoint resolved to a node in this cluster.
    Cluster(ClusterId),
    /// Endpoint id matched no node.
    Unknown,
}

impl ClusterRef {
    /// Returns the cluster id, if resolved.
    pub fn cluster(&self) -> Option<ClusterId> {
        match self {
            ClusterRef::Cluster(id) => Some(*id),
            ClusterRef::Unknown => None,
        }
    }
}

impl Display for ClusterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterRef::Cluster(id) => write!(f, "{id}"),
            ClusterRef::Unknown => f.write_str(UNKNOWN_CLUSTER),
        }
    }
}

impl From<ClusterRef> for String {
    fn from(value: ClusterRef) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ClusterRef {
    type Error = ClusterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == UNKNOWN_CLUSTER {
            Ok(ClusterRef::Unknown)
        } else {
            ClusterId::try_from(value).map(ClusterRef::Cluster)
        }
    }
}

impl From<ClusterId> for ClusterRef {
    fn from(value: ClusterId) -> Self {
        ClusterRef::Cluster(value)
    }
}

/// Node record as reported in the output, annotated with its placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredNode {
    /// The caller's node.
    #[serde(flatten)]
    pub node: Node,
    /// Position of the node in the input sequence.
    pub origin_index: usize,
    /// Cluster holding the node at the end of the run.
    pub cluster_id: ClusterId,
}

/// One output cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Identifier, equal to the cluster's position in [`ClusterData::clusters`].
    pub id: ClusterId,
    /// Members in membership order (seed first, then arrival order).
    pub nodes: Vec<ClusteredNode>,
}

impl Cluster {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the cluster ended the run without members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifiers of the members.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|member| member.node.id.as_str()).collect()
    }
}

/// Result of a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterData {
    /// Exactly `k` clusters, indexed by cluster id.
    pub clusters: Vec<Cluster>,
    /// Coarsened edges between clusters, in first-seen order.
    pub cluster_edges: Vec<ClusterEdge>,
    /// Number of assignment/update passes executed.
    pub iterations: usize,
    /// Why the partition loop stopped.
    pub stop_reason: StopReason,
}

impl ClusterData {
    /// Looks up the cluster holding `node_id`.
    pub fn cluster_of(&self, node_id: &str) -> Option<ClusterId> {
        self.clusters
            .iter()
            .flat_map(|cluster| cluster.nodes.iter())
            .filter(|member| member.node.id == node_id)
            .min_by_key(|member| member.origin_index)
            .map(|member| member.cluster_id)
    }

    /// Sum of all cluster-edge multiplicities.
    pub fn total_edge_count(&self) -> usize {
        self.cluster_edges.iter().map(|edge| edge.count).sum()
    }

    /// Number of clustered nodes across all clusters.
    pub fn node_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }
}
