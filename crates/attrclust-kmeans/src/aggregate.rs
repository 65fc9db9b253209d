use std::collections::HashMap;

use attrclust_core::Edge;
use serde::{Deserialize, Serialize};

use crate::model::{Cluster, ClusterId, ClusterRef};

/// Separator between the endpoints of a cluster-edge key.
pub const EDGE_KEY_SEPARATOR: &str = "---";

/// Aggregated edge between two clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEdge {
    /// Cluster of the source endpoint.
    pub source: ClusterRef,
    /// Cluster of the target endpoint.
    pub target: ClusterRef,
    /// Number of input edges mapped onto this pair.
    pub count: usize,
}

impl ClusterEdge {
    /// Composite key, e.g. `"0---1"` or `"2---undefined"`.
    pub fn key(&self) -> String {
        format!("{}{EDGE_KEY_SEPARATOR}{}", self.source, self.target)
    }
}

/// Node id to cluster lookup used to project edges.
#[derive(Debug, Clone, Default)]
pub struct ClusterIndex<'a> {
    by_id: HashMap<&'a str, ClusterId>,
}

impl<'a> ClusterIndex<'a> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cluster of `node_id`. The first record for an id wins.
    pub fn insert(&mut self, node_id: &'a str, cluster: ClusterId) {
        self.by_id.entry(node_id).or_insert(cluster);
    }

    /// Builds the index from output clusters, in origin order.
    pub fn from_clusters(clusters: &'a [Cluster]) -> Self {
        let mut members: Vec<_> = clusters.iter().flat_map(|cluster| &cluster.nodes).collect();
        members.sort_by_key(|member| member.origin_index);
        let mut index = Self::new();
        for member in members {
            index.insert(&member.node.id, member.cluster_id);
        }
        index
    }

    /// Resolves a node id; unknown ids map to [`ClusterRef::Unknown`].
    pub fn resolve(&self, node_id: &str) -> ClusterRef {
        self.by_id
            .get(node_id)
            .map_or(ClusterRef::Unknown, |cluster| ClusterRef::Cluster(*cluster))
    }

    /// Number of indexed ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no id is indexed.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Projects `edges` onto clusters and counts each distinct pair.
///
/// Output order is the order in which each pair is first seen.
pub fn aggregate_cluster_edges(edges: &[Edge], index: &ClusterIndex<'_>) -> Vec<ClusterEdge> {
    let mut cluster_edges: Vec<ClusterEdge> = Vec::new();
    let mut positions: HashMap<(ClusterRef, ClusterRef), usize> = HashMap::new();
    let mut unresolved = 0usize;

    for edge in edges {
        let source = index.resolve(&edge.source);
        let target = index.resolve(&edge.target);
        unresolved += usize::from(source == ClusterRef::Unknown);
        unresolved += usize::from(target == ClusterRef::Unknown);
        match positions.get(&(source, target)) {
            Some(&position) => cluster_edges[position].count += 1,
            None => {
                positions.insert((source, target), cluster_edges.len());
                cluster_edges.push(ClusterEdge {
                    source,
                    target,
                    count: 1,
                });
            }
        }
    }

    if unresolved > 0 {
        log::warn!("{unresolved} edge endpoints did not match any node");
    }
    cluster_edges
}
