use attrclust_core::errors::{ClusterError, ErrorInfo};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::ClusterData;

fn hash_json<T: Serialize>(value: &T) -> Result<String, ClusterError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-256 fingerprint of a clustering result.
pub fn canonical_hash(data: &ClusterData) -> Result<String, ClusterError> {
    hash_json(data)
}

/// SHA-256 fingerprint of the node to cluster assignment alone, ignoring
/// node properties and cluster edges.
pub fn assignment_hash(data: &ClusterData) -> Result<String, ClusterError> {
    #[derive(Serialize)]
    struct Assignment<'a> {
        node: &'a str,
        origin_index: usize,
        cluster: String,
    }

    let mut assignments: Vec<Assignment<'_>> = data
        .clusters
        .iter()
        .flat_map(|cluster| &cluster.nodes)
        .map(|member| Assignment {
            node: &member.node.id,
            origin_index: member.origin_index,
            cluster: member.cluster_id.to_string(),
        })
        .collect();
    assignments.sort_by_key(|entry| entry.origin_index);
    hash_json(&assignments)
}
