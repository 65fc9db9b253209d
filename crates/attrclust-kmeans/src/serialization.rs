use attrclust_core::errors::{ClusterError, ErrorInfo};
use attrclust_core::{Edge, GraphData, Node, PropertyBag, PropertyValue};
use serde::{Deserialize, Serialize};

use crate::aggregate::ClusterEdge;
use crate::model::{Cluster, ClusterData, ClusterId, ClusterRef, ClusteredNode};
use crate::partition::StopReason;

/// Serializes a graph to a JSON string.
pub fn graph_to_json(graph: &GraphData) -> Result<String, ClusterError> {
    serde_json::to_string_pretty(graph)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<GraphData, ClusterError> {
    serde_json::from_str(json)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
}

/// Serializes a graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &GraphData) -> Result<Vec<u8>, ClusterError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<GraphData, ClusterError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    Ok(serializable.into_graph())
}

/// Serializes clustering output to a JSON string.
pub fn clusters_to_json(data: &ClusterData) -> Result<String, ClusterError> {
    serde_json::to_string_pretty(data)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores clustering output from a JSON string.
pub fn clusters_from_json(json: &str) -> Result<ClusterData, ClusterError> {
    serde_json::from_str(json)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
}

/// Serializes clustering output using `bincode`.
pub fn clusters_to_bytes(data: &ClusterData) -> Result<Vec<u8>, ClusterError> {
    let serializable = SerializableClusterData::from_data(data);
    bincode::serialize(&serializable)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores clustering output from its binary representation.
pub fn clusters_from_bytes(bytes: &[u8]) -> Result<ClusterData, ClusterError> {
    let serializable: SerializableClusterData = bincode::deserialize(bytes)
        .map_err(|err| ClusterError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    Ok(serializable.into_data())
}

// bincode cannot drive the untagged `PropertyValue`; the binary format goes
// through tagged mirror types.

#[derive(Debug, Serialize, Deserialize)]
enum SerializableValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&PropertyValue> for SerializableValue {
    fn from(value: &PropertyValue) -> Self {
        match value {
            PropertyValue::Bool(flag) => SerializableValue::Bool(*flag),
            PropertyValue::Number(number) => SerializableValue::Number(*number),
            PropertyValue::Text(text) => SerializableValue::Text(text.clone()),
        }
    }
}

impl From<SerializableValue> for PropertyValue {
    fn from(value: SerializableValue) -> Self {
        match value {
            SerializableValue::Bool(flag) => PropertyValue::Bool(flag),
            SerializableValue::Number(number) => PropertyValue::Number(number),
            SerializableValue::Text(text) => PropertyValue::Text(text),
        }
    }
}

type SerializableBag = Vec<(String, SerializableValue)>;

fn bag_to_serializable(bag: &PropertyBag) -> SerializableBag {
    bag.iter()
        .map(|(key, value)| (key.clone(), SerializableValue::from(value)))
        .collect()
}

fn bag_from_serializable(bag: SerializableBag) -> PropertyBag {
    bag.into_iter()
        .map(|(key, value)| (key, PropertyValue::from(value)))
        .collect()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableNode {
    id: String,
    properties: SerializableBag,
    attributes: Vec<(String, SerializableBag)>,
}

impl SerializableNode {
    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            properties: bag_to_serializable(&node.properties),
            attributes: node
                .attributes
                .iter()
                .map(|(field, bag)| (field.clone(), bag_to_serializable(bag)))
                .collect(),
        }
    }

    fn into_node(self) -> Node {
        Node {
            id: self.id,
            properties: bag_from_serializable(self.properties),
            attributes: self
                .attributes
                .into_iter()
                .map(|(field, bag)| (field, bag_from_serializable(bag)))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    nodes: Vec<SerializableNode>,
    edges: Vec<(String, String)>,
}

impl SerializableGraph {
    fn from_graph(graph: &GraphData) -> Self {
        Self {
            nodes: graph.nodes.iter().map(SerializableNode::from_node).collect(),
            edges: graph
                .edges
                .iter()
                .map(|edge| (edge.source.clone(), edge.target.clone()))
                .collect(),
        }
    }

    fn into_graph(self) -> GraphData {
        GraphData {
            nodes: self.nodes.into_iter().map(SerializableNode::into_node).collect(),
            edges: self
                .edges
                .into_iter()
                .map(|(source, target)| Edge { source, target })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableMember {
    node: SerializableNode,
    origin_index: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableClusterEdge {
    source: Option<u64>,
    target: Option<u64>,
    count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableClusterData {
    clusters: Vec<Vec<SerializableMember>>,
    cluster_edges: Vec<SerializableClusterEdge>,
    iterations: u64,
    stop_reason: StopReason,
}

fn ref_to_raw(cluster: ClusterRef) -> Option<u64> {
    cluster.cluster().map(|id| id.index() as u64)
}

fn ref_from_raw(raw: Option<u64>) -> ClusterRef {
    raw.map_or(ClusterRef::Unknown, |index| {
        ClusterRef::Cluster(ClusterId::from_index(index as usize))
    })
}

impl SerializableClusterData {
    fn from_data(data: &ClusterData) -> Self {
        Self {
            clusters: data
                .clusters
                .iter()
                .map(|cluster| {
                    cluster
                        .nodes
                        .iter()
                        .map(|member| SerializableMember {
                            node: SerializableNode::from_node(&member.node),
                            origin_index: member.origin_index as u64,
                        })
                        .collect()
                })
                .collect(),
            cluster_edges: data
                .cluster_edges
                .iter()
                .map(|edge| SerializableClusterEdge {
                    source: ref_to_raw(edge.source),
                    target: ref_to_raw(edge.target),
                    count: edge.count as u64,
                })
                .collect(),
            iterations: data.iterations as u64,
            stop_reason: data.stop_reason,
        }
    }

    fn into_data(self) -> ClusterData {
        let clusters = self
            .clusters
            .into_iter()
            .enumerate()
            .map(|(index, members)| {
                let id = ClusterId::from_index(index);
                Cluster {
                    id,
                    nodes: members
                        .into_iter()
                        .map(|member| ClusteredNode {
                            node: member.node.into_node(),
                            origin_index: member.origin_index as usize,
                            cluster_id: id,
                        })
                        .collect(),
                }
            })
            .collect();
        let cluster_edges = self
            .cluster_edges
            .into_iter()
            .map(|edge| ClusterEdge {
                source: ref_from_raw(edge.source),
                target: ref_from_raw(edge.target),
                count: edge.count as usize,
            })
            .collect();
        ClusterData {
            clusters,
            cluster_edges,
            iterations: self.iterations as usize,
            stop_reason: self.stop_reason,
        }
    }
}
