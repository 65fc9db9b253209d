#![deny(missing_docs)]
#![doc = "K-means clustering of attributed graph nodes by property similarity, with cluster-graph coarsening."]

//! Nodes are encoded as one-hot feature vectors over the property vocabulary,
//! seeded with farthest-point centroids, partitioned by the assignment/update
//! loop, and the input edges are projected onto the resulting clusters.

mod aggregate;
mod engine;
mod features;
mod generators;
mod hash;
mod metric;
mod model;
mod params;
mod partition;
mod seed;
mod serialization;

pub use aggregate::{aggregate_cluster_edges, ClusterEdge, ClusterIndex, EDGE_KEY_SEPARATOR};
pub use engine::{k_means, k_means_with_metric, k_means_with_rng};
pub use features::{encode_one_hot, extract_property_vocabulary, Vocabulary};
pub use generators::gen_attributed_graph;
pub use hash::{assignment_hash, canonical_hash};
pub use metric::{distance, DistanceType, Metric};
pub use model::{Cluster, ClusterData, ClusterId, ClusterRef, ClusteredNode, UNKNOWN_CLUSTER};
pub use params::{KMeansOpts, StoppingRule, DEFAULT_K, DEFAULT_MAX_ITERATIONS};
pub use partition::{nearest_centroid, run_partition, LoopLimits, Partition, StopReason};
pub use seed::{check_cluster_count, seed_centroids, Seeding};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    clusters_from_bytes, clusters_from_json, clusters_to_bytes, clusters_to_json,
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json,
};
