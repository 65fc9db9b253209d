use attrclust_core::errors::ClusterError;
use attrclust_core::{GraphData, RngHandle};

use crate::aggregate::{aggregate_cluster_edges, ClusterIndex};
use crate::features::{encode_one_hot, extract_property_vocabulary};
use crate::metric::Metric;
use crate::model::{Cluster, ClusterData, ClusterId, ClusteredNode};
use crate::params::KMeansOpts;
use crate::partition::{run_partition, LoopLimits, Partition};
use crate::seed::seed_centroids;

/// Clusters `graph` into `opts.k` groups, drawing the first centroid from `opts.seed`.
pub fn k_means(graph: &GraphData, opts: &KMeansOpts) -> Result<ClusterData, ClusterError> {
    let mut rng = RngHandle::from_seed(opts.seed);
    k_means_with_rng(graph, opts, &mut rng)
}

/// Clusters `graph` with a caller supplied random source.
pub fn k_means_with_rng(
    graph: &GraphData,
    opts: &KMeansOpts,
    rng: &mut RngHandle,
) -> Result<ClusterData, ClusterError> {
    k_means_with_metric(graph, opts, rng, &opts.metric)
}

/// Clusters `graph` under a custom metric; `opts.metric` is ignored.
pub fn k_means_with_metric(
    graph: &GraphData,
    opts: &KMeansOpts,
    rng: &mut RngHandle,
    metric: &dyn Metric,
) -> Result<ClusterData, ClusterError> {
    let opts = opts.sanitised();
    let n = graph.node_count();
    opts.validate(n)?;
    log::info!(
        "k-means: {} nodes, {} edges, k={}, metric={:?}",
        n,
        graph.edge_count(),
        opts.k,
        opts.metric
    );

    let vocabulary = extract_property_vocabulary(&graph.nodes, &opts.property_key);
    let features = encode_one_hot(&vocabulary, &opts.involved_keys, &opts.uninvolved_keys);
    log::debug!(
        "encoded {} feature vectors of dimension {}",
        features.len(),
        features.first().map_or(0, |feature| feature.len())
    );

    let first = match opts.first_centroid {
        Some(index) => index,
        None => rng.pick_index(n).ok_or_else(ClusterError::empty_graph)?,
    };
    let seeding = seed_centroids(&features, opts.k, metric, first)?;
    let limits = LoopLimits {
        rule: opts.stopping_rule,
        max_iterations: opts.max_iterations,
    };
    let partition = run_partition(&features, seeding, metric, limits)?;

    let mut index = ClusterIndex::new();
    for (node, assignment) in graph.nodes.iter().zip(&partition.assignments) {
        if let Some(cluster) = assignment {
            index.insert(&node.id, ClusterId::from_index(*cluster));
        }
    }
    let cluster_edges = aggregate_cluster_edges(&graph.edges, &index);
    let clusters = build_clusters(graph, &partition);

    log::info!(
        "k-means finished after {} passes ({:?}), {} cluster edges",
        partition.iterations,
        partition.stop_reason,
        cluster_edges.len()
    );

    Ok(ClusterData {
        clusters,
        cluster_edges,
        iterations: partition.iterations,
        stop_reason: partition.stop_reason,
    })
}

fn build_clusters(graph: &GraphData, partition: &Partition) -> Vec<Cluster> {
    partition
        .clusters
        .iter()
        .enumerate()
        .map(|(cluster, members)| {
            let id = ClusterId::from_index(cluster);
            Cluster {
                id,
                nodes: members
                    .iter()
                    .map(|&origin_index| ClusteredNode {
                        node: graph.nodes[origin_index].clone(),
                        origin_index,
                        cluster_id: id,
                    })
                    .collect(),
            }
        })
        .collect()
}
