use attrclust_core::errors::ClusterError;
use attrclust_core::Vector;

use crate::metric::Metric;
use crate::params::check_first_centroid;

/// Initial centroids and singleton clusters chosen before the first pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Seeding {
    /// One centroid per cluster, copied from the chosen nodes' features.
    pub centroids: Vec<Vector>,
    /// Origin indices of the chosen nodes; entry `i` seeds cluster `i`.
    pub chosen: Vec<usize>,
}

impl Seeding {
    /// Singleton membership lists, one per cluster.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        self.chosen.iter().map(|&index| vec![index]).collect()
    }
}

/// Rejects empty graphs and cluster counts outside `1..=nodes`.
pub fn check_cluster_count(k: usize, nodes: usize) -> Result<(), ClusterError> {
    if nodes == 0 {
        return Err(ClusterError::empty_graph());
    }
    if k == 0 || k > nodes {
        return Err(ClusterError::invalid_cluster_count(k, nodes));
    }
    Ok(())
}

/// Farthest-point seeding.
///
/// `first` seeds cluster 0. Every further centroid is the unchosen node with
/// the largest mean distance to the centroids chosen so far; ties keep the
/// earliest node.
pub fn seed_centroids(
    features: &[Vector],
    k: usize,
    metric: &dyn Metric,
    first: usize,
) -> Result<Seeding, ClusterError> {
    let n = features.len();
    check_cluster_count(k, n)?;
    check_first_centroid(first, n)?;

    let mut taken = vec![false; n];
    let mut centroids = Vec::with_capacity(k);
    let mut chosen = Vec::with_capacity(k);

    taken[first] = true;
    centroids.push(features[first].clone());
    chosen.push(first);
    log::debug!("seeded centroid 0 at node {first}");

    while centroids.len() < k {
        let mut best: Option<(usize, f64)> = None;
        for (index, feature) in features.iter().enumerate() {
            if taken[index] {
                continue;
            }
            let mut total = 0.0;
            for centroid in &centroids {
                total += metric.distance(feature, centroid)?;
            }
            let mean = total / centroids.len() as f64;
            if best.map_or(true, |(_, current)| mean > current) {
                best = Some((index, mean));
            }
        }
        let (index, mean) = best.ok_or_else(|| ClusterError::invalid_cluster_count(k, n))?;
        log::debug!(
            "seeded centroid {} at node {index} (mean distance {mean:.4})",
            centroids.len()
        );
        taken[index] = true;
        centroids.push(features[index].clone());
        chosen.push(index);
    }

    Ok(Seeding { centroids, chosen })
}
