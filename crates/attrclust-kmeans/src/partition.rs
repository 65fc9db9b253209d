use attrclust_core::errors::ClusterError;
use attrclust_core::Vector;
use serde::{Deserialize, Serialize};

use crate::metric::Metric;
use crate::params::{check_first_centroid, StoppingRule};
use crate::seed::{check_cluster_count, Seeding};

/// Why the partition loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// A centroid moved during the last pass ([`StoppingRule::FirstMove`]).
    CentroidMoved,
    /// No centroid moved during the last pass ([`StoppingRule::Stable`]).
    Converged,
    /// The iteration ceiling was reached first.
    IterationCeiling,
}

/// Final state of the partition loop, expressed over origin indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Final centroid of every cluster.
    pub centroids: Vec<Vector>,
    /// Member origin indices of every cluster, in membership order.
    pub clusters: Vec<Vec<usize>>,
    /// Cluster of every node by origin index.
    pub assignments: Vec<Option<usize>>,
    /// Number of passes executed.
    pub iterations: usize,
    /// Why the loop ended.
    pub stop_reason: StopReason,
}

/// Limits applied to [`run_partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopLimits {
    /// Predicate evaluated after every pass.
    pub rule: StoppingRule,
    /// Ceiling on passes, at least one pass always runs.
    pub max_iterations: usize,
}

/// Runs assignment and update passes starting from `seeding`.
///
/// On the first pass the seeded nodes keep their clusters. Later passes
/// evaluate every node. Under [`StoppingRule::FirstMove`] a cluster left
/// without members counts as a changed centroid, although its centroid vector
/// is kept.
pub fn run_partition(
    features: &[Vector],
    seeding: Seeding,
    metric: &dyn Metric,
    limits: LoopLimits,
) -> Result<Partition, ClusterError> {
    check_seeding(&seeding, features.len())?;
    let mut clusters = seeding.clusters();
    let mut centroids = seeding.centroids;
    let mut assignments = vec![None; features.len()];
    let mut seeded = vec![false; features.len()];
    for (cluster, &index) in seeding.chosen.iter().enumerate() {
        assignments[index] = Some(cluster);
        seeded[index] = true;
    }

    let mut scratch = Vector::default();
    let mut iterations = 0usize;
    let stop_reason = loop {
        let skip = (iterations == 0).then_some(seeded.as_slice());
        let moved = assign_pass(
            features,
            &centroids,
            &mut clusters,
            &mut assignments,
            skip,
            metric,
        )?;
        let changed = update_pass(
            features,
            &mut centroids,
            &clusters,
            &mut scratch,
            limits.rule == StoppingRule::FirstMove,
        )?;
        iterations += 1;
        log::debug!("pass {iterations}: {moved} nodes moved, {changed} centroids changed");

        let stop = match limits.rule {
            StoppingRule::FirstMove => (changed > 0).then_some(StopReason::CentroidMoved),
            StoppingRule::Stable => (changed == 0).then_some(StopReason::Converged),
        };
        if let Some(reason) = stop {
            break reason;
        }
        if iterations >= limits.max_iterations.max(1) {
            break StopReason::IterationCeiling;
        }
    };

    Ok(Partition {
        centroids,
        clusters,
        assignments,
        iterations,
        stop_reason,
    })
}

/// Index of the nearest centroid; ties keep the lowest index.
pub fn nearest_centroid(
    feature: &Vector,
    centroids: &[Vector],
    metric: &dyn Metric,
) -> Result<usize, ClusterError> {
    let mut best = 0usize;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = metric.distance(feature, centroid)?;
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    Ok(best)
}

fn assign_pass(
    features: &[Vector],
    centroids: &[Vector],
    clusters: &mut [Vec<usize>],
    assignments: &mut [Option<usize>],
    skip: Option<&[bool]>,
    metric: &dyn Metric,
) -> Result<usize, ClusterError> {
    let mut moved = 0usize;
    for (index, feature) in features.iter().enumerate() {
        if skip.is_some_and(|skip| skip[index]) {
            continue;
        }
        let winner = nearest_centroid(feature, centroids, metric)?;
        if assignments[index] == Some(winner) {
            continue;
        }
        if let Some(previous) = assignments[index] {
            clusters[previous].retain(|&member| member != index);
        }
        clusters[winner].push(index);
        assignments[index] = Some(winner);
        moved += 1;
    }
    Ok(moved)
}

fn check_seeding(seeding: &Seeding, nodes: usize) -> Result<(), ClusterError> {
    let k = seeding.centroids.len();
    check_cluster_count(k, nodes)?;
    if seeding.chosen.len() != k {
        return Err(ClusterError::invalid_cluster_count(seeding.chosen.len(), nodes));
    }
    for &index in &seeding.chosen {
        check_first_centroid(index, nodes)?;
    }
    Ok(())
}

/// Replaces each centroid by its cluster mean; returns how many changed.
/// Empty clusters keep their centroid and count as changed when
/// `empty_is_change` is set.
fn update_pass(
    features: &[Vector],
    centroids: &mut [Vector],
    clusters: &[Vec<usize>],
    scratch: &mut Vector,
    empty_is_change: bool,
) -> Result<usize, ClusterError> {
    let mut changed = 0usize;
    for (cluster, (centroid, members)) in centroids.iter_mut().zip(clusters).enumerate() {
        if members.is_empty() {
            log::debug!("cluster {cluster} has no members, keeping its centroid");
            changed += usize::from(empty_is_change);
            continue;
        }
        scratch.clear();
        for &member in members {
            scratch.accumulate(&features[member])?;
        }
        let mean = scratch.avg(members.len());
        if !mean.equal(centroid) {
            *centroid = mean;
            changed += 1;
        }
    }
    Ok(changed)
}
