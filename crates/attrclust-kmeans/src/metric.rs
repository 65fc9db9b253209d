use attrclust_core::errors::ClusterError;
use attrclust_core::Vector;
use serde::{Deserialize, Serialize};

/// Distance between two feature vectors.
pub trait Metric {
    /// Returns the distance between `a` and `b`.
    fn distance(&self, a: &Vector, b: &Vector) -> Result<f64, ClusterError>;
}

/// Built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceType {
    /// L2 distance.
    #[default]
    Euclidean,
    /// L1 distance.
    Manhattan,
    /// L-infinity distance.
    Chebyshev,
    /// One minus cosine similarity.
    Cosine,
}

impl Metric for DistanceType {
    fn distance(&self, a: &Vector, b: &Vector) -> Result<f64, ClusterError> {
        if a.len() != b.len() {
            return Err(ClusterError::dimension_mismatch(a.len(), b.len()));
        }
        let pairs = a.as_slice().iter().zip(b.as_slice());
        let value = match self {
            DistanceType::Euclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt(),
            DistanceType::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
            DistanceType::Chebyshev => pairs.map(|(x, y)| (x - y).abs()).fold(0.0, f64::max),
            DistanceType::Cosine => cosine(a.as_slice(), b.as_slice()),
        };
        Ok(value)
    }
}

/// Distance under one of the built-in metrics.
pub fn distance(a: &Vector, b: &Vector, metric: DistanceType) -> Result<f64, ClusterError> {
    metric.distance(a, b)
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => 1.0 - dot / (norm_a.sqrt() * norm_b.sqrt()),
    }
}
