//! Numeric vector used for feature vectors and centroids.

use serde::{Deserialize, Serialize};

use crate::errors::ClusterError;

/// Dense numeric tuple.
///
/// A zero-length vector is the additive identity: adding it to anything
/// yields the other operand. Every other combination of lengths must match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Wraps a numeric sequence.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this is the zero-length identity.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows the components.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, ClusterError> {
        let mut sum = self.clone();
        sum.accumulate(other)?;
        Ok(sum)
    }

    /// In-place elementwise sum, reusing this vector's allocation.
    pub fn accumulate(&mut self, other: &Vector) -> Result<(), ClusterError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            self.values.extend_from_slice(&other.values);
            return Ok(());
        }
        if self.len() != other.len() {
            return Err(ClusterError::dimension_mismatch(self.len(), other.len()));
        }
        for (slot, value) in self.values.iter_mut().zip(&other.values) {
            *slot += value;
        }
        Ok(())
    }

    /// Elementwise division by `n`; `n == 0` leaves the vector unchanged.
    pub fn avg(&self, n: usize) -> Vector {
        if n == 0 {
            return self.clone();
        }
        let denom = n as f64;
        Vector::new(self.values.iter().map(|value| value / denom).collect())
    }

    /// Exact elementwise equality without tolerance.
    pub fn equal(&self, other: &Vector) -> bool {
        self.values.len() == other.values.len()
            && self.values.iter().zip(&other.values).all(|(a, b)| a == b)
    }

    /// Copies the components into a plain sequence.
    pub fn to_array(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Resets to the zero-length identity while keeping the allocation.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}
