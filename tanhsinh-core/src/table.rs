use serde::{Deserialize, Serialize};
use tanhsinh_math::Node;

/// Symmetric tanh-sinh node table for a single step size.
///
/// Entry `i` holds the abscissa and weight of node index `j = i - N`, where
/// `N` is the table radius. Both sequences always have length `2N + 1`.
/// Abscissas are odd in `j`, weights are even.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadratureTable {
    step_size: f64,
    abscissas: Vec<f64>,
    weights: Vec<f64>,
}

impl QuadratureTable {
    pub(crate) fn from_parts(step_size: f64, abscissas: Vec<f64>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(abscissas.len(), weights.len());
        debug_assert_eq!(abscissas.len() % 2, 1);
        Self {
            step_size,
            abscissas,
            weights,
        }
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Largest node index retained on each side of the center.
    pub fn radius(&self) -> usize {
        self.abscissas.len() / 2
    }

    /// Number of entries in each sequence (`2N + 1`).
    pub fn len(&self) -> usize {
        self.abscissas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abscissas.is_empty()
    }

    pub fn abscissas(&self) -> &[f64] {
        &self.abscissas
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Position in the sequences of node index `j`, if it lies in `[-N, N]`.
    pub fn index_of(&self, j: i64) -> Option<usize> {
        let radius = self.radius() as i64;
        if j < -radius || j > radius {
            return None;
        }
        Some((j + radius) as usize)
    }

    /// Node index stored at position `i`.
    pub fn node_index(&self, i: usize) -> i64 {
        i as i64 - self.radius() as i64
    }

    pub fn node(&self, j: i64) -> Option<Node> {
        self.index_of(j).map(|i| Node {
            abscissa: self.abscissas[i],
            weight: self.weights[i],
        })
    }

    /// `(j, node)` pairs in increasing order of `j`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Node)> + '_ {
        self.abscissas
            .iter()
            .zip(self.weights.iter())
            .enumerate()
            .map(move |(i, (&abscissa, &weight))| (self.node_index(i), Node { abscissa, weight }))
    }

    /// Serialize table to bytes (for storage/transmission)
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| format!("Serialization error: {}", e))
    }

    /// Deserialize table from bytes, rejecting blobs that break the shape invariant
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let table: Self =
            bincode::deserialize(bytes).map_err(|e| format!("Deserialization error: {}", e))?;
        if table.abscissas.len() != table.weights.len() {
            return Err(format!(
                "Shape mismatch: {} abscissas vs {} weights",
                table.abscissas.len(),
                table.weights.len()
            ));
        }
        if table.abscissas.len() % 2 == 0 {
            return Err(format!(
                "Table length {} is not of the form 2N+1",
                table.abscissas.len()
            ));
        }
        Ok(table)
    }
}
