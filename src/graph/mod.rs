//! Adjacency graphs over free cells.
//!
//! A [`Graph`] keeps its vertices in insertion order alongside a hash index
//! for lookups. Pixel-space vertices are keyed by their exact coordinate,
//! metric-space vertices by their coordinate in whole millimetres.

pub mod builder;

pub use builder::{NEIGHBOR_OFFSETS, build_graphs};

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use glam::{DVec2, UVec2};
use serde::{Serialize, Serializer};

use crate::types::metric_key;

/// A vertex position with an exact, hashable identity.
pub trait VertexKey: Copy {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

impl VertexKey for UVec2 {
    type Key = UVec2;

    fn key(&self) -> UVec2 {
        *self
    }
}

impl VertexKey for DVec2 {
    type Key = (i64, i64);

    fn key(&self) -> (i64, i64) {
        metric_key(*self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex<P> {
    pub position: P,
    pub neighbors: Vec<P>,
}

#[derive(Debug, Clone)]
pub struct Graph<P: VertexKey> {
    vertices: Vec<Vertex<P>>,
    index: HashMap<P::Key, usize>,
}

/// Graph keyed by cell-center pixel coordinates.
pub type PixelGraph = Graph<UVec2>;
/// Graph keyed by cell-center world coordinates in meters.
pub type MetricGraph = Graph<DVec2>;

impl<P: VertexKey> Default for Graph<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<P: VertexKey> Graph<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. If another vertex already has the same key nothing is
    /// inserted and the position of the existing vertex is returned.
    pub(crate) fn insert(&mut self, position: P, neighbors: Vec<P>) -> Result<(), usize> {
        let next = self.vertices.len();
        if let Some(&existing) = self.index.get(&position.key()) {
            return Err(existing);
        }
        self.index.insert(position.key(), next);
        self.vertices.push(Vertex {
            position,
            neighbors,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, position: &P) -> bool {
        self.index.contains_key(&position.key())
    }

    pub fn neighbors(&self, position: &P) -> Option<&[P]> {
        self.index
            .get(&position.key())
            .map(|&idx| self.vertices[idx].neighbors.as_slice())
    }

    /// Vertices in insertion (row-major scan) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<P>> {
        self.vertices.iter()
    }

    pub fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    /// Number of directed edges, i.e. the sum of all neighbor list lengths.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }
}

impl<P: VertexKey + PartialEq> PartialEq for Graph<P> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<'a, P: VertexKey> IntoIterator for &'a Graph<P> {
    type Item = &'a Vertex<P>;
    type IntoIter = std::slice::Iter<'a, Vertex<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: VertexKey + Serialize> Serialize for Graph<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vertices.serialize(serializer)
    }
}
