use std::collections::{HashMap, HashSet};

use tessera_common::ArrayIndex;

use super::Mesh;
use crate::Float;

/// Directed edges of a [Mesh], and how often each occurs.
///
/// A triangle `[a, b, c]` contributes the directed edges `a→b`, `b→c` and `c→a`.
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    directed: HashMap<(usize, usize), usize>,
    vertices: HashSet<usize>,
    faces: usize,
}

impl EdgeMap {
    pub fn new<Real: Float, Idx: ArrayIndex>(mesh: &Mesh<Real, Idx>) -> Self {
        let mut res = Self {
            directed: HashMap::with_capacity(mesh.triangle_count() * 3),
            vertices: HashSet::with_capacity(mesh.vertex_count()),
            faces: mesh.triangle_count(),
        };
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(ArrayIndex::index);
            for edge in [(a, b), (b, c), (c, a)] {
                *res.directed.entry(edge).or_default() += 1;
            }
            res.vertices.extend([a, b, c]);
        }
        res
    }

    /// How many times the directed edge `from→to` occurs.
    pub fn directed(&self, from: usize, to: usize) -> usize {
        self.directed.get(&(from, to)).copied().unwrap_or(0)
    }

    /// How many triangles border the edge between `a` and `b`, regardless of direction.
    pub fn undirected(&self, a: usize, b: usize) -> usize {
        self.directed(a, b) + if a == b { 0 } else { self.directed(b, a) }
    }

    /// Every distinct undirected edge, as `(low, high)` vertex pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.directed
            .keys()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect::<HashSet<_>>()
            .into_iter()
    }

    /// Undirected edges bordered by exactly one triangle.
    pub fn boundary(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges().filter(|&(a, b)| self.undirected(a, b) == 1)
    }

    /// Every undirected edge borders exactly two triangles: the surface has no holes and no
    /// fins.
    pub fn is_closed(&self) -> bool {
        self.edges().all(|(a, b)| self.undirected(a, b) == 2)
    }

    /// No directed edge occurs twice, so neighbouring triangles agree on which side is out.
    pub fn is_consistently_oriented(&self) -> bool {
        self.directed.values().all(|&n| n == 1)
    }

    /// Closed and consistently oriented.
    pub fn is_watertight(&self) -> bool {
        self.is_closed() && self.is_consistently_oriented()
    }

    /// `V - E + F` over referenced vertices; `2` for any watertight surface without handles.
    pub fn euler_characteristic(&self) -> isize {
        self.vertices.len() as isize - self.edges().count() as isize + self.faces as isize
    }
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    /// Tally the edges of self.
    pub fn edge_map(&self) -> EdgeMap {
        EdgeMap::new(self)
    }

    /// See [EdgeMap::is_watertight].
    pub fn is_watertight(&self) -> bool {
        self.edge_map().is_watertight()
    }
}
