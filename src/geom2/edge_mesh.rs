//! This module contains a minimal 2D edge mesh: a list of edges, each with two endpoints, where
//! an endpoint that the sensor did not observe is marked with NaN coordinates.

use crate::{Point2, Result};

/// A single edge of a 2D mesh, defined by two endpoints. Either endpoint may carry NaN
/// coordinates to mark it as invalid or unobserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2 {
    pub v1: Point2,
    pub v2: Point2,
}

impl Edge2 {
    pub fn new(v1: Point2, v2: Point2) -> Self {
        Self { v1, v2 }
    }

    /// Returns true if the `x` coordinate of either endpoint is NaN. The `y` coordinates are not
    /// inspected, since an unobserved point is expected to have both coordinates set to NaN.
    pub fn has_nan_x(&self) -> bool {
        self.v1.x.is_nan() || self.v2.x.is_nan()
    }

    /// Returns true if any coordinate of either endpoint is NaN
    pub fn has_nan(&self) -> bool {
        self.v1.iter().chain(self.v2.iter()).any(|c| c.is_nan())
    }

    /// Returns the distance between the two endpoints
    pub fn length(&self) -> f64 {
        (self.v2 - self.v1).norm()
    }
}

/// Anything that can present an ordered collection of 2D edges
pub trait EdgeSource {
    fn edges(&self) -> &[Edge2];
}

impl EdgeSource for [Edge2] {
    fn edges(&self) -> &[Edge2] {
        self
    }
}

impl EdgeSource for Vec<Edge2> {
    fn edges(&self) -> &[Edge2] {
        self
    }
}

/// An ordered collection of 2D edges
#[derive(Debug, Clone, Default)]
pub struct EdgeMesh2 {
    edges: Vec<Edge2>,
}

impl EdgeMesh2 {
    pub fn new(edges: Vec<Edge2>) -> Self {
        Self { edges }
    }

    /// Create an edge mesh from a list of shared vertices and a list of index pairs, where each
    /// pair references the two vertices of one edge. The edges keep the order of the index pairs.
    ///
    /// # Arguments
    ///
    /// * `vertices`: the vertices of the mesh, which may contain NaN coordinates
    /// * `indices`: one `[i1, i2]` pair per edge, each index must be valid in `vertices`
    ///
    /// returns: Result<EdgeMesh2, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use edge_measure::{EdgeMesh2, EdgeSource, Point2};
    /// let vertices = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)];
    /// let mesh = EdgeMesh2::from_vertices(&vertices, &[[0, 1], [1, 2]]).unwrap();
    /// assert_eq!(mesh.edges().len(), 2);
    /// assert_eq!(mesh.edges()[1].v2, Point2::new(1.0, 1.0));
    /// ```
    pub fn from_vertices(vertices: &[Point2], indices: &[[usize; 2]]) -> Result<Self> {
        if indices.iter().flatten().any(|&i| i >= vertices.len()) {
            return Err("Edge vertex index out of bounds".into());
        }

        let edges = indices
            .iter()
            .map(|[i1, i2]| Edge2::new(vertices[*i1], vertices[*i2]))
            .collect();

        Ok(Self { edges })
    }

    pub fn push(&mut self, edge: Edge2) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl EdgeSource for EdgeMesh2 {
    fn edges(&self) -> &[Edge2] {
        &self.edges
    }
}

impl FromIterator<Edge2> for EdgeMesh2 {
    fn from_iter<T: IntoIterator<Item = Edge2>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
