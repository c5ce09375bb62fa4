//! Vertex and edge CRUD over the adjacency matrix

use serde::Serialize;

use crate::ensure_index;
use crate::error::{Result, StarpathError};
use crate::graph::vertex::{names_match, Vertex, VertexUpdate};

/// In/out degree of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Degree {
    pub in_degree: usize,
    pub out_degree: usize,
}

impl Degree {
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

/// Graph over an ordered vertex list and a square weight matrix.
///
/// `matrix[i][j] != 0` iff there is an edge `i -> j`. Undirected graphs keep the
/// matrix symmetric; unweighted graphs store every edge as `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    vertices: Vec<Vertex>,
    matrix: Vec<Vec<f64>>,
}

impl Graph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            vertices: Vec::new(),
            matrix: Vec::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Remove every vertex and edge, keeping the directed/weighted flags
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.clear();
    }

    // ------------------------------------------------------------------
    // Vertices
    // ------------------------------------------------------------------

    /// Append a vertex and grow the matrix by one zero row and column.
    ///
    /// Fails with `DuplicateName` without touching the graph if another vertex
    /// has the same name under case-insensitive comparison.
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> Result<usize> {
        vertex.name = vertex.name.trim().to_string();
        if self.find_vertex(&vertex.name).is_some() {
            return Err(StarpathError::DuplicateName { name: vertex.name });
        }

        tracing::debug!(name = %vertex.name, index = self.vertices.len(), "add_vertex");
        self.vertices.push(vertex);

        let n = self.vertices.len();
        for row in &mut self.matrix {
            row.push(0.0);
        }
        self.matrix.push(vec![0.0; n]);

        Ok(n - 1)
    }

    /// Remove a vertex with all its edges.
    ///
    /// Every vertex above `index` moves down by one, so indices held by the
    /// caller that are greater than `index` are invalidated.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Vertex> {
        ensure_index!(index, self.len());

        let removed = self.vertices.remove(index);
        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }

        tracing::debug!(name = %removed.name, index, "remove_vertex");
        Ok(removed)
    }

    /// Merge `update` into the vertex at `index`; edges are unaffected.
    pub fn update_vertex(&mut self, index: usize, mut update: VertexUpdate) -> Result<()> {
        ensure_index!(index, self.len());

        if let Some(name) = update.name.as_mut() {
            *name = name.trim().to_string();
            if let Some(existing) = self.find_vertex(name) {
                if existing != index {
                    return Err(StarpathError::DuplicateName { name: name.clone() });
                }
            }
        }

        self.vertices[index].merge(update);
        tracing::debug!(index, name = %self.vertices[index].name, "update_vertex");
        Ok(())
    }

    pub fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.vertices
            .get(index)
            .ok_or_else(|| StarpathError::invalid_index(index, self.len()))
    }

    /// All vertices in index order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// `(index, vertex)` pairs in index order
    pub fn list_vertices(&self) -> impl Iterator<Item = (usize, &Vertex)> + '_ {
        self.vertices.iter().enumerate()
    }

    /// Index of the vertex with this name (case-insensitive)
    pub fn find_vertex(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| names_match(&v.name, name))
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Write an edge into the matrix (both cells when undirected).
    ///
    /// Out-of-range endpoints and non-finite weights are ignored so that bulk
    /// loaders can call this in a loop. Unweighted graphs store `1.0`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        let n = self.len();
        if from >= n || to >= n {
            tracing::warn!(from, to, len = n, "add_edge ignored: invalid vertex index");
            return;
        }
        if !weight.is_finite() {
            tracing::warn!(from, to, weight, "add_edge ignored: non-finite weight");
            return;
        }

        let value = if self.weighted { weight } else { 1.0 };
        self.write_cell(from, to, value);
    }

    /// Remove the edge `from -> to` and return its weight
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<f64> {
        let weight = self.existing_edge(from, to)?;
        self.write_cell(from, to, 0.0);
        Ok(weight)
    }

    /// Replace the weight of an existing edge
    pub fn update_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        if !self.weighted {
            return Err(StarpathError::UnweightedEdgeUpdate);
        }
        ensure_index!(from, self.len());
        ensure_index!(to, self.len());
        if weight == 0.0 || !weight.is_finite() {
            return Err(StarpathError::InvalidWeight { weight });
        }
        self.existing_edge(from, to)?;

        self.write_cell(from, to, weight);
        Ok(())
    }

    /// Weight of `from -> to`, or `0.0` when absent or out of range
    pub fn get_edge(&self, from: usize, to: usize) -> f64 {
        self.matrix
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Weight of `from -> to` if the edge exists
    pub fn edge(&self, from: usize, to: usize) -> Option<f64> {
        let weight = self.get_edge(from, to);
        (weight != 0.0).then_some(weight)
    }

    /// Outgoing `(neighbor, weight)` pairs of `from` in index order
    pub fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.matrix
            .get(from)
            .into_iter()
            .flat_map(|row| row.iter().copied().enumerate())
            .filter(|&(_, weight)| weight != 0.0)
    }

    /// Every non-zero cell as `(from, to, weight)`, row-major.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.len()).flat_map(move |from| self.neighbors(from).map(move |(to, w)| (from, to, w)))
    }

    /// The raw weight matrix
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    // ------------------------------------------------------------------
    // Degrees
    // ------------------------------------------------------------------

    pub fn out_degree(&self, index: usize) -> Result<usize> {
        ensure_index!(index, self.len());
        Ok(self.neighbors(index).count())
    }

    pub fn in_degree(&self, index: usize) -> Result<usize> {
        ensure_index!(index, self.len());
        Ok(self.matrix.iter().filter(|row| row[index] != 0.0).count())
    }

    pub fn degree(&self, index: usize) -> Result<Degree> {
        Ok(Degree {
            in_degree: self.in_degree(index)?,
            out_degree: self.out_degree(index)?,
        })
    }

    /// Number of edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        if self.directed {
            return self.edges().count();
        }
        self.edges().filter(|&(from, to, _)| from <= to).count()
    }

    pub fn has_self_loop(&self) -> bool {
        (0..self.len()).any(|i| self.matrix[i][i] != 0.0)
    }

    fn existing_edge(&self, from: usize, to: usize) -> Result<f64> {
        ensure_index!(from, self.len());
        ensure_index!(to, self.len());
        self.edge(from, to)
            .ok_or(StarpathError::EdgeNotFound { from, to })
    }

    fn write_cell(&mut self, from: usize, to: usize, value: f64) {
        self.matrix[from][to] = value;
        if !self.directed {
            self.matrix[to][from] = value;
        }
    }
}
