//! Dense adjacency-matrix graph store
//!
//! Provides the graph the search engines run on:
//! - `store`: vertex and edge CRUD over an `n x n` weight matrix
//! - `vertex`: the vertex attribute record and partial updates
//! - `query`: catalogue queries (brightest body, category counts, connectivity ranking)
//! - `document`: bulk loading from JSON/TOML/YAML graph descriptions
//!
//! A matrix cell is an edge iff it is non-zero, so a true zero-weight edge cannot be
//! represented. Removing a vertex shifts every higher index down by one; indices held
//! across a removal are stale.

pub mod document;
pub mod query;
pub mod store;
pub mod vertex;

pub use document::{EdgeSpec, GraphDocument, LoadReport};
pub use store::{Degree, Graph};
pub use vertex::{Vertex, VertexUpdate};

#[cfg(test)]
mod tests;
