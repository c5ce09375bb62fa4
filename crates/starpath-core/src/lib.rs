//! Starpath Core Library
//!
//! Graph store and all-optimal-path search engines for the Starpath navigation tool.

pub mod config;
pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod search;
