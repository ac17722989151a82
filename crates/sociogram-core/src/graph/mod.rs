//! Graph model implementations.
//!
//! - [`social`] - Weighted undirected social graph

pub mod social;
