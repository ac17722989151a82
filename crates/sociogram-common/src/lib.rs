//! # sociogram-common
//!
//! Foundation layer for Sociogram: identifier types, layout geometry,
//! color labels, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Sociogram crates. It has no internal dependencies and should be kept
//! minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`NodeId`], [`Point`], [`ColorIndex`])
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{ColorIndex, NodeId, PALETTE_SIZE, Point};
pub use utils::error::{Error, Result};
