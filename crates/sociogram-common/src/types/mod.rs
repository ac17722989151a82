//! Core type definitions for Sociogram.
//!
//! This module contains the fundamental types used throughout the graph
//! analysis core:
//! - Identifier types ([`NodeId`])
//! - Layout geometry ([`Point`])
//! - Color labels ([`ColorIndex`], [`PALETTE_SIZE`])

mod color;
mod id;
mod point;

pub use color::{ColorIndex, PALETTE_SIZE};
pub use id::NodeId;
pub use point::Point;
