//! Node records for the social graph.

use serde::{Deserialize, Serialize};
use sociogram_common::types::{NodeId, Point};

/// A member of the social graph.
///
/// The id is assigned by the caller and immutable afterwards, which keeps
/// the store's id-keyed collections coherent. The name is an opaque
/// display string. `activity`, `interaction`, and `projects` are the only
/// inputs to the edge-weight model; the layout position only feeds the
/// distance estimate used by goal-directed search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    /// Display name.
    pub name: String,
    /// Position on the layout canvas.
    pub position: Point,
    /// Continuous activity measure.
    pub activity: f64,
    /// Interaction count.
    pub interaction: u32,
    /// Number of shared projects.
    pub projects: u32,
}

impl Node {
    /// Creates a node at the origin with zeroed measures.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Point::default(),
            activity: 0.0,
            interaction: 0,
            projects: 0,
        }
    }

    /// Places the node on the layout canvas.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Sets the three measures that drive connection cost.
    #[must_use]
    pub fn with_metrics(mut self, activity: f64, interaction: u32, projects: u32) -> Self {
        self.activity = activity;
        self.interaction = interaction;
        self.projects = projects;
        self
    }

    /// Returns the node's id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }
}
