use std::collections::BTreeMap;

use crate::math::{centroid, Point2};
use crate::topology::NodeId;

/// Pixel positions at which each node was seen, across all tiles sharing it.
#[derive(Debug, Clone, Default)]
pub struct NodePositions {
    positions: BTreeMap<NodeId, Vec<Point2>>,
}

impl NodePositions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observation of `id` at `position`.
    pub fn push(&mut self, id: NodeId, position: Point2) {
        self.positions.entry(id).or_default().push(position);
    }

    /// Observations of `id`, in insertion order.
    #[must_use]
    pub fn observations(&self, id: NodeId) -> Option<&[Point2]> {
        self.positions.get(&id).map(Vec::as_slice)
    }

    /// Number of distinct nodes observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// One label position per node, ascending by ID.
    ///
    /// Each node collapses to the mean of its observations.
    #[must_use]
    pub fn centroids(&self) -> Vec<(NodeId, Point2)> {
        self.positions
            .iter()
            .filter_map(|(&id, points)| centroid(points).map(|c| (id, c)))
            .collect()
    }
}
