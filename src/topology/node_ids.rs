use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::{tables, Topology};
use crate::coords::CubeCoord;
use crate::error::{Result, TopologyError};
use crate::geometry::{shared_corners, NodeDirection};

/// Stable identifier of a board node (hexagon vertex).
pub type NodeId = u16;

/// Maps each tile corner to the node it stands for.
///
/// Tiles meeting at a vertex map their respective corners to the same ID.
/// Corners without an entry are simply unlabeled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIdTable {
    ids: HashMap<(CubeCoord, NodeDirection), NodeId>,
}

impl NodeIdTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from raw `((x, y, z), corner, id)` rows.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateError::InvalidCoordinate` if a row holds an invalid
    /// coordinate.
    pub fn from_table(table: &[((i32, i32, i32), NodeDirection, NodeId)]) -> Result<Self> {
        let mut out = Self::new();
        for &(xyz, dir, id) in table {
            out.insert(CubeCoord::try_from(xyz)?, dir, id);
        }
        Ok(out)
    }

    /// Node assignments of [`Topology::base`].
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table is corrupt.
    pub fn base() -> Result<Self> {
        Self::from_table(&tables::BASE_NODE_IDS)
    }

    /// Node assignments of [`Topology::mini`].
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table is corrupt.
    pub fn mini() -> Result<Self> {
        Self::from_table(&tables::MINI_NODE_IDS)
    }

    /// Assigns node IDs to every corner of `topology`.
    ///
    /// Tiles are visited in topology order. A corner shared with an already
    /// visited neighbor takes that neighbor's ID; any other corner takes the
    /// next unused ID, counting from 0 in clockwise corner order.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::TooManyNodes` if the topology has more
    /// distinct nodes than [`NodeId`] can number.
    pub fn derive(topology: &Topology) -> Result<Self> {
        let mut table = Self::new();
        let mut next: u32 = 0;

        for &(coord, _) in topology.tiles() {
            let mut corners: [Option<NodeId>; 6] = [None; 6];
            for (dir, neighbor) in coord.neighbors() {
                for (own, theirs) in shared_corners(dir) {
                    if let Some(id) = table.get(neighbor, theirs) {
                        corners[own.index()] = Some(id);
                    }
                }
            }
            for (dir, slot) in NodeDirection::ALL.into_iter().zip(corners) {
                let id = match slot {
                    Some(id) => id,
                    None => {
                        let id = NodeId::try_from(next).map_err(|_| TopologyError::TooManyNodes {
                            topology: topology.name().to_owned(),
                            max: u32::from(NodeId::MAX) + 1,
                        })?;
                        next += 1;
                        id
                    }
                };
                table.insert(coord, dir, id);
            }
        }

        debug!(
            topology = topology.name(),
            nodes = next,
            "derived node ids"
        );
        Ok(table)
    }

    pub fn insert(&mut self, coord: CubeCoord, direction: NodeDirection, id: NodeId) {
        self.ids.insert((coord, direction), id);
    }

    /// Node at the given tile corner, if mapped.
    #[must_use]
    pub fn get(&self, coord: CubeCoord, direction: NodeDirection) -> Option<NodeId> {
        self.ids.get(&(coord, direction)).copied()
    }

    /// Number of mapped corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Distinct node IDs, ascending.
    #[must_use]
    pub fn distinct_ids(&self) -> BTreeSet<NodeId> {
        self.ids.values().copied().collect()
    }

    /// Tile coordinates referenced by at least one entry, ascending.
    #[must_use]
    pub fn coordinates(&self) -> BTreeSet<CubeCoord> {
        self.ids.keys().map(|(c, _)| *c).collect()
    }
}
