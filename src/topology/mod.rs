pub mod node_ids;
mod tables;

pub use node_ids::{NodeId, NodeIdTable};

use std::fmt;

use crate::coords::{CubeCoord, Direction};
use crate::error::{Result, TopologyError};
use crate::geometry::{shared_corners, NodeDirection};

/// What occupies a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Land,
    Water,
    Port,
}

impl TileKind {
    /// All kinds, in legend order.
    pub const ALL: [Self; 3] = [Self::Land, Self::Water, Self::Port];

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Water => "Water",
            Self::Port => "Port",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of tiles of each kind in a topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileCounts {
    pub land: usize,
    pub water: usize,
    pub port: usize,
}

impl TileCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.land + self.water + self.port
    }
}

/// Goods a specialized port trades at 2:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A trading port: a port tile docked onto the land in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port {
    /// Sequence number among the board's ports.
    pub id: usize,
    pub coord: CubeCoord,
    /// Side of the port tile that faces land.
    pub direction: Direction,
    /// `None` for a generic 3:1 port.
    pub resource: Option<Resource>,
}

impl Port {
    /// The two corners of the land-facing side; ships dock at these nodes.
    #[must_use]
    pub fn dock_corners(&self) -> [NodeDirection; 2] {
        shared_corners(self.direction).map(|(own, _)| own)
    }

    /// Trade rate text, e.g. `Wood 2:1` or `Any 3:1`.
    #[must_use]
    pub fn trade_label(&self) -> String {
        self.resource
            .map_or_else(|| "Any 3:1".to_owned(), |res| format!("{res} 2:1"))
    }
}

/// A board layout: tile positions and kinds, in a fixed order.
///
/// Topologies are built once from static tables and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    name: String,
    tiles: Vec<(CubeCoord, TileKind)>,
    ports: Vec<Port>,
}

impl Topology {
    /// Builds a topology from raw `(x, y, z)` rows, preserving row order.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateError::InvalidCoordinate` for the first row whose
    /// components do not sum to zero.
    pub fn from_table(name: impl Into<String>, table: &[((i32, i32, i32), TileKind)]) -> Result<Self> {
        let tiles = table
            .iter()
            .map(|&(xyz, kind)| Ok((CubeCoord::try_from(xyz)?, kind)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: name.into(),
            tiles,
            ports: Vec::new(),
        })
    }

    /// Attaches port details from raw `((x, y, z), direction, resource)`
    /// rows, numbering ports in row order.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateError::InvalidCoordinate` for an invalid row and
    /// `TopologyError::PortOffBoard` if a row does not name a port tile.
    pub fn with_ports(
        mut self,
        table: &[((i32, i32, i32), Direction, Option<Resource>)],
    ) -> Result<Self> {
        self.ports = table
            .iter()
            .enumerate()
            .map(|(id, &(xyz, direction, resource))| {
                let coord = CubeCoord::try_from(xyz)?;
                if self.kind_at(coord) != Some(TileKind::Port) {
                    return Err(TopologyError::PortOffBoard(coord).into());
                }
                Ok(Port {
                    id,
                    coord,
                    direction,
                    resource,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// The standard 37-tile board.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table is corrupt.
    pub fn base() -> Result<Self> {
        Self::from_table("base", &tables::BASE_TILES)?.with_ports(&tables::BASE_PORTS)
    }

    /// The 19-tile mini board.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table is corrupt.
    pub fn mini() -> Result<Self> {
        Self::from_table("mini", &tables::MINI_TILES)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tiles in table order.
    #[must_use]
    pub fn tiles(&self) -> &[(CubeCoord, TileKind)] {
        &self.tiles
    }

    /// Ports with known docking sides, by id.
    #[must_use]
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Kind of the tile at `coord`, if the board has one there.
    #[must_use]
    pub fn kind_at(&self, coord: CubeCoord) -> Option<TileKind> {
        self.tiles
            .iter()
            .find_map(|&(c, kind)| (c == coord).then_some(kind))
    }

    #[must_use]
    pub fn counts(&self) -> TileCounts {
        self.tiles
            .iter()
            .fold(TileCounts::default(), |mut counts, (_, kind)| {
                match kind {
                    TileKind::Land => counts.land += 1,
                    TileKind::Water => counts.water += 1,
                    TileKind::Port => counts.port += 1,
                }
                counts
            })
    }
}
