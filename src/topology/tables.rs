//! Built-in board layouts and their node assignments.

use super::node_ids::NodeId;
use super::Resource::{self, Brick, Ore, Sheep, Wheat, Wood};
use super::TileKind::{self, Land, Port, Water};
use crate::coords::Direction;
use crate::geometry::NodeDirection::{self, North, NorthEast, NorthWest, South, SouthEast, SouthWest};

type TileRow = ((i32, i32, i32), TileKind);
type NodeRow = ((i32, i32, i32), NodeDirection, NodeId);
type PortRow = ((i32, i32, i32), Direction, Option<Resource>);

/// Standard board: 19 land tiles ringed by alternating ports and water.
pub(super) const BASE_TILES: [TileRow; 37] = [
    ((0, 0, 0), Land),
    ((1, -1, 0), Land),
    ((0, -1, 1), Land),
    ((-1, 0, 1), Land),
    ((-1, 1, 0), Land),
    ((0, 1, -1), Land),
    ((1, 0, -1), Land),
    ((2, -2, 0), Land),
    ((1, -2, 1), Land),
    ((0, -2, 2), Land),
    ((-1, -1, 2), Land),
    ((-2, 0, 2), Land),
    ((-2, 1, 1), Land),
    ((-2, 2, 0), Land),
    ((-1, 2, -1), Land),
    ((0, 2, -2), Land),
    ((1, 1, -2), Land),
    ((2, 0, -2), Land),
    ((2, -1, -1), Land),
    ((3, -3, 0), Port),
    ((2, -3, 1), Water),
    ((1, -3, 2), Port),
    ((0, -3, 3), Water),
    ((-1, -2, 3), Port),
    ((-2, -1, 3), Water),
    ((-3, 0, 3), Port),
    ((-3, 1, 2), Water),
    ((-3, 2, 1), Port),
    ((-3, 3, 0), Water),
    ((-2, 3, -1), Port),
    ((-1, 3, -2), Water),
    ((0, 3, -3), Port),
    ((1, 2, -3), Water),
    ((2, 1, -3), Port),
    ((3, 0, -3), Water),
    ((3, -1, -2), Port),
    ((3, -2, -1), Water),
];

/// Seven land tiles ringed by water.
pub(super) const MINI_TILES: [TileRow; 19] = [
    ((0, 0, 0), Land),
    ((1, -1, 0), Land),
    ((0, -1, 1), Land),
    ((-1, 0, 1), Land),
    ((-1, 1, 0), Land),
    ((0, 1, -1), Land),
    ((1, 0, -1), Land),
    ((2, -2, 0), Water),
    ((1, -2, 1), Water),
    ((0, -2, 2), Water),
    ((-1, -1, 2), Water),
    ((-2, 0, 2), Water),
    ((-2, 1, 1), Water),
    ((-2, 2, 0), Water),
    ((-1, 2, -1), Water),
    ((0, 2, -2), Water),
    ((1, 1, -2), Water),
    ((2, 0, -2), Water),
    ((2, -1, -1), Water),
];

/// Ports of [`BASE_TILES`] in tile order, each facing the land it serves.
pub(super) const BASE_PORTS: [PortRow; 9] = [
    ((3, -3, 0), Direction::West, None),
    ((1, -3, 2), Direction::NorthWest, None),
    ((-1, -2, 3), Direction::NorthWest, None),
    ((-3, 0, 3), Direction::NorthEast, None),
    ((-3, 2, 1), Direction::East, Some(Ore)),
    ((-2, 3, -1), Direction::East, Some(Wheat)),
    ((0, 3, -3), Direction::SouthEast, Some(Sheep)),
    ((2, 1, -3), Direction::SouthWest, Some(Brick)),
    ((3, -1, -2), Direction::SouthWest, Some(Wood)),
];

/// Node assignments for [`BASE_TILES`], six per tile.
pub(super) const BASE_NODE_IDS: [NodeRow; 222] = [
    ((-3, 0, 3), North, 36),
    ((-3, 0, 3), NorthEast, 35),
    ((-3, 0, 3), NorthWest, 71),
    ((-3, 0, 3), South, 69),
    ((-3, 0, 3), SouthEast, 68),
    ((-3, 0, 3), SouthWest, 70),
    ((-3, 1, 2), North, 38),
    ((-3, 1, 2), NorthEast, 37),
    ((-3, 1, 2), NorthWest, 73),
    ((-3, 1, 2), South, 71),
    ((-3, 1, 2), SouthEast, 36),
    ((-3, 1, 2), SouthWest, 72),
    ((-3, 2, 1), North, 41),
    ((-3, 2, 1), NorthEast, 39),
    ((-3, 2, 1), NorthWest, 75),
    ((-3, 2, 1), South, 73),
    ((-3, 2, 1), SouthEast, 38),
    ((-3, 2, 1), SouthWest, 74),
    ((-3, 3, 0), North, 76),
    ((-3, 3, 0), NorthEast, 42),
    ((-3, 3, 0), NorthWest, 78),
    ((-3, 3, 0), South, 75),
    ((-3, 3, 0), SouthEast, 41),
    ((-3, 3, 0), SouthWest, 77),
    ((-2, -1, 3), North, 34),
    ((-2, -1, 3), NorthEast, 33),
    ((-2, -1, 3), NorthWest, 35),
    ((-2, -1, 3), South, 67),
    ((-2, -1, 3), SouthEast, 66),
    ((-2, -1, 3), SouthWest, 68),
    ((-2, 0, 2), North, 14),
    ((-2, 0, 2), NorthEast, 13),
    ((-2, 0, 2), NorthWest, 37),
    ((-2, 0, 2), South, 35),
    ((-2, 0, 2), SouthEast, 34),
    ((-2, 0, 2), SouthWest, 36),
    ((-2, 1, 1), North, 17),
    ((-2, 1, 1), NorthEast, 15),
    ((-2, 1, 1), NorthWest, 39),
    ((-2, 1, 1), South, 37),
    ((-2, 1, 1), SouthEast, 14),
    ((-2, 1, 1), SouthWest, 38),
    ((-2, 2, 0), North, 40),
    ((-2, 2, 0), NorthEast, 18),
    ((-2, 2, 0), NorthWest, 42),
    ((-2, 2, 0), South, 39),
    ((-2, 2, 0), SouthEast, 17),
    ((-2, 2, 0), SouthWest, 41),
    ((-2, 3, -1), North, 79),
    ((-2, 3, -1), NorthEast, 44),
    ((-2, 3, -1), NorthWest, 80),
    ((-2, 3, -1), South, 42),
    ((-2, 3, -1), SouthEast, 40),
    ((-2, 3, -1), SouthWest, 76),
    ((-1, -2, 3), North, 32),
    ((-1, -2, 3), NorthEast, 31),
    ((-1, -2, 3), NorthWest, 33),
    ((-1, -2, 3), South, 65),
    ((-1, -2, 3), SouthEast, 64),
    ((-1, -2, 3), SouthWest, 66),
    ((-1, -1, 2), North, 12),
    ((-1, -1, 2), NorthEast, 11),
    ((-1, -1, 2), NorthWest, 13),
    ((-1, -1, 2), South, 33),
    ((-1, -1, 2), SouthEast, 32),
    ((-1, -1, 2), SouthWest, 34),
    ((-1, 0, 1), North, 4),
    ((-1, 0, 1), NorthEast, 3),
    ((-1, 0, 1), NorthWest, 15),
    ((-1, 0, 1), South, 13),
    ((-1, 0, 1), SouthEast, 12),
    ((-1, 0, 1), SouthWest, 14),
    ((-1, 1, 0), North, 16),
    ((-1, 1, 0), NorthEast, 5),
    ((-1, 1, 0), NorthWest, 18),
    ((-1, 1, 0), South, 15),
    ((-1, 1, 0), SouthEast, 4),
    ((-1, 1, 0), SouthWest, 17),
    ((-1, 2, -1), North, 43),
    ((-1, 2, -1), NorthEast, 21),
    ((-1, 2, -1), NorthWest, 44),
    ((-1, 2, -1), South, 18),
    ((-1, 2, -1), SouthEast, 16),
    ((-1, 2, -1), SouthWest, 40),
    ((-1, 3, -2), North, 81),
    ((-1, 3, -2), NorthEast, 47),
    ((-1, 3, -2), NorthWest, 82),
    ((-1, 3, -2), South, 44),
    ((-1, 3, -2), SouthEast, 43),
    ((-1, 3, -2), SouthWest, 79),
    ((0, -3, 3), North, 30),
    ((0, -3, 3), NorthEast, 61),
    ((0, -3, 3), NorthWest, 31),
    ((0, -3, 3), South, 63),
    ((0, -3, 3), SouthEast, 62),
    ((0, -3, 3), SouthWest, 64),
    ((0, -2, 2), North, 10),
    ((0, -2, 2), NorthEast, 29),
    ((0, -2, 2), NorthWest, 11),
    ((0, -2, 2), South, 31),
    ((0, -2, 2), SouthEast, 30),
    ((0, -2, 2), SouthWest, 32),
    ((0, -1, 1), North, 2),
    ((0, -1, 1), NorthEast, 9),
    ((0, -1, 1), NorthWest, 3),
    ((0, -1, 1), South, 11),
    ((0, -1, 1), SouthEast, 10),
    ((0, -1, 1), SouthWest, 12),
    ((0, 0, 0), North, 0),
    ((0, 0, 0), NorthEast, 1),
    ((0, 0, 0), NorthWest, 5),
    ((0, 0, 0), South, 3),
    ((0, 0, 0), SouthEast, 2),
    ((0, 0, 0), SouthWest, 4),
    ((0, 1, -1), North, 19),
    ((0, 1, -1), NorthEast, 20),
    ((0, 1, -1), NorthWest, 21),
    ((0, 1, -1), South, 5),
    ((0, 1, -1), SouthEast, 0),
    ((0, 1, -1), SouthWest, 16),
    ((0, 2, -2), North, 45),
    ((0, 2, -2), NorthEast, 46),
    ((0, 2, -2), NorthWest, 47),
    ((0, 2, -2), South, 21),
    ((0, 2, -2), SouthEast, 19),
    ((0, 2, -2), SouthWest, 43),
    ((0, 3, -3), North, 83),
    ((0, 3, -3), NorthEast, 84),
    ((0, 3, -3), NorthWest, 85),
    ((0, 3, -3), South, 47),
    ((0, 3, -3), SouthEast, 45),
    ((0, 3, -3), SouthWest, 81),
    ((1, -3, 2), North, 28),
    ((1, -3, 2), NorthEast, 59),
    ((1, -3, 2), NorthWest, 29),
    ((1, -3, 2), South, 61),
    ((1, -3, 2), SouthEast, 60),
    ((1, -3, 2), SouthWest, 30),
    ((1, -2, 1), North, 8),
    ((1, -2, 1), NorthEast, 27),
    ((1, -2, 1), NorthWest, 9),
    ((1, -2, 1), South, 29),
    ((1, -2, 1), SouthEast, 28),
    ((1, -2, 1), SouthWest, 10),
    ((1, -1, 0), North, 6),
    ((1, -1, 0), NorthEast, 7),
    ((1, -1, 0), NorthWest, 1),
    ((1, -1, 0), South, 9),
    ((1, -1, 0), SouthEast, 8),
    ((1, -1, 0), SouthWest, 2),
    ((1, 0, -1), North, 22),
    ((1, 0, -1), NorthEast, 23),
    ((1, 0, -1), NorthWest, 20),
    ((1, 0, -1), South, 1),
    ((1, 0, -1), SouthEast, 6),
    ((1, 0, -1), SouthWest, 0),
    ((1, 1, -2), North, 48),
    ((1, 1, -2), NorthEast, 49),
    ((1, 1, -2), NorthWest, 46),
    ((1, 1, -2), South, 20),
    ((1, 1, -2), SouthEast, 22),
    ((1, 1, -2), SouthWest, 19),
    ((1, 2, -3), North, 86),
    ((1, 2, -3), NorthEast, 87),
    ((1, 2, -3), NorthWest, 84),
    ((1, 2, -3), South, 46),
    ((1, 2, -3), SouthEast, 48),
    ((1, 2, -3), SouthWest, 45),
    ((2, -3, 1), North, 26),
    ((2, -3, 1), NorthEast, 57),
    ((2, -3, 1), NorthWest, 27),
    ((2, -3, 1), South, 59),
    ((2, -3, 1), SouthEast, 58),
    ((2, -3, 1), SouthWest, 28),
    ((2, -2, 0), North, 24),
    ((2, -2, 0), NorthEast, 25),
    ((2, -2, 0), NorthWest, 7),
    ((2, -2, 0), South, 27),
    ((2, -2, 0), SouthEast, 26),
    ((2, -2, 0), SouthWest, 8),
    ((2, -1, -1), North, 52),
    ((2, -1, -1), NorthEast, 53),
    ((2, -1, -1), NorthWest, 23),
    ((2, -1, -1), South, 7),
    ((2, -1, -1), SouthEast, 24),
    ((2, -1, -1), SouthWest, 6),
    ((2, 0, -2), North, 50),
    ((2, 0, -2), NorthEast, 51),
    ((2, 0, -2), NorthWest, 49),
    ((2, 0, -2), South, 23),
    ((2, 0, -2), SouthEast, 52),
    ((2, 0, -2), SouthWest, 22),
    ((2, 1, -3), North, 88),
    ((2, 1, -3), NorthEast, 89),
    ((2, 1, -3), NorthWest, 87),
    ((2, 1, -3), South, 49),
    ((2, 1, -3), SouthEast, 50),
    ((2, 1, -3), SouthWest, 48),
    ((3, -3, 0), North, 54),
    ((3, -3, 0), NorthEast, 55),
    ((3, -3, 0), NorthWest, 25),
    ((3, -3, 0), South, 57),
    ((3, -3, 0), SouthEast, 56),
    ((3, -3, 0), SouthWest, 26),
    ((3, -2, -1), North, 94),
    ((3, -2, -1), NorthEast, 95),
    ((3, -2, -1), NorthWest, 53),
    ((3, -2, -1), South, 25),
    ((3, -2, -1), SouthEast, 54),
    ((3, -2, -1), SouthWest, 24),
    ((3, -1, -2), North, 92),
    ((3, -1, -2), NorthEast, 93),
    ((3, -1, -2), NorthWest, 51),
    ((3, -1, -2), South, 53),
    ((3, -1, -2), SouthEast, 94),
    ((3, -1, -2), SouthWest, 52),
    ((3, 0, -3), North, 90),
    ((3, 0, -3), NorthEast, 91),
    ((3, 0, -3), NorthWest, 89),
    ((3, 0, -3), South, 51),
    ((3, 0, -3), SouthEast, 92),
    ((3, 0, -3), SouthWest, 50),
];

/// Node assignments for [`MINI_TILES`].
pub(super) const MINI_NODE_IDS: [NodeRow; 114] = [
    ((-2, 0, 2), North, 14),
    ((-2, 0, 2), NorthEast, 13),
    ((-2, 0, 2), NorthWest, 37),
    ((-2, 0, 2), South, 35),
    ((-2, 0, 2), SouthEast, 34),
    ((-2, 0, 2), SouthWest, 36),
    ((-2, 1, 1), North, 17),
    ((-2, 1, 1), NorthEast, 15),
    ((-2, 1, 1), NorthWest, 39),
    ((-2, 1, 1), South, 37),
    ((-2, 1, 1), SouthEast, 14),
    ((-2, 1, 1), SouthWest, 38),
    ((-2, 2, 0), North, 40),
    ((-2, 2, 0), NorthEast, 18),
    ((-2, 2, 0), NorthWest, 42),
    ((-2, 2, 0), South, 39),
    ((-2, 2, 0), SouthEast, 17),
    ((-2, 2, 0), SouthWest, 41),
    ((-1, -1, 2), North, 12),
    ((-1, -1, 2), NorthEast, 11),
    ((-1, -1, 2), NorthWest, 13),
    ((-1, -1, 2), South, 33),
    ((-1, -1, 2), SouthEast, 32),
    ((-1, -1, 2), SouthWest, 34),
    ((-1, 0, 1), North, 4),
    ((-1, 0, 1), NorthEast, 3),
    ((-1, 0, 1), NorthWest, 15),
    ((-1, 0, 1), South, 13),
    ((-1, 0, 1), SouthEast, 12),
    ((-1, 0, 1), SouthWest, 14),
    ((-1, 1, 0), North, 16),
    ((-1, 1, 0), NorthEast, 5),
    ((-1, 1, 0), NorthWest, 18),
    ((-1, 1, 0), South, 15),
    ((-1, 1, 0), SouthEast, 4),
    ((-1, 1, 0), SouthWest, 17),
    ((-1, 2, -1), North, 43),
    ((-1, 2, -1), NorthEast, 21),
    ((-1, 2, -1), NorthWest, 44),
    ((-1, 2, -1), South, 18),
    ((-1, 2, -1), SouthEast, 16),
    ((-1, 2, -1), SouthWest, 40),
    ((0, -2, 2), North, 10),
    ((0, -2, 2), NorthEast, 29),
    ((0, -2, 2), NorthWest, 11),
    ((0, -2, 2), South, 31),
    ((0, -2, 2), SouthEast, 30),
    ((0, -2, 2), SouthWest, 32),
    ((0, -1, 1), North, 2),
    ((0, -1, 1), NorthEast, 9),
    ((0, -1, 1), NorthWest, 3),
    ((0, -1, 1), South, 11),
    ((0, -1, 1), SouthEast, 10),
    ((0, -1, 1), SouthWest, 12),
    ((0, 0, 0), North, 0),
    ((0, 0, 0), NorthEast, 1),
    ((0, 0, 0), NorthWest, 5),
    ((0, 0, 0), South, 3),
    ((0, 0, 0), SouthEast, 2),
    ((0, 0, 0), SouthWest, 4),
    ((0, 1, -1), North, 19),
    ((0, 1, -1), NorthEast, 20),
    ((0, 1, -1), NorthWest, 21),
    ((0, 1, -1), South, 5),
    ((0, 1, -1), SouthEast, 0),
    ((0, 1, -1), SouthWest, 16),
    ((0, 2, -2), North, 45),
    ((0, 2, -2), NorthEast, 46),
    ((0, 2, -2), NorthWest, 47),
    ((0, 2, -2), South, 21),
    ((0, 2, -2), SouthEast, 19),
    ((0, 2, -2), SouthWest, 43),
    ((1, -2, 1), North, 8),
    ((1, -2, 1), NorthEast, 27),
    ((1, -2, 1), NorthWest, 9),
    ((1, -2, 1), South, 29),
    ((1, -2, 1), SouthEast, 28),
    ((1, -2, 1), SouthWest, 10),
    ((1, -1, 0), North, 6),
    ((1, -1, 0), NorthEast, 7),
    ((1, -1, 0), NorthWest, 1),
    ((1, -1, 0), South, 9),
    ((1, -1, 0), SouthEast, 8),
    ((1, -1, 0), SouthWest, 2),
    ((1, 0, -1), North, 22),
    ((1, 0, -1), NorthEast, 23),
    ((1, 0, -1), NorthWest, 20),
    ((1, 0, -1), South, 1),
    ((1, 0, -1), SouthEast, 6),
    ((1, 0, -1), SouthWest, 0),
    ((1, 1, -2), North, 48),
    ((1, 1, -2), NorthEast, 49),
    ((1, 1, -2), NorthWest, 46),
    ((1, 1, -2), South, 20),
    ((1, 1, -2), SouthEast, 22),
    ((1, 1, -2), SouthWest, 19),
    ((2, -2, 0), North, 24),
    ((2, -2, 0), NorthEast, 25),
    ((2, -2, 0), NorthWest, 7),
    ((2, -2, 0), South, 27),
    ((2, -2, 0), SouthEast, 26),
    ((2, -2, 0), SouthWest, 8),
    ((2, -1, -1), North, 52),
    ((2, -1, -1), NorthEast, 53),
    ((2, -1, -1), NorthWest, 23),
    ((2, -1, -1), South, 7),
    ((2, -1, -1), SouthEast, 24),
    ((2, -1, -1), SouthWest, 6),
    ((2, 0, -2), North, 50),
    ((2, 0, -2), NorthEast, 51),
    ((2, 0, -2), NorthWest, 49),
    ((2, 0, -2), South, 23),
    ((2, 0, -2), SouthEast, 52),
    ((2, 0, -2), SouthWest, 22),
];
