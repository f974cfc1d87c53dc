pub mod hexagon;
pub mod node_direction;

pub use hexagon::{center_of, corners_of, node_position, shared_corners};
pub use node_direction::NodeDirection;
