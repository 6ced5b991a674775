//! The board: an expandable grid of path tiles with placement checks.
//!
//! ## Key Types
//!
//! - `Board`: the grid, its growth, and placement legality
//! - `PlacementRejection`: why a tile was refused
//! - `Position`: a (row, column) cell coordinate

pub mod grid;
pub mod placement;

pub use grid::{shuffled_goals, Board, Placement, Position};
pub use placement::PlacementRejection;
