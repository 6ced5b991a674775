//! Tile edges: directions and per-edge connection flags.
//!
//! A tile has four edges. Each edge either carries an open path or is a
//! wall. The catalog stores edges as small signed integers (dead-end tiles
//! use `-1`), but the rules only ever ask whether an edge is zero or not.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// One of the four cardinal directions on the board.
///
/// Used both for tile edges and for growing the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed scan order used by placement validation.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Row/column step for one move in this direction.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Upper-case name, as used in messages and catalogs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Direction::Up),
            "RIGHT" => Ok(Direction::Right),
            "DOWN" => Ok(Direction::Down),
            "LEFT" => Ok(Direction::Left),
            other => Err(RulesError::InvalidDirection(other.to_string())),
        }
    }
}

/// Connection flags for the four edges of a tile.
///
/// ```
/// use rust_saboteur::cards::{Connections, Direction};
///
/// let corner = Connections::new(1, 0, 0, 1);
/// assert!(corner.is_open(Direction::Up));
/// assert!(corner.is_open(Direction::Left));
/// assert!(!corner.is_open(Direction::Down));
///
/// let flipped = corner.flipped();
/// assert!(flipped.is_open(Direction::Down));
/// assert!(flipped.is_open(Direction::Right));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Connections {
    pub up: i8,
    pub right: i8,
    pub down: i8,
    pub left: i8,
}

impl Connections {
    /// Every edge open.
    pub const ALL_OPEN: Connections = Connections::new(1, 1, 1, 1);

    /// Every edge a wall.
    pub const CLOSED: Connections = Connections::new(0, 0, 0, 0);

    /// Create from edge values in clockwise order starting at the top.
    #[must_use]
    pub const fn new(up: i8, right: i8, down: i8, left: i8) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// Create with exactly the given edges open.
    #[must_use]
    pub fn open_on(directions: &[Direction]) -> Self {
        let mut connections = Self::CLOSED;
        for &direction in directions {
            *connections.edge_mut(direction) = 1;
        }
        connections
    }

    /// Raw value stored for an edge.
    #[must_use]
    pub const fn edge(&self, direction: Direction) -> i8 {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    fn edge_mut(&mut self, direction: Direction) -> &mut i8 {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
        }
    }

    /// Whether the edge carries a path. Magnitude and sign are ignored.
    #[must_use]
    pub const fn is_open(&self, direction: Direction) -> bool {
        self.edge(direction) != 0
    }

    /// The same tile turned 180 degrees.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self {
            up: self.down,
            right: self.left,
            down: self.up,
            left: self.right,
        }
    }

    /// Whether this tile's `side` edge agrees with `neighbor`'s facing edge.
    #[must_use]
    pub const fn matches(&self, side: Direction, neighbor: &Connections) -> bool {
        self.is_open(side) == neighbor.is_open(side.opposite())
    }
}
