//! Path tiles: the cards that go on the board.
//!
//! All path tiles share one representation. The `kind` tag says whether a
//! tile is the fixed Start tile, one of the face-down Goal tiles, or an
//! ordinary tunnel tile from the deck. Connection lookup and flipping work
//! on the exposed `connections` field the same way for every kind.
//!
//! ## Goal tiles
//!
//! A goal hides its real identity until revealed. While face-down it shows
//! the name `"GOAL"` and the placeholder connections (every edge open), so a
//! tunnel can be laid against it from any side.

use serde::{Deserialize, Serialize};

use super::connections::{Connections, Direction};

/// Identity of the Start tile.
pub const START_NAME: &str = "START";

/// Identity shown by a face-down goal.
pub const GOAL_NAME: &str = "GOAL";

/// What kind of path tile this is, with kind-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// The origin tile, placed once when the board is created.
    Start,
    /// A goal tile. The real values stay here until `reveal()`.
    Goal {
        real_name: String,
        real_connections: Connections,
        revealed: bool,
    },
    /// An ordinary tunnel tile dealt from the deck.
    Tunnel,
}

/// A tile that can sit in a board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathCard {
    name: String,
    connections: Connections,
    kind: PathKind,
}

impl PathCard {
    /// Create an ordinary tunnel tile.
    #[must_use]
    pub fn new(name: impl Into<String>, connections: Connections) -> Self {
        Self {
            name: name.into(),
            connections,
            kind: PathKind::Tunnel,
        }
    }

    /// Create the Start tile.
    #[must_use]
    pub fn start(connections: Connections) -> Self {
        Self {
            name: START_NAME.to_string(),
            connections,
            kind: PathKind::Start,
        }
    }

    /// Create a face-down goal showing the all-open placeholder.
    #[must_use]
    pub fn goal(real_name: impl Into<String>, real_connections: Connections) -> Self {
        Self::goal_with_placeholder(real_name, real_connections, Connections::ALL_OPEN)
    }

    /// Create a face-down goal showing a catalog-supplied placeholder.
    #[must_use]
    pub fn goal_with_placeholder(
        real_name: impl Into<String>,
        real_connections: Connections,
        placeholder: Connections,
    ) -> Self {
        Self {
            name: GOAL_NAME.to_string(),
            connections: placeholder,
            kind: PathKind::Goal {
                real_name: real_name.into(),
                real_connections,
                revealed: false,
            },
        }
    }

    /// Exposed identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exposed connections.
    #[must_use]
    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    #[must_use]
    pub fn kind(&self) -> &PathKind {
        &self.kind
    }

    /// Whether the exposed `side` edge is open.
    #[must_use]
    pub fn is_open(&self, side: Direction) -> bool {
        self.connections.is_open(side)
    }

    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self.kind, PathKind::Start)
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        matches!(self.kind, PathKind::Goal { .. })
    }

    /// Turn the tile 180 degrees.
    pub fn flip(&mut self) {
        self.connections = self.connections.flipped();
    }

    /// Real identity. For non-goal tiles this is just the name.
    #[must_use]
    pub fn read_real_name(&self) -> &str {
        match &self.kind {
            PathKind::Goal { real_name, .. } => real_name,
            _ => &self.name,
        }
    }

    /// Real connections. For non-goal tiles these are the exposed ones.
    #[must_use]
    pub fn real_connections(&self) -> &Connections {
        match &self.kind {
            PathKind::Goal {
                real_connections, ..
            } => real_connections,
            _ => &self.connections,
        }
    }

    /// Whether the tile shows its real face. Only goals can be hidden.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        match self.kind {
            PathKind::Goal { revealed, .. } => revealed,
            _ => true,
        }
    }

    /// Turn a goal face-up. Irreversible; a no-op for other kinds or
    /// goals already revealed.
    pub fn reveal(&mut self) {
        if let PathKind::Goal {
            real_name,
            real_connections,
            revealed,
        } = &mut self.kind
        {
            if !*revealed {
                *revealed = true;
                self.name = real_name.clone();
                self.connections = *real_connections;
            }
        }
    }
}

impl std::fmt::Display for PathCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
