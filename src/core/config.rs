//! Game configuration and the static card/role catalog.
//!
//! Nothing here is global. A `GameConfig` is built once (usually from
//! `Catalog::standard()`, or from JSON) and passed by reference to the deck
//! builder, the board and every round.

use serde::{Deserialize, Serialize};

use crate::cards::{Connections, Direction, Stance};
use crate::error::{Result, RulesError};

fn one() -> usize {
    1
}

fn all_open() -> Connections {
    Connections::ALL_OPEN
}

/// A tunnel tile design and how many copies the deck holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTemplate {
    pub name: String,
    pub connections: Connections,
    #[serde(default = "one")]
    pub number: usize,
}

impl PathTemplate {
    pub fn new(name: impl Into<String>, connections: Connections, number: usize) -> Self {
        Self {
            name: name.into(),
            connections,
            number,
        }
    }
}

/// An action card design and how many copies the deck holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTemplate {
    pub name: String,
    pub stance: Stance,
    #[serde(default = "one")]
    pub number: usize,
}

impl ActionTemplate {
    pub fn new(name: impl Into<String>, stance: Stance, number: usize) -> Self {
        Self {
            name: name.into(),
            stance,
            number,
        }
    }
}

/// A role and how many copies the role pool holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub team: String,
    #[serde(default = "one")]
    pub number: usize,
}

impl RoleTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        team: impl Into<String>,
        number: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            team: team.into(),
            number,
        }
    }
}

/// The real face of one goal tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTemplate {
    pub name: String,
    pub connections: Connections,
}

impl GoalTemplate {
    pub fn new(name: impl Into<String>, connections: Connections) -> Self {
        Self {
            name: name.into(),
            connections,
        }
    }
}

/// Static data the rules draw from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Edges of the Start tile.
    pub start: Connections,
    /// Edges a face-down goal shows.
    #[serde(default = "all_open")]
    pub goal_placeholder: Connections,
    /// The three goal faces, in catalog order.
    pub goals: Vec<GoalTemplate>,
    pub path_cards: Vec<PathTemplate>,
    #[serde(default)]
    pub action_cards: Vec<ActionTemplate>,
    pub roles: Vec<RoleTemplate>,
}

impl Catalog {
    /// Number of goal tiles on every board.
    pub const GOAL_COUNT: usize = 3;

    /// The stock card set.
    #[must_use]
    pub fn standard() -> Self {
        use Direction::{Down, Left, Right, Up};

        let open = Connections::open_on;
        let path_cards = vec![
            PathTemplate::new("VERTICAL", open(&[Up, Down]), 4),
            PathTemplate::new("HORIZONTAL", open(&[Left, Right]), 3),
            PathTemplate::new("CROSS", Connections::ALL_OPEN, 5),
            PathTemplate::new("T_VERTICAL", open(&[Up, Right, Down]), 5),
            PathTemplate::new("T_HORIZONTAL", open(&[Up, Right, Left]), 5),
            PathTemplate::new("CURVE_LEFT", open(&[Down, Left]), 4),
            PathTemplate::new("CURVE_RIGHT", open(&[Right, Down]), 5),
            // Dead ends: edges open, centre blocked
            PathTemplate::new("DEAD_END_CROSS", Connections::new(-1, -1, -1, -1), 1),
            PathTemplate::new("DEAD_END_T_VERTICAL", Connections::new(-1, -1, -1, 0), 1),
            PathTemplate::new("DEAD_END_T_HORIZONTAL", Connections::new(-1, -1, 0, -1), 1),
            PathTemplate::new("DEAD_END_VERTICAL", Connections::new(-1, 0, -1, 0), 1),
            PathTemplate::new("DEAD_END_HORIZONTAL", Connections::new(0, -1, 0, -1), 1),
            PathTemplate::new("DEAD_END_CURVE_LEFT", Connections::new(0, 0, -1, -1), 1),
            PathTemplate::new("DEAD_END_CURVE_RIGHT", Connections::new(0, -1, -1, 0), 1),
            PathTemplate::new("DEAD_END_DOWN", Connections::new(0, 0, -1, 0), 1),
            PathTemplate::new("DEAD_END_RIGHT", Connections::new(0, -1, 0, 0), 1),
        ];

        let action_cards = vec![
            ActionTemplate::new("BROKEN_PICKAXE", Stance::Offensive, 3),
            ActionTemplate::new("BROKEN_LANTERN", Stance::Offensive, 3),
            ActionTemplate::new("BROKEN_CART", Stance::Offensive, 3),
            ActionTemplate::new("REPAIR_PICKAXE", Stance::Defensive, 2),
            ActionTemplate::new("REPAIR_LANTERN", Stance::Defensive, 2),
            ActionTemplate::new("REPAIR_CART", Stance::Defensive, 2),
            ActionTemplate::new("REPAIR_PICKAXE_LANTERN", Stance::Defensive, 1),
            ActionTemplate::new("REPAIR_PICKAXE_CART", Stance::Defensive, 1),
            ActionTemplate::new("REPAIR_LANTERN_CART", Stance::Defensive, 1),
            ActionTemplate::new("MAP", Stance::Neutral, 6),
            ActionTemplate::new("ROCKFALL", Stance::Neutral, 3),
        ];

        let roles = vec![
            RoleTemplate::new("SabOOter", "Keeps the tunnel away from the gold.", "SabOOter", 3),
            RoleTemplate::new("Profiteur", "Wins with whichever side wins.", "Neutral", 1),
            RoleTemplate::new("GreenDwarf", "Digs for the green team.", "Green", 4),
            RoleTemplate::new("BlueDwarf", "Digs for the blue team.", "Blue", 4),
            RoleTemplate::new("Boss", "Digs for both teams.", "Dwarves", 1),
            RoleTemplate::new("Geologist", "Collects crystals, not gold.", "Neutral", 2),
        ];

        Self {
            start: Connections::ALL_OPEN,
            goal_placeholder: Connections::ALL_OPEN,
            goals: vec![
                GoalTemplate::new("GOAL_TOP_LEFT", open(&[Up, Left])),
                GoalTemplate::new("GOAL_TOP_RIGHT", open(&[Up, Right])),
                GoalTemplate::new("GOAL_REAL_END", Connections::ALL_OPEN),
            ],
            path_cards,
            action_cards,
            roles,
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| RulesError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural requirements the board and deck rely on.
    pub fn validate(&self) -> Result<()> {
        if self.goals.len() != Self::GOAL_COUNT {
            return Err(RulesError::Catalog(format!(
                "expected {} goals, found {}",
                Self::GOAL_COUNT,
                self.goals.len()
            )));
        }
        if self.path_cards.iter().all(|t| t.number == 0) {
            return Err(RulesError::Catalog("no path cards".to_string()));
        }
        if self.roles.iter().all(|t| t.number == 0) {
            return Err(RulesError::Catalog("no roles".to_string()));
        }
        Ok(())
    }

    /// Total number of roles in the pool.
    #[must_use]
    pub fn role_pool_size(&self) -> usize {
        self.roles.iter().map(|t| t.number).sum()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player at round start.
    pub hand_size: usize,
    /// Cards dropped from the top of the freshly shuffled deck.
    pub cards_to_remove: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// Rounds in a full game.
    pub rounds: u32,
    pub catalog: Catalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl GameConfig {
    /// Create with stock settings around the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            hand_size: 6,
            cards_to_remove: 10,
            min_players: 3,
            max_players: 9,
            rounds: 3,
            catalog,
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_cards_to_remove(mut self, count: usize) -> Self {
        self.cards_to_remove = count;
        self
    }

    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "Must allow at least 1 player");
        assert!(min <= max, "Minimum players above maximum");
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}
