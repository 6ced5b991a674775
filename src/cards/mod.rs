//! Card system: tiles, action cards, instances, roles and the deck.
//!
//! ## Key Types
//!
//! - `Connections` / `Direction`: tile edges and which are open
//! - `PathCard`: a board tile, tagged Start, Goal or Tunnel
//! - `ActionCard`: a card played on a player, with its `Stance`
//! - `Card` / `CardId`: a dealt card instance and its identity
//! - `Role`: a secret role, plus `all_roles` / `random_roles`
//! - `Deck`: the round's draw pile

pub mod action;
pub mod card;
pub mod connections;
pub mod deck;
pub mod path;
pub mod roles;

pub use action::{ActionCard, Stance};
pub use card::{Card, CardId, CardKind};
pub use connections::{Connections, Direction};
pub use deck::Deck;
pub use path::{PathCard, PathKind, GOAL_NAME, START_NAME};
pub use roles::{all_roles, random_roles, Role};
