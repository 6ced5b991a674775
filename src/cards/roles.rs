//! Secret roles dealt to players at the start of each round.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::config::RoleTemplate;
use crate::core::rng::GameRng;
use crate::error::{Result, RulesError};

/// A player's secret role.
///
/// Two roles are equal when name and team match; the description is
/// flavour text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub description: String,
    pub team: String,
}

impl Role {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            team: team.into(),
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.team == other.team
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.team.hash(state);
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Expand role templates into the full pool, one entry per copy.
#[must_use]
pub fn all_roles(templates: &[RoleTemplate]) -> Vec<Role> {
    templates
        .iter()
        .flat_map(|t| {
            std::iter::repeat_with(|| Role::new(&t.name, &t.description, &t.team)).take(t.number)
        })
        .collect()
}

/// Draw `count` roles from the pool without replacement.
///
/// Fails with `NotEnoughRoles` when the pool is smaller than `count`.
pub fn random_roles(templates: &[RoleTemplate], count: usize, rng: &mut GameRng) -> Result<Vec<Role>> {
    let mut pool = all_roles(templates);
    if count > pool.len() {
        return Err(RulesError::NotEnoughRoles {
            requested: count,
            available: pool.len(),
        });
    }
    rng.shuffle(&mut pool);
    pool.truncate(count);
    Ok(pool)
}
