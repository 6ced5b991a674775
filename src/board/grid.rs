//! The shared tunnel grid.
//!
//! ## Layout
//!
//! A fresh board is 5 rows by 7 columns. The Start tile sits at (2, 0) and
//! the three face-down goals at column 6, rows 0, 2 and 4, in an order
//! drawn at random.
//!
//! ## Growth
//!
//! The grid grows one row or column at a time. Growing UP or LEFT inserts
//! before index 0, so every existing coordinate (and the recorded start
//! position) moves by one on that axis. Growing DOWN or RIGHT only raises
//! the bound.
//!
//! ## Placement
//!
//! `place_card` grows the board first when the target is exactly one step
//! outside it, then checks occupancy and edge agreement with every
//! occupied neighbour. The growth is not undone when the tile is then
//! refused.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::placement::PlacementRejection;
use crate::cards::{Direction, PathCard};
use crate::core::config::{Catalog, GoalTemplate};
use crate::core::rng::GameRng;

/// A (row, column) board coordinate.
pub type Position = (usize, usize);

/// Placement outcome: `Ok(())` or the reason for refusal.
pub type Placement = Result<(), PlacementRejection>;

/// Expandable grid of optional path tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    start_position: Position,
    grid: Vec<Vec<Option<PathCard>>>,
}

impl Board {
    pub const INITIAL_ROWS: usize = 5;
    pub const INITIAL_COLUMNS: usize = 7;
    pub const START_POSITION: Position = (2, 0);
    pub const GOAL_COLUMN: usize = 6;
    pub const GOAL_ROWS: [usize; 3] = [0, 2, 4];

    /// Lay out a fresh board from the catalog, drawing the goal order from
    /// `rng`.
    pub fn new(catalog: &Catalog, rng: &mut GameRng) -> Self {
        let goals = shuffled_goals(&catalog.goals, rng)
            .into_iter()
            .map(|g| PathCard::goal_with_placeholder(g.name, g.connections, catalog.goal_placeholder))
            .collect();
        Self::with_goals(PathCard::start(catalog.start), goals)
    }

    /// Lay out a fresh board with goals in the given order (top to bottom).
    ///
    /// Goals beyond the three goal rows are ignored.
    #[must_use]
    pub fn with_goals(start: PathCard, goals: Vec<PathCard>) -> Self {
        let mut grid = vec![vec![None; Self::INITIAL_COLUMNS]; Self::INITIAL_ROWS];
        let (start_row, start_col) = Self::START_POSITION;
        grid[start_row][start_col] = Some(start);
        for (goal, row) in goals.into_iter().zip(Self::GOAL_ROWS) {
            grid[row][Self::GOAL_COLUMN] = Some(goal);
        }

        Self {
            rows: Self::INITIAL_ROWS,
            columns: Self::INITIAL_COLUMNS,
            start_position: Self::START_POSITION,
            grid,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Where the Start tile currently sits.
    #[must_use]
    pub fn start_position(&self) -> Position {
        self.start_position
    }

    /// Grow the grid by one empty row or column on the given edge.
    pub fn expand(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                self.grid.insert(0, vec![None; self.columns]);
                self.rows += 1;
                self.start_position.0 += 1;
            }
            Direction::Down => {
                self.grid.push(vec![None; self.columns]);
                self.rows += 1;
            }
            Direction::Left => {
                for row in &mut self.grid {
                    row.insert(0, None);
                }
                self.columns += 1;
                self.start_position.1 += 1;
            }
            Direction::Right => {
                for row in &mut self.grid {
                    row.push(None);
                }
                self.columns += 1;
            }
        }
        log::debug!(
            "board expanded {}: now {}x{}, start at {:?}",
            direction,
            self.rows,
            self.columns,
            self.start_position
        );
    }

    /// Place a tile, growing the board first if the target is one step
    /// outside it.
    ///
    /// Targets further out are refused with `OutOfBounds` and nothing
    /// changes. For a one-step-outside target the growth happens before the
    /// occupancy and connection checks and stays even if they refuse.
    pub fn place_card(&mut self, row: i64, column: i64, card: PathCard) -> Placement {
        let (row, column) = self.resolve_target(row, column)?;

        if self.grid[row][column].is_some() {
            log::trace!("placement at ({row}, {column}) refused: occupied");
            return Err(PlacementRejection::Occupied);
        }

        if let Err(rejection) = self.check_adjacent_connections(row, column, &card) {
            log::trace!("placement of {card} at ({row}, {column}) refused: {rejection}");
            return Err(rejection);
        }

        log::debug!("placed {card} at ({row}, {column})");
        self.grid[row][column] = Some(card);
        Ok(())
    }

    /// Map a requested coordinate into the grid, growing it by at most one
    /// row and one column.
    fn resolve_target(&mut self, row: i64, column: i64) -> Result<Position, PlacementRejection> {
        let rows = self.rows as i64;
        let columns = self.columns as i64;
        if !(-1..=rows).contains(&row) || !(-1..=columns).contains(&column) {
            return Err(PlacementRejection::OutOfBounds { row, column });
        }

        let row = if row == -1 {
            self.expand(Direction::Up);
            0
        } else {
            if row == rows {
                self.expand(Direction::Down);
            }
            row as usize
        };

        let column = if column == -1 {
            self.expand(Direction::Left);
            0
        } else {
            if column == columns {
                self.expand(Direction::Right);
            }
            column as usize
        };

        Ok((row, column))
    }

    /// Check that `card` at (row, column) agrees with every occupied
    /// neighbour and touches at least one.
    ///
    /// Neighbours are scanned UP, DOWN, LEFT, RIGHT; the first mismatch is
    /// the one reported.
    pub fn check_adjacent_connections(&self, row: usize, column: usize, card: &PathCard) -> Placement {
        let mut neighbours = 0;

        for direction in Direction::SCAN_ORDER {
            let Some(adjacent) = self
                .neighbour(row, column, direction)
                .and_then(|(r, c)| self.grid[r][c].as_ref())
            else {
                continue;
            };

            neighbours += 1;
            if !card.connections().matches(direction, adjacent.connections()) {
                return Err(PlacementRejection::ConnectionMismatch(direction));
            }
        }

        if neighbours == 0 {
            return Err(PlacementRejection::NoAdjacentTile);
        }
        Ok(())
    }

    /// Whether `card`, as it lies, could be placed anywhere: on an empty
    /// cell or one step outside the grid. Nothing changes.
    #[must_use]
    pub fn fits_anywhere(&self, card: &PathCard) -> bool {
        let rows = self.rows as i64;
        let columns = self.columns as i64;
        (-1..=rows)
            .flat_map(|r| (-1..=columns).map(move |c| (r, c)))
            .any(|(r, c)| self.fits_at(r, c, card))
    }

    fn fits_at(&self, row: i64, column: i64, card: &PathCard) -> bool {
        if self.in_bounds(row, column) {
            let (row, column) = (row as usize, column as usize);
            return self.grid[row][column].is_none()
                && self.check_adjacent_connections(row, column, card).is_ok();
        }
        // Outside the grid only the one cell back inside can touch it
        Direction::SCAN_ORDER.into_iter().any(|direction| {
            let (dr, dc) = direction.offset();
            self.get_card(row + dr, column + dc)
                .is_some_and(|next| card.connections().matches(direction, next.connections()))
        })
    }

    /// The in-bounds cell one step from (row, column), if any.
    #[must_use]
    pub fn neighbour(&self, row: usize, column: usize, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let r = row as i64 + dr;
        let c = column as i64 + dc;
        self.in_bounds(r, c).then(|| (r as usize, c as usize))
    }

    fn in_bounds(&self, row: i64, column: i64) -> bool {
        (0..self.rows as i64).contains(&row) && (0..self.columns as i64).contains(&column)
    }

    /// The tile at (row, column). Out-of-bounds coordinates read as empty.
    #[must_use]
    pub fn get_card(&self, row: i64, column: i64) -> Option<&PathCard> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.grid[row as usize][column as usize].as_ref()
    }

    /// Coordinates of every goal tile, top to bottom.
    #[must_use]
    pub fn goal_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, card)| card.is_goal())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Goal cells the tunnel network from Start has reached.
    ///
    /// The network spreads from the Start tile to a neighbour only when the
    /// two touching edges are both open. Goals end a branch: a path never
    /// runs on through a goal into the tiles beyond it.
    #[must_use]
    pub fn reached_goals(&self) -> Vec<Position> {
        let connected = self.connected_to_start();
        self.goal_positions()
            .into_iter()
            .filter(|pos| connected.contains(pos))
            .collect()
    }

    /// Every cell joined to Start through open, agreeing edges.
    fn connected_to_start(&self) -> FxHashSet<Position> {
        let mut seen = FxHashSet::default();
        let mut frontier = vec![self.start_position];
        seen.insert(self.start_position);

        while let Some((row, column)) = frontier.pop() {
            let Some(tile) = self.grid[row][column].as_ref() else {
                continue;
            };
            if tile.is_goal() {
                continue;
            }
            for direction in Direction::SCAN_ORDER {
                let Some((r, c)) = self.neighbour(row, column, direction) else {
                    continue;
                };
                let joined = self.grid[r][c].as_ref().is_some_and(|next| {
                    tile.is_open(direction) && next.is_open(direction.opposite())
                });
                if joined && seen.insert((r, c)) {
                    frontier.push((r, c));
                }
            }
        }
        seen
    }

    /// Turn the goal at (row, column) face-up. `None` if no goal is there.
    pub fn reveal_goal(&mut self, row: usize, column: usize) -> Option<&PathCard> {
        let card = self.grid.get_mut(row)?.get_mut(column)?.as_mut()?;
        if !card.is_goal() {
            return None;
        }
        card.reveal();
        Some(&*card)
    }

    /// Every occupied cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &PathCard)> {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.as_ref().map(|card| ((r, c), card)))
        })
    }
}

/// A random ordering of the goal faces.
pub fn shuffled_goals(goals: &[GoalTemplate], rng: &mut GameRng) -> Vec<GoalTemplate> {
    let mut order = goals.to_vec();
    rng.shuffle(&mut order);
    order
}
