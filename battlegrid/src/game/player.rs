// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Bookkeeping for one side of the game: their own grid, the grid tracking their shots,
//! and the boats they still have to place.

use std::fmt;

use log::trace;
use rand::Rng;

use crate::{
    board::{Grid, InvalidSizeError, Location, ShotError, SquareStatus, TargetGrid},
    game::PlayerError,
    ships::Boat,
};

/// A single player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Grid holding this player's boats. The opponent shoots at it.
    grid: Grid,

    /// Outcomes of this player's shots at the opponent.
    target_grid: TargetGrid,

    /// Boats not placed yet, in catalog order. Placement takes them from the end.
    initial_boats: Vec<Boat>,

    /// Set once every boat of the catalog was placed.
    placed_boats: bool,
}

impl Player {
    /// Create a player with two empty grids of the given size and the full catalog of
    /// boats to place.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        Ok(Self {
            grid: Grid::new(size)?,
            target_grid: TargetGrid::new(size)?,
            initial_boats: Boat::ALL.to_vec(),
            placed_boats: false,
        })
    }

    /// The grid holding this player's boats.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid holding this player's boats.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The outcomes of this player's shots.
    pub fn target_grid(&self) -> &TargetGrid {
        &self.target_grid
    }

    /// Boats that still have to be placed.
    pub fn remaining_boats(&self) -> &[Boat] {
        &self.initial_boats
    }

    /// Whether every boat was placed.
    pub fn has_placed_boats(&self) -> bool {
        self.placed_boats
    }

    /// Place every remaining boat at a random position, last catalog entry first. If a
    /// boat fits nowhere, it stays in [`remaining_boats`][Self::remaining_boats] along
    /// with every boat before it.
    pub fn place_boats(&mut self, rng: &mut impl Rng) -> Result<(), PlayerError> {
        while let Some(&boat) = self.initial_boats.last() {
            let placement = self.grid.random_boat_placement(boat, rng)?;
            self.grid
                .place_boat(boat, placement.location, placement.direction)?;
            trace!("placed {} at {}", boat, placement);
            self.initial_boats.pop();
        }
        self.placed_boats = true;
        Ok(())
    }

    /// Choose where to shoot next: a random location that has not been shot yet.
    pub fn get_hit(&self, rng: &mut impl Rng) -> Result<Location, PlayerError> {
        if !self.placed_boats {
            return Err(PlayerError::BoatsNotPlaced);
        }
        Ok(self.target_grid.random_free_location(rng)?)
    }

    /// Record the outcome of a shot this player fired at the opponent.
    pub fn record_hit(
        &mut self,
        location: Location,
        outcome: SquareStatus,
    ) -> Result<SquareStatus, ShotError> {
        self.target_grid.record(location, outcome)
    }

    /// Returns true once the boats were placed and every one of them was hit.
    pub fn did_lose(&self) -> bool {
        self.placed_boats && !self.grid.has_floating_boats()
    }
}

impl fmt::Display for Player {
    /// The target grid, a blank line, then the player's own grid.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n\n{}", self.target_grid, self.grid)
    }
}
