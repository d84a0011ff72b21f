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
//! A player's record of the shots they fired at their opponent.

use std::fmt;

use rand::Rng;

use crate::board::{
    CannotShootReason, Grid, InvalidSizeError, Location, NoFreeLocationError, ShotError,
    SquareStatus,
};

/// Grid mirroring the outcomes of shots fired at the opponent. No boat is ever placed on
/// it: hits are forced onto empty squares and misses go through the regular shot path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TargetGrid {
    grid: Grid,
}

impl TargetGrid {
    /// Construct an empty target grid.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        Grid::new(size).map(|grid| Self { grid })
    }

    /// The recorded outcomes.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Record the outcome of a shot at `location`. [`SquareStatus::Hit`] is recorded as
    /// a hit, anything else as a miss. Each location can only be recorded once.
    pub fn record(
        &mut self,
        location: Location,
        outcome: SquareStatus,
    ) -> Result<SquareStatus, ShotError> {
        if outcome != SquareStatus::Hit {
            return self.grid.hit_at(location);
        }
        match self.grid.square(location).map(|square| square.status()) {
            Some(SquareStatus::Hit) => Err(ShotError::new(CannotShootReason::AlreadyHit, location)),
            Some(SquareStatus::Miss) => {
                Err(ShotError::new(CannotShootReason::AlreadyMissed, location))
            }
            _ => self.grid.force_hit_at(location),
        }
    }

    /// Pick a uniformly random location that has no recorded outcome yet.
    pub fn random_free_location(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Location, NoFreeLocationError> {
        self.grid.random_free_location(rng)
    }
}

impl fmt::Display for TargetGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
