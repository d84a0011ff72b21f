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
//! Turn-based play between two players.
//!
//! [`Player`] owns a player's grids and places their boats. [`Game`] alternates the two
//! players, resolves each shot on the opponent's grid and mirrors the outcome onto the
//! shooter's target grid until one fleet is entirely hit.

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{Location, SquareStatus},
    ships::Boat,
};

pub use self::{
    errors::{GameError, PlayerError, TurnError},
    player::Player,
};

mod errors;
mod player;

/// Size of the grids when none is specified.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Smallest grid size a game accepts.
pub const MIN_GRID_SIZE: usize = 6;

/// What happened during a single turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Number of the turn, starting from 1.
    pub turn: usize,
    /// Index of the player who fired.
    pub shooter: usize,
    /// Where the shot landed.
    pub location: Location,
    /// [`SquareStatus::Hit`] or [`SquareStatus::Miss`].
    pub status: SquareStatus,
    /// The boat that this shot sunk, if any.
    pub sunk: Option<Boat>,
}

/// A game between two computer players.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    /// The two players. Player 0 shoots first.
    players: [Player; 2],

    /// Number of turns played so far.
    turn_count: usize,

    /// Set once a player has lost every boat.
    ended: bool,

    /// Source of randomness for boat placement and target selection.
    rng: R,
}

impl Game<StdRng> {
    /// Create a game on `size` by `size` grids, seeded from system entropy.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game on `size` by `size` grids using the given random number generator.
    pub fn with_rng(size: usize, rng: R) -> Result<Self, GameError> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        Ok(Self {
            players: [Player::new(size)?, Player::new(size)?],
            turn_count: 0,
            ended: false,
            rng,
        })
    }

    /// Both players, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Number of turns played so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns true once a player has lost.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.turn_count % 2
    }

    /// Index of the player who won, if the game is over.
    pub fn winner(&self) -> Option<usize> {
        if self.ended {
            // The winner fired the last shot.
            Some((self.turn_count + 1) % 2)
        } else {
            None
        }
    }

    /// Have both players place their boats.
    ///
    /// Placement is not retried. If a boat finds no room, the error is returned and the
    /// grids keep the boats placed so far.
    pub fn setup(&mut self) -> Result<(), PlayerError> {
        for (i, player) in self.players.iter_mut().enumerate() {
            player.place_boats(&mut self.rng)?;
            debug!("player {} placed their boats:\n{}", i, player.grid());
        }
        Ok(())
    }

    /// Play one turn: the current player shoots at the opponent's grid and records the
    /// outcome on their target grid.
    pub fn turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.ended {
            return Err(TurnError::GameEnded);
        }
        let shooter = self.current_player();
        let [first, second] = &mut self.players;
        let (current, other) = if shooter == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let location = current.get_hit(&mut self.rng)?;
        let status = other.grid_mut().hit_at(location)?;
        current.record_hit(location, status)?;

        let sunk = match status {
            SquareStatus::Hit => other.grid()[location]
                .boat()
                .filter(|&boat| other.grid().is_boat_sunk(boat)),
            _ => None,
        };
        if other.did_lose() {
            self.ended = true;
        }
        self.turn_count += 1;

        debug!(
            "turn {}: player {} shot {}: {:?}",
            self.turn_count, shooter, location, status
        );
        if let Some(boat) = sunk {
            debug!("player {} sunk the {}", shooter, boat);
        }
        if self.ended {
            info!("player {} won after {} turns", shooter, self.turn_count);
        }

        Ok(TurnReport {
            turn: self.turn_count,
            shooter,
            location,
            status,
            sunk,
        })
    }
}
