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
//! A single square of a grid and its state machine.
use std::fmt;

use crate::{
    board::{CannotShootReason, SquareError},
    ships::Boat,
};

/// State of a [`Square`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SquareStatus {
    /// Nothing is on the square and it has not been shot.
    Empty,
    /// A boat is on the square and it has not been shot.
    Occupied,
    /// The square was shot and a boat was there, or a hit was forced onto it.
    Hit,
    /// The square was shot and nothing was there.
    Miss,
}

impl Default for SquareStatus {
    fn default() -> Self {
        SquareStatus::Empty
    }
}

/// A single square in a player's grid.
///
/// `Hit` and `Miss` are terminal: once a square has been shot only [`Square::force_hit`]
/// can still change it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Square {
    status: SquareStatus,

    /// The boat that occupies (or occupied, once hit) this square, if any.
    boat: Option<Boat>,
}

impl Square {
    /// Construct an empty square.
    pub fn new() -> Self {
        Default::default()
    }

    /// Current state of the square.
    pub fn status(&self) -> SquareStatus {
        self.status
    }

    /// The boat on this square. Still set after the boat was hit here.
    pub fn boat(&self) -> Option<Boat> {
        self.boat
    }

    /// Put the given boat on this square. Only empty squares accept a boat.
    pub fn place_boat(&mut self, boat: Boat) -> Result<(), SquareError> {
        match self.status {
            SquareStatus::Empty => {
                self.status = SquareStatus::Occupied;
                self.boat = Some(boat);
                Ok(())
            }
            SquareStatus::Occupied => Err(SquareError::Occupied),
            SquareStatus::Hit => Err(SquareError::AlreadyHit),
            SquareStatus::Miss => Err(SquareError::AlreadyMissed),
        }
    }

    /// Record a missed shot on this square. Fails if a boat is here.
    pub fn miss(&mut self) -> Result<(), SquareError> {
        match self.status {
            SquareStatus::Empty => {
                self.status = SquareStatus::Miss;
                Ok(())
            }
            SquareStatus::Occupied => Err(SquareError::MissOnBoat),
            SquareStatus::Hit => Err(SquareError::AlreadyHit),
            SquareStatus::Miss => Err(SquareError::AlreadyMissed),
        }
    }

    /// Record a hit on the boat on this square. Fails if there is no boat here.
    pub fn hit(&mut self) -> Result<(), SquareError> {
        match self.status {
            SquareStatus::Occupied => {
                self.status = SquareStatus::Hit;
                Ok(())
            }
            SquareStatus::Empty => Err(SquareError::HitWithoutBoat),
            SquareStatus::Hit => Err(SquareError::AlreadyHit),
            SquareStatus::Miss => Err(SquareError::AlreadyMissed),
        }
    }

    /// Mark this square as hit whatever it held before. Used to mirror a hit that was
    /// confirmed on another grid.
    pub fn force_hit(&mut self) {
        self.status = SquareStatus::Hit;
    }

    /// Shoot this square: a miss if it is empty, a hit if it holds a boat. Returns the
    /// new status.
    pub(crate) fn shoot(&mut self) -> Result<SquareStatus, CannotShootReason> {
        self.status = match self.status {
            SquareStatus::Empty => SquareStatus::Miss,
            SquareStatus::Occupied => SquareStatus::Hit,
            SquareStatus::Hit => return Err(CannotShootReason::AlreadyHit),
            SquareStatus::Miss => return Err(CannotShootReason::AlreadyMissed),
        };
        Ok(self.status)
    }

    /// Whether an un-hit boat is on this square.
    pub fn has_a_boat(&self) -> bool {
        self.status == SquareStatus::Occupied && self.boat.is_some()
    }

    /// Whether this square has been hit.
    pub fn has_been_hit(&self) -> bool {
        self.status == SquareStatus::Hit
    }

    /// Whether this square can still be shot.
    pub fn can_be_hit(&self) -> bool {
        self.is_empty() || self.has_a_boat()
    }

    /// Whether nothing is on this square and it has not been shot.
    pub fn is_empty(&self) -> bool {
        self.status == SquareStatus::Empty
    }
}

impl fmt::Display for Square {
    /// Glyph of the square: the boat id, `X` for a hit, `O` for a miss and a space when
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.status, self.boat) {
            (SquareStatus::Empty, _) => f.write_str(" "),
            (SquareStatus::Hit, _) => f.write_str("X"),
            (SquareStatus::Miss, _) => f.write_str("O"),
            (SquareStatus::Occupied, Some(boat)) => write!(f, "{}", boat.id()),
            (SquareStatus::Occupied, None) => f.write_str("B"),
        }
    }
}
