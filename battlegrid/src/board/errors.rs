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
//! Errors used by the `Grid`, `TargetGrid` and `Square`.

use thiserror::Error;

use crate::{
    board::{Location, Placement},
    ships::Boat,
};

/// Error returned when constructing a grid with no squares.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("grid size must be positive, got {size}")]
pub struct InvalidSizeError {
    size: usize,
}

impl InvalidSizeError {
    pub(crate) fn new(size: usize) -> Self {
        Self { size }
    }

    /// The size that was rejected.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reason why a boat could not be placed with a given placement.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The origin of the placement is outside of the grid.
    #[error("the origin square is outside of the grid")]
    OriginOutOfBounds,
    /// Part of the boat would extend past the edge of the grid.
    #[error("the boat does not fit inside the grid")]
    OutOfBounds,
    /// One or more of the squares of the footprint already holds a boat.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a boat in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {boat} at {}: {reason}", .placement.location)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    boat: Boat,
    placement: Placement,
}

impl PlaceError {
    /// Construct a placement error from a reason, boat, and placement.
    pub(super) fn new(reason: CannotPlaceReason, boat: Boat, placement: Placement) -> Self {
        Self {
            reason,
            boat,
            placement,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the boat that was being placed.
    pub fn boat(&self) -> Boat {
        self.boat
    }

    /// Get the [`Placement`] where placement was attempted.
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Reason why a particular square could not be shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The square selected was out of bounds on the grid.
    OutOfBounds,

    /// The square holds a boat that has already been hit.
    AlreadyHit,

    /// A shot already missed on that square.
    AlreadyMissed,
}

/// Error returned when trying to shoot a square.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot square {location}: {reason:?}")]
pub struct ShotError {
    /// Reason why the square could not be shot.
    reason: CannotShootReason,

    /// The location of the square.
    location: Location,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified square.
    pub(super) fn new(reason: CannotShootReason, location: Location) -> Self {
        Self { reason, location }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the location of the shot square.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Error returned when every square of a grid has already been shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no more free location on the grid")]
pub struct NoFreeLocationError;

/// Error returned when a boat fits nowhere on a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no more available placement for the {boat}")]
pub struct NoPlacementError {
    boat: Boat,
}

impl NoPlacementError {
    pub(super) fn new(boat: Boat) -> Self {
        Self { boat }
    }

    /// The boat that could not be placed.
    pub fn boat(&self) -> Boat {
        self.boat
    }
}

/// Illegal transition of a single [`Square`][crate::board::Square].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SquareError {
    /// A boat was placed on a square that was not empty.
    #[error("can't place a boat on a square that isn't empty")]
    Occupied,
    /// A miss was recorded on a square with a boat.
    #[error("can't miss a square with a boat")]
    MissOnBoat,
    /// A regular hit was recorded on a square without a boat.
    #[error("can't hit a square without a boat")]
    HitWithoutBoat,
    /// The square was already hit.
    #[error("square was already hit")]
    AlreadyHit,
    /// The square was already missed.
    #[error("square was already missed")]
    AlreadyMissed,
}
