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
//! Errors raised by the [`Player`][crate::game::Player] and
//! [`Game`][crate::game::Game] coordinators.

use thiserror::Error;

use crate::board::{InvalidSizeError, NoFreeLocationError, NoPlacementError, PlaceError, ShotError};

/// Reason why a player could not act.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlayerError {
    /// The player was asked for a shot before placing their boats.
    #[error("the player didn't place their boats")]
    BoatsNotPlaced,
    /// A boat fits nowhere on the player's grid.
    #[error(transparent)]
    NoPlacement(#[from] NoPlacementError),
    /// A chosen placement was rejected by the grid.
    #[error(transparent)]
    Place(#[from] PlaceError),
    /// Every square of the opponent's grid was already shot.
    #[error(transparent)]
    NoTarget(#[from] NoFreeLocationError),
}

/// Error returned when a game can't be created.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// The grid is too small for a full fleet.
    #[error("can't create a {size}x{size} game, grids must be at least {min}x{min}")]
    GridTooSmall { size: usize, min: usize },
    /// The grid could not be allocated.
    #[error(transparent)]
    Grid(#[from] InvalidSizeError),
}

/// Reason why a turn could not be played.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The game is already over.
    #[error("the game already ended")]
    GameEnded,
    /// The current player could not pick a target.
    #[error(transparent)]
    Player(#[from] PlayerError),
    /// The shot was rejected by one of the grids.
    #[error(transparent)]
    Shot(#[from] ShotError),
}
