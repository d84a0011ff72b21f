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
//! Rules engine for a two-player game of Battleship on a square grid.
//!
//! The [`board`] module holds the engine proper: a [`Grid`][board::Grid] of
//! [`Square`][board::Square]s that validates boat placement, enumerates every legal
//! placement of a boat and resolves shots. [`ships`] is the fixed catalog of five boats,
//! and [`game`] coordinates two players taking turns until one fleet is sunk.
//!
//! ```
//! use battlegrid::{
//!     board::{Direction, Grid, Location, SquareStatus},
//!     ships::Boat,
//! };
//!
//! let mut grid = Grid::new(10).unwrap();
//! grid.place_boat(Boat::Cruiser, Location::new(0, 0), Direction::East).unwrap();
//! assert_eq!(grid.hit_at(Location::new(0, 0)).unwrap(), SquareStatus::Hit);
//! assert_eq!(grid.hit_at(Location::new(1, 0)).unwrap(), SquareStatus::Miss);
//! ```

pub mod board;
pub mod game;
pub mod ships;
