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
//! Types that make up a player's grid.

use std::fmt;

use crate::ships::Boat;

pub use self::{
    common::{Direction, Location},
    errors::{
        CannotPlaceReason, CannotShootReason, InvalidSizeError, NoFreeLocationError,
        NoPlacementError, PlaceError, ShotError, SquareError,
    },
    grid::Grid,
    square::{Square, SquareStatus},
    target::TargetGrid,
};

pub mod common;
mod errors;
mod grid;
mod square;
mod target;

/// Origin square and heading of a boat on a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Square the boat starts from.
    pub location: Location,
    /// Direction the rest of the boat extends in from `location`.
    pub direction: Direction,
}

impl Placement {
    /// Construct a [`Placement`] from an origin and a direction.
    pub fn new(location: Location, direction: Direction) -> Self {
        Self {
            location,
            direction,
        }
    }

    /// Squares the given boat covers with this placement, starting at the origin. Not
    /// checked against any grid, so some of them may be out of bounds.
    pub fn footprint(&self, boat: Boat) -> Vec<Location> {
        let (row_step, col_step) = self.direction.offset();
        (0..boat.len() as isize)
            .map(|i| self.location.add(row_step * i, col_step * i))
            .collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} heading {:?}", self.location, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_follows_direction() {
        let origin = Location::new(5, 5);
        let expected = [
            (Direction::North, vec![(5, 5), (4, 5), (3, 5)]),
            (Direction::East, vec![(5, 5), (5, 6), (5, 7)]),
            (Direction::South, vec![(5, 5), (6, 5), (7, 5)]),
            (Direction::West, vec![(5, 5), (5, 4), (5, 3)]),
        ];
        for (direction, coords) in expected.iter() {
            let footprint = Placement::new(origin, *direction).footprint(Boat::Cruiser);
            let coords: Vec<Location> = coords
                .iter()
                .map(|&(row, col)| Location::new(row, col))
                .collect();
            assert_eq!(footprint, coords, "heading {:?}", direction);
        }
    }

    #[test]
    fn footprint_is_not_bounds_checked() {
        let footprint =
            Placement::new(Location::new(1, 2), Direction::North).footprint(Boat::Battleship);
        assert_eq!(
            footprint,
            vec![
                Location::new(1, 2),
                Location::new(0, 2),
                Location::new(-1, 2),
                Location::new(-2, 2),
            ]
        );
    }
}
