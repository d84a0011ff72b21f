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
//! The square grid that holds a player's boats and the shots fired at them.

use std::{
    fmt,
    ops::{Index, IndexMut},
    slice::Chunks,
};

use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{
        CannotPlaceReason, CannotShootReason, Direction, InvalidSizeError, Location,
        NoFreeLocationError, NoPlacementError, PlaceError, Placement, ShotError, Square,
        SquareStatus,
    },
    ships::Boat,
};

/// A `size` by `size` grid of [`Square`]s. The size is fixed at construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,
    /// Squares of the grid, in row-major order.
    squares: Box<[Square]>,
}

impl Grid {
    /// Construct an empty grid. Fails if `size` is 0 or if `size * size` squares can't be
    /// addressed.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size == 0 || size > isize::max_value() as usize {
            return Err(InvalidSizeError::new(size));
        }
        let total = size
            .checked_mul(size)
            .ok_or_else(|| InvalidSizeError::new(size))?;
        let squares = (0..total).map(|_| Square::new()).collect();
        Ok(Self { size, squares })
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All squares of the grid, flattened in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> Chunks<Square> {
        self.squares.chunks(self.size)
    }

    /// Get a reference to the square at the given [`Location`]. Returns `None` if the
    /// location is out of bounds.
    pub fn square(&self, location: Location) -> Option<&Square> {
        self.linearize(location).map(|i| &self.squares[i])
    }

    fn square_mut(&mut self, location: Location) -> Option<&mut Square> {
        match self.linearize(location) {
            Some(i) => Some(&mut self.squares[i]),
            None => None,
        }
    }

    /// Convert a location to an index into `squares`.
    fn linearize(&self, location: Location) -> Option<usize> {
        if self.is_location_valid(location) {
            Some(location.row as usize * self.size + location.col as usize)
        } else {
            None
        }
    }

    /// Every location of the grid in row-major order.
    fn locations(&self) -> impl Iterator<Item = Location> {
        let size = self.size as isize;
        (0..size).flat_map(move |row| (0..size).map(move |col| Location::new(row, col)))
    }

    /// Whether the location is inside the grid.
    pub fn is_location_valid(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && (location.row as usize) < self.size
            && (location.col as usize) < self.size
    }

    /// Whether the location is inside the grid and its square is empty, meaning a boat
    /// may be placed there.
    pub fn is_location_free(&self, location: Location) -> bool {
        self.square(location).map_or(false, Square::is_empty)
    }

    /// Pick a uniformly random location whose square can still be shot.
    pub fn random_free_location(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Location, NoFreeLocationError> {
        let free: Vec<Location> = self
            .locations()
            .filter(|&location| self[location].can_be_hit())
            .collect();
        free.choose(rng).copied().ok_or(NoFreeLocationError)
    }

    /// Put a boat on the grid. Nothing is modified unless the whole boat fits.
    pub fn place_boat(
        &mut self,
        boat: Boat,
        origin: Location,
        direction: Direction,
    ) -> Result<(), PlaceError> {
        let placement = Placement::new(origin, direction);
        if !self.is_location_valid(origin) {
            return Err(PlaceError::new(
                CannotPlaceReason::OriginOutOfBounds,
                boat,
                placement,
            ));
        }
        let footprint = placement.footprint(boat);
        for &location in &footprint {
            match self.square(location) {
                None => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::OutOfBounds,
                        boat,
                        placement,
                    ))
                }
                Some(square) if !square.is_empty() => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied,
                        boat,
                        placement,
                    ))
                }
                _ => {}
            }
        }
        for location in footprint {
            self[location].place_boat(boat).map_err(|_| {
                PlaceError::new(CannotPlaceReason::AlreadyOccupied, boat, placement)
            })?;
        }
        Ok(())
    }

    /// Whether the boat could be placed with the given placement.
    fn fits(&self, boat: Boat, placement: &Placement) -> bool {
        placement
            .footprint(boat)
            .into_iter()
            .all(|location| self.is_location_free(location))
    }

    /// Every placement where the boat fits, trying each square in row-major order and
    /// each direction in [`Direction::ALL`] order. Equivalent placements (the same
    /// squares seen from either end) are listed separately.
    pub fn possible_boat_placements(&self, boat: Boat) -> Vec<Placement> {
        self.locations()
            .flat_map(|location| {
                Direction::ALL
                    .iter()
                    .map(move |&direction| Placement::new(location, direction))
            })
            .filter(|placement| self.fits(boat, placement))
            .collect()
    }

    /// Pick a uniformly random placement where the boat fits.
    pub fn random_boat_placement(
        &self,
        boat: Boat,
        rng: &mut impl Rng,
    ) -> Result<Placement, NoPlacementError> {
        self.possible_boat_placements(boat)
            .choose(rng)
            .copied()
            .ok_or_else(|| NoPlacementError::new(boat))
    }

    /// Fire a shot at the given location. Returns [`SquareStatus::Hit`] if a boat was
    /// there and [`SquareStatus::Miss`] otherwise.
    pub fn hit_at(&mut self, location: Location) -> Result<SquareStatus, ShotError> {
        let square = self
            .square_mut(location)
            .ok_or_else(|| ShotError::new(CannotShootReason::OutOfBounds, location))?;
        square.shoot().map_err(|reason| ShotError::new(reason, location))
    }

    /// Mark the given location as hit, whether or not a boat is there. Only fails if the
    /// location is out of bounds.
    pub fn force_hit_at(&mut self, location: Location) -> Result<SquareStatus, ShotError> {
        let square = self
            .square_mut(location)
            .ok_or_else(|| ShotError::new(CannotShootReason::OutOfBounds, location))?;
        square.force_hit();
        Ok(SquareStatus::Hit)
    }

    /// Boats that were placed on this grid, in catalog order.
    pub fn boats(&self) -> Vec<Boat> {
        Boat::ALL
            .iter()
            .copied()
            .filter(|&boat| self.squares.iter().any(|square| square.boat() == Some(boat)))
            .collect()
    }

    /// Returns true if the boat was placed here and every one of its squares was hit.
    pub fn is_boat_sunk(&self, boat: Boat) -> bool {
        let mut squares = self
            .squares
            .iter()
            .filter(|square| square.boat() == Some(boat))
            .peekable();
        squares.peek().is_some() && squares.all(Square::has_been_hit)
    }

    /// Returns true if any boat square has not been hit yet.
    pub fn has_floating_boats(&self) -> bool {
        self.squares.iter().any(Square::has_a_boat)
    }
}

impl Index<Location> for Grid {
    type Output = Square;

    fn index(&self, location: Location) -> &Self::Output {
        self.square(location).expect("location out of bounds")
    }
}

impl IndexMut<Location> for Grid {
    fn index_mut(&mut self, location: Location) -> &mut Self::Output {
        self.square_mut(location).expect("location out of bounds")
    }
}

impl fmt::Display for Grid {
    /// One line per row with pipe-delimited square glyphs, e.g. `| |5|`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("|")?;
            for square in row {
                write!(f, "{}|", square)?;
            }
        }
        Ok(())
    }
}
