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
use std::fmt;

/// The coordinates of a [`Square`][crate::board::Square] in the grid. Rows grow
/// downwards and columns grow to the right.
///
/// Locations are plain values and are allowed to point outside of any grid; bounds are
/// checked by the [`Grid`][crate::board::Grid] that uses them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location {
    /// Vertical position of the square.
    pub row: isize,
    /// Horizontal position of the square.
    pub col: isize,
}

impl Location {
    /// Construct a [`Location`] from the given `row` and `col`.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get a new [`Location`] translated by the given offset.
    pub fn add(self, row_offset: isize, col_offset: isize) -> Self {
        Self::new(self.row + row_offset, self.col + col_offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(isize, isize)> for Location {
    /// Construct a [`Location`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Location> for (isize, isize) {
    /// Convert the [`Location`] into a `(row, col)` pair.
    fn from(loc: Location) -> Self {
        (loc.row, loc.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_translated_copy() {
        let origin = Location::new(2, 3);
        assert_eq!(origin.add(-1, 4), Location::new(1, 7));
        assert_eq!(origin, Location::new(2, 3));
    }

    #[test]
    fn add_does_not_check_bounds() {
        assert_eq!(Location::new(0, 0).add(-2, -5), Location::new(-2, -5));
    }

    #[test]
    fn display_and_tuple_conversions() {
        let loc = Location::from((4, 9));
        assert_eq!(loc.to_string(), "(4, 9)");
        assert_eq!(<(isize, isize)>::from(loc), (4, 9));
    }
}
