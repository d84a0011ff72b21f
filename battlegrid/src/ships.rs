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
//! The fixed catalog of boats each player places on their grid.
use std::fmt;

/// One of the five boats of the standard fleet. A [`Boat`] is a catalog entry rather
/// than a placed instance: grids only record which boat occupies each square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Boat {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl Boat {
    /// The whole catalog, in catalog order.
    pub const ALL: &'static [Boat] = &[
        Boat::Carrier,
        Boat::Battleship,
        Boat::Cruiser,
        Boat::Submarine,
        Boat::Destroyer,
    ];

    /// Identifier of this boat, used as its glyph on a rendered grid.
    pub fn id(self) -> u8 {
        match self {
            Boat::Carrier => 1,
            Boat::Battleship => 2,
            Boat::Cruiser => 3,
            Boat::Submarine => 4,
            Boat::Destroyer => 5,
        }
    }

    /// Get the length of this boat type.
    pub fn len(self) -> usize {
        match self {
            Boat::Carrier => 5,
            Boat::Battleship => 4,
            Boat::Cruiser => 3,
            Boat::Submarine => 3,
            Boat::Destroyer => 2,
        }
    }

    /// Lowercase name of this boat type.
    pub fn name(self) -> &'static str {
        match self {
            Boat::Carrier => "carrier",
            Boat::Battleship => "battleship",
            Boat::Cruiser => "cruiser",
            Boat::Submarine => "submarine",
            Boat::Destroyer => "destroyer",
        }
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_lengths() {
        let lens: Vec<_> = Boat::ALL.iter().map(|boat| boat.len()).collect();
        assert_eq!(lens, vec![5, 4, 3, 3, 2]);
    }

    #[test]
    fn ids_follow_catalog_order() {
        let ids: Vec<_> = Boat::ALL.iter().map(|boat| boat.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
