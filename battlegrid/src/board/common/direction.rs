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
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Cardinal direction a boat extends in from its origin square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards decreasing rows.
    North,
    /// Towards increasing columns.
    East,
    /// Towards increasing rows.
    South,
    /// Towards decreasing columns.
    West,
}

impl Direction {
    /// All directions, in the order placements are enumerated.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `(row, col)` step taken by one square in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0, Direction::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn opposite_directions_cancel_out() {
        let (nr, nc) = Direction::North.offset();
        let (sr, sc) = Direction::South.offset();
        assert_eq!((nr + sr, nc + sc), (0, 0));
        let (er, ec) = Direction::East.offset();
        let (wr, wc) = Direction::West.offset();
        assert_eq!((er + wr, ec + wc), (0, 0));
    }

    #[test]
    fn sampling_covers_every_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let dir: Direction = rng.gen();
            if !seen.contains(&dir) {
                seen.push(dir);
            }
        }
        assert_eq!(seen.len(), Direction::ALL.len());
    }
}
