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
use battlegrid::{
    board::{Location, SquareStatus},
    game::{Player, PlayerError},
    ships::Boat,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn place_boats_drains_the_catalog() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut player = Player::new(10).unwrap();
    assert_eq!(player.remaining_boats(), Boat::ALL);
    assert!(!player.has_placed_boats());

    player.place_boats(&mut rng).unwrap();

    assert!(player.remaining_boats().is_empty());
    assert!(player.has_placed_boats());
    assert_eq!(player.grid().boats(), Boat::ALL.to_vec());
    let boat_squares = player
        .grid()
        .squares()
        .iter()
        .filter(|square| square.has_a_boat())
        .count();
    assert_eq!(boat_squares, Boat::ALL.iter().map(|boat| boat.len()).sum::<usize>());
}

#[test]
fn failed_placement_keeps_the_boat() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut player = Player::new(2).unwrap();
    match player.place_boats(&mut rng) {
        Err(PlayerError::NoPlacement(err)) => assert_eq!(err.boat(), Boat::Submarine),
        other => panic!("unexpected result {:?}", other),
    }
    // The destroyer is placed first, the submarine is the first boat that doesn't fit.
    assert_eq!(
        player.remaining_boats(),
        &[Boat::Carrier, Boat::Battleship, Boat::Cruiser, Boat::Submarine][..]
    );
    assert!(!player.has_placed_boats());
    assert_eq!(player.grid().boats(), vec![Boat::Destroyer]);
}

#[test]
fn random_hit_location() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut player = Player::new(10).unwrap();
    player.place_boats(&mut rng).unwrap();

    for _ in 0..50 {
        let hit = player.get_hit(&mut rng).unwrap();
        assert!(player.target_grid().grid().is_location_valid(hit));
    }
}

#[test]
fn hit_locations_are_never_repeated() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut player = Player::new(6).unwrap();
    player.place_boats(&mut rng).unwrap();

    for _ in 0..36 {
        let hit = player.get_hit(&mut rng).unwrap();
        player.record_hit(hit, SquareStatus::Miss).unwrap();
    }
    assert!(matches!(
        player.get_hit(&mut rng),
        Err(PlayerError::NoTarget(_))
    ));
}

#[test]
fn cannot_hit_before_placing_boats() {
    let mut rng = StdRng::seed_from_u64(14);
    let player = Player::new(2).unwrap();
    assert_eq!(player.get_hit(&mut rng), Err(PlayerError::BoatsNotPlaced));
}

#[test]
fn loses_when_every_boat_is_hit() {
    let mut rng = StdRng::seed_from_u64(15);
    let mut player = Player::new(10).unwrap();
    player.place_boats(&mut rng).unwrap();
    assert!(!player.did_lose());

    for row in 0..10 {
        for col in 0..10 {
            player.grid_mut().hit_at(Location::new(row, col)).unwrap();
        }
    }
    assert!(player.did_lose());
}

#[test]
fn one_floating_square_is_enough() {
    let mut rng = StdRng::seed_from_u64(16);
    let mut player = Player::new(10).unwrap();
    player.place_boats(&mut rng).unwrap();

    let mut spared = None;
    for row in 0..10 {
        for col in 0..10 {
            let location = Location::new(row, col);
            if spared.is_none() && player.grid()[location].has_a_boat() {
                spared = Some(location);
                continue;
            }
            player.grid_mut().hit_at(location).unwrap();
        }
    }
    assert!(spared.is_some());
    assert!(!player.did_lose());
}

#[test]
fn no_boats_placed_is_not_a_loss() {
    let player = Player::new(10).unwrap();
    assert!(!player.did_lose());
}

#[test]
fn display_shows_both_grids() {
    let mut player = Player::new(2).unwrap();
    player.grid_mut().hit_at(Location::new(0, 1)).unwrap();
    assert_eq!(player.to_string(), "| | |\n| | |\n\n| |O|\n| | |");
}
