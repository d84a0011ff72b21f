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
    board::SquareStatus,
    game::{Game, GameError, PlayerError, TurnError, DEFAULT_GRID_SIZE, MIN_GRID_SIZE},
};
use rand::{rngs::StdRng, SeedableRng};

fn seeded_game(seed: u64) -> Game<StdRng> {
    let mut game = Game::with_rng(DEFAULT_GRID_SIZE, StdRng::seed_from_u64(seed)).unwrap();
    game.setup().unwrap();
    game
}

#[test]
fn small_grids_are_rejected() {
    assert_eq!(
        Game::new(MIN_GRID_SIZE - 1).unwrap_err(),
        GameError::GridTooSmall {
            size: MIN_GRID_SIZE - 1,
            min: MIN_GRID_SIZE,
        }
    );
    assert!(Game::new(MIN_GRID_SIZE).is_ok());
}

#[test]
fn failed_setup_keeps_placed_boats() {
    let game = (0..5000)
        .map(|seed| Game::with_rng(MIN_GRID_SIZE, StdRng::seed_from_u64(seed)).unwrap())
        .find_map(|mut game| match game.setup() {
            Err(PlayerError::NoPlacement(_)) => Some(game),
            _ => None,
        })
        .expect("some seed crowds a minimum size grid");

    let player = game
        .players()
        .iter()
        .find(|player| !player.has_placed_boats())
        .unwrap();
    assert!(!player.remaining_boats().is_empty());
    assert!(!player.grid().boats().is_empty());
}

#[test]
fn turn_before_setup_fails() {
    let mut game = Game::with_rng(DEFAULT_GRID_SIZE, StdRng::seed_from_u64(20)).unwrap();
    assert_eq!(
        game.turn().unwrap_err(),
        TurnError::Player(PlayerError::BoatsNotPlaced)
    );
    assert_eq!(game.turn_count(), 0);
}

#[test]
fn players_alternate() {
    let mut game = seeded_game(21);
    for turn in 0..10 {
        assert_eq!(game.current_player(), turn % 2);
        let report = game.turn().unwrap();
        assert_eq!(report.shooter, turn % 2);
        assert_eq!(report.turn, turn + 1);
    }
    assert_eq!(game.turn_count(), 10);
}

#[test]
fn outcome_is_mirrored_on_target_grid() {
    let mut game = seeded_game(22);
    for _ in 0..20 {
        let report = game.turn().unwrap();
        let shooter = &game.players()[report.shooter];
        let opponent = &game.players()[1 - report.shooter];

        assert_eq!(
            shooter.target_grid().grid()[report.location].status(),
            report.status
        );
        assert_eq!(opponent.grid()[report.location].status(), report.status);
    }
}

#[test]
fn game_runs_to_completion() {
    let mut game = seeded_game(23);
    let mut sunk = [Vec::new(), Vec::new()];
    while !game.ended() {
        let report = game.turn().unwrap();
        if let Some(boat) = report.sunk {
            assert_eq!(report.status, SquareStatus::Hit);
            sunk[report.shooter].push(boat);
        }
        assert!(game.turn_count() <= 2 * DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE);
    }

    let winner = game.winner().unwrap();
    let loser = 1 - winner;
    assert!(game.players()[loser].did_lose());
    assert!(!game.players()[winner].did_lose());
    assert_eq!(sunk[winner].len(), 5);
    assert_eq!(game.turn().unwrap_err(), TurnError::GameEnded);
}

#[test]
fn no_winner_while_playing() {
    let mut game = seeded_game(24);
    game.turn().unwrap();
    assert!(!game.ended());
    assert_eq!(game.winner(), None);
}
