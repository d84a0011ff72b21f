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
use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use battlegrid::game::{Game, DEFAULT_GRID_SIZE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Plays a game of battleship between two computer players.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("number of rows and columns of each grid")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator to replay a game")
                .takes_value(true),
        )
        .get_matches();

    let size = grid_size(&matches);
    let mut game = Game::with_rng(size, choose_rng(&matches))?;
    game.setup()?;
    info!("both fleets are in place on {}x{} grids", size, size);

    while !game.ended() {
        game.turn()?;
    }

    show_players(&game);
    if let Some(winner) = game.winner() {
        println!(
            "Player {} won after {} turns.",
            winner + 1,
            game.turn_count()
        );
    }
    Ok(())
}

/// Grid size from the command line, or the default.
fn grid_size(matches: &ArgMatches) -> usize {
    if matches.is_present("size") {
        value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_GRID_SIZE
    }
}

/// Seeded generator if a seed was given, otherwise one seeded from system entropy.
fn choose_rng(matches: &ArgMatches) -> StdRng {
    if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Print the shots and the fleet of each player.
fn show_players(game: &Game) {
    for (i, player) in game.players().iter().enumerate() {
        println!("Player {}", i + 1);
        println!("{}", player);
        println!();
    }
}
