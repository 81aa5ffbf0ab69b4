// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches, SubCommand};
use gambit::config::{Config, DEFAULT_CONFIG_FILE};
use gambit::{
    perft, render, Board, Color, Game, MoveGenerator, MoveVec, RandomMoveSource, Session,
    TerminalMoveSource,
};

fn placement_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("PLACEMENT")
            .help("Piece placement, as in the first field of a FEN string")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::with_name("side")
            .help("Side to move")
            .value_name("SIDE")
            .short("-s")
            .long("--side")
            .possible_values(&["w", "b"])
            .default_value("w")
            .takes_value(true),
    )
}

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .help("Path to a JSON config file")
                .value_name("FILE")
                .short("-c")
                .long("--config")
                .takes_value(true),
        )
        .subcommand(SubCommand::with_name("play").about("Two players at one terminal"))
        .subcommand(placement_args(
            SubCommand::with_name("moves").about("List the legal moves in a position"),
        ))
        .subcommand(
            placement_args(SubCommand::with_name("perft").about("Count move-tree leaves"))
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .default_value("3")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("selfplay")
                .about("Two random players")
                .arg(
                    Arg::with_name("plies")
                        .help("Stop after this many moves")
                        .value_name("PLIES")
                        .short("-n")
                        .long("--plies")
                        .default_value("100")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for the random players")
                        .value_name("SEED")
                        .long("--seed")
                        .takes_value(true),
                ),
        )
        .get_matches();

    let config_path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG_FILE);
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", config_path, e);
            process::exit(1);
        }
    };

    match matches.subcommand() {
        ("moves", Some(matches)) => run_moves(matches, &config),
        ("perft", Some(matches)) => run_perft(matches, &config),
        ("selfplay", Some(matches)) => run_selfplay(matches, config),
        _ => run_play(config),
    }
}

fn load_board(matches: &ArgMatches) -> Board {
    let placement = matches.value_of("PLACEMENT").unwrap();
    let mut board = match Board::from_placement(placement) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("invalid placement: {}", e);
            process::exit(1);
        }
    };

    if matches.value_of("side") == Some("b") {
        board.set_side_to_move(Color::Black);
    }

    board
}

fn run_play(config: Config) -> ! {
    let stdin = io::stdin();
    let source = TerminalMoveSource::new(stdin.lock(), io::stdout());
    let mut session = Session::new(Game::new(), source, io::stdout(), config);
    match session.run() {
        Ok(status) => {
            println!("game over: {}", status);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run_moves(matches: &ArgMatches, config: &Config) -> ! {
    let board = load_board(matches);
    print!("{}", render(&board, config.glyphs));
    let mut moves = MoveVec::default();
    MoveGenerator::new().generate_moves(&board, board.side_to_move(), &mut moves);
    for mov in &moves {
        println!("{}", mov);
    }

    println!("{} moves", moves.len());
    process::exit(0);
}

fn run_perft(matches: &ArgMatches, config: &Config) -> ! {
    let depth = value_t_or_exit!(matches, "depth", u32);
    let board = load_board(matches);

    println!("placement: {}", board.as_placement());
    println!("depth:     {}", depth);
    println!();
    print!("{}", render(&board, config.glyphs));
    println!();
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&board, i);
        let duration = start.elapsed();
        println!("perft({}) = {} ({} ms)", i, results, duration.as_millis());
    }

    process::exit(0);
}

fn run_selfplay(matches: &ArgMatches, config: Config) -> ! {
    let plies = value_t_or_exit!(matches, "plies", u32);
    let white_and_black = if matches.is_present("seed") {
        RandomMoveSource::with_seed(value_t_or_exit!(matches, "seed", u64))
    } else {
        RandomMoveSource::new()
    };

    let mut session = Session::new(Game::new(), white_and_black, io::stdout(), config);
    match session.run_for(Some(plies)) {
        Ok(status) => {
            println!(
                "{} after {} moves",
                status,
                session.game().moves_played()
            );
            process::exit(0);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
