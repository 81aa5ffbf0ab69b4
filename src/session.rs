// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game loop and the players that feed it. A `Session` owns a `Game` and repeatedly asks a
//! `MoveSource` for the side to move's next move, validating and applying it, until somebody
//! forfeits.
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{Game, GameStatus};
use crate::move_generator::{MoveGenerator, MoveVec};
use crate::notation;
use crate::render;
use crate::types::Square;

/// What a player offers when asked to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Offer {
    Move(Square, Square),
    /// The player does not want to move. The session asks for confirmation before treating
    /// this as a forfeit.
    Decline,
}

/// A player, as seen by the session. Implementations block until they have an answer.
pub trait MoveSource {
    /// Asks the side to move in `game` for a move. Coordinate errors (`OutOfBounds`,
    /// `MalformedCoordinate`) make the session ask again; any other error ends the session.
    fn request_move(&mut self, game: &Game) -> Result<Offer>;

    /// Asks the side that just declined whether it really wants to forfeit.
    fn confirm_forfeit(&mut self, game: &Game) -> Result<bool>;

    /// Tells the player why their last offer was turned down.
    fn notify(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

pub struct Session<S, W> {
    game: Game,
    source: S,
    out: W,
    config: Config,
}

impl<S: MoveSource, W: Write> Session<S, W> {
    pub fn new(game: Game, source: S, out: W, config: Config) -> Session<S, W> {
        Session {
            game,
            source,
            out,
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Plays until the game ends.
    pub fn run(&mut self) -> Result<GameStatus> {
        self.run_for(None)
    }

    /// Plays until the game ends or `max_moves` further moves have been applied, whichever
    /// comes first.
    pub fn run_for(&mut self, max_moves: Option<u32>) -> Result<GameStatus> {
        self.draw()?;
        let limit = max_moves.map(|n| self.game.moves_played() + n);
        while !self.game.status().is_terminal() {
            if limit.map_or(false, |l| self.game.moves_played() >= l) {
                break;
            }

            self.turn()?;
        }

        if let Some(loser) = self.game.forfeited_by() {
            writeln!(self.out, "{} forfeits.", loser.name())?;
        }

        Ok(self.game.status())
    }

    /// Asks the side to move until it produces a legal move or forfeits.
    fn turn(&mut self) -> Result<()> {
        let mut attempts = 0u32;
        loop {
            if let Some(max) = self.config.max_retries {
                if attempts == max {
                    warn!(
                        "{} has made {} invalid attempts this turn",
                        self.game.side_to_move().name(),
                        attempts
                    );
                }
            }

            let offer = match self.source.request_move(&self.game) {
                Ok(offer) => offer,
                Err(err @ Error::OutOfBounds { .. }) | Err(err @ Error::MalformedCoordinate(_)) => {
                    debug!("bad coordinates from move source: {}", err);
                    self.source.notify(&err.to_string())?;
                    attempts += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let (start, end) = match offer {
                Offer::Move(start, end) => (start, end),
                Offer::Decline => {
                    if self.source.confirm_forfeit(&self.game)? {
                        self.game.forfeit();
                        return Ok(());
                    }

                    continue;
                }
            };

            let side = self.game.side_to_move();
            match self.game.play(start, end) {
                Ok(captured) => {
                    match captured {
                        Some(id) => info!(
                            "{} plays {}{} capturing {}",
                            side.name(),
                            start,
                            end,
                            self.game.board().piece(id)
                        ),
                        None => info!("{} plays {}{}", side.name(), start, end),
                    }

                    if self.config.show_board_after_move {
                        self.draw()?;
                    }

                    return Ok(());
                }
                Err(reason) => {
                    debug!("{} tried {}{}: {}", side.name(), start, end, reason);
                    self.source.notify(&format!("illegal move: {}", reason))?;
                    attempts += 1;
                }
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let text = render::render(self.game.board(), self.config.glyphs);
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// A human at a terminal. Moves are typed as a piece selection followed by a destination, or as
/// a single line holding both (`e2e4`, `e2 e4`). Typing `X` at either prompt declines to move.
pub struct TerminalMoveSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalMoveSource<R, W> {
    pub fn new(input: R, output: W) -> TerminalMoveSource<R, W> {
        TerminalMoveSource { input, output }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }

        Ok(line.trim().to_owned())
    }
}

fn is_decline(line: &str) -> bool {
    line.eq_ignore_ascii_case("x")
}

impl<R: BufRead, W: Write> MoveSource for TerminalMoveSource<R, W> {
    fn request_move(&mut self, game: &Game) -> Result<Offer> {
        let side = game.current_side();
        let line = self.prompt(&format!("{} - select figure: ", side))?;
        if is_decline(&line) {
            return Ok(Offer::Decline);
        }

        if line.len() > 2 {
            let (start, end) = notation::parse_move(game.board(), &line)?;
            return Ok(Offer::Move(start, end));
        }

        let start = notation::parse_square(game.board(), &line)?;
        let line = self.prompt("make move: ")?;
        if is_decline(&line) {
            return Ok(Offer::Decline);
        }

        let end = notation::parse_square(game.board(), &line)?;
        Ok(Offer::Move(start, end))
    }

    fn confirm_forfeit(&mut self, _: &Game) -> Result<bool> {
        let line = self.prompt("are you sure you want to forfeit? [Y/y]: ")?;
        Ok(line.eq_ignore_ascii_case("y"))
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Plays a uniformly random legal move, and forfeits when it has none.
pub struct RandomMoveSource {
    rng: StdRng,
    generator: MoveGenerator,
}

impl RandomMoveSource {
    pub fn new() -> RandomMoveSource {
        RandomMoveSource {
            rng: StdRng::from_entropy(),
            generator: MoveGenerator::new(),
        }
    }

    pub fn with_seed(seed: u64) -> RandomMoveSource {
        RandomMoveSource {
            rng: StdRng::seed_from_u64(seed),
            generator: MoveGenerator::new(),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        RandomMoveSource::new()
    }
}

impl MoveSource for RandomMoveSource {
    fn request_move(&mut self, game: &Game) -> Result<Offer> {
        let mut moves = MoveVec::default();
        self.generator
            .generate_moves(game.board(), game.side_to_move(), &mut moves);
        let offer = match moves.choose(&mut self.rng) {
            Some(mov) => Offer::Move(mov.source(), mov.destination()),
            None => Offer::Decline,
        };
        Ok(offer)
    }

    fn confirm_forfeit(&mut self, _: &Game) -> Result<bool> {
        Ok(true)
    }
}
