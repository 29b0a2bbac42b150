//! Interactive turn loop.

use crate::view::{self, is_exit, parse_move, parse_promotion, render_board};
use chess_core::{Move, Piece};
use chess_engine::{find_legal, Game, GameResult};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal state.
    Finished(GameResult),
    /// The player typed `exit`/`quit`, or input ran out.
    Quit,
}

/// A terminal session reading moves from `input` and writing to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Plays `game` until it ends or the player leaves.
    pub fn run(&mut self, game: &mut Game) -> io::Result<SessionEnd> {
        while !game.is_over() {
            write!(self.output, "{}", render_board(&game.position().board))?;

            let Some(mv) = self.read_move(game)? else {
                return Ok(SessionEnd::Quit);
            };
            if let Err(err) = game.submit(mv) {
                warn!(%mv, %err, "validated move was refused");
                self.error(&err.to_string())?;
            }
        }

        let result = game.result();
        writeln!(self.output, "\nGame over!")?;
        write!(self.output, "{}", render_board(&game.position().board))?;
        write!(self.output, "{}", view::result_banner(result))?;
        self.output.flush()?;
        Ok(SessionEnd::Finished(result))
    }

    /// Prompts until the player enters a legal move. Returns `None` on quit.
    fn read_move(&mut self, game: &mut Game) -> io::Result<Option<Move>> {
        let side = game.side_to_move();
        loop {
            writeln!(self.output, "{side} to move.")?;
            write!(self.output, "Enter move (e.g. e2e4): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if is_exit(&line) {
                return Ok(None);
            }

            let matched = parse_move(&line).and_then(|request| {
                find_legal(game.legal_moves(), request).map(|legal| (request, legal))
            });
            let Some((request, legal)) = matched else {
                debug!(input = line.trim(), "unusable move input");
                self.error(&format!("Invalid move '{}'. Please try again.", line.trim()))?;
                self.error("A move is four characters (e.g. e2e4) and must be legal.")?;
                continue;
            };

            if legal.promotion().is_some() && request.promotion().is_none() {
                let Some(piece) = self.read_promotion()? else {
                    return Ok(None);
                };
                return Ok(Some(Move::with_promotion(legal.from(), legal.to(), piece)));
            }
            return Ok(Some(legal));
        }
    }

    /// Prompts until the player picks a promotion piece. Returns `None` on quit.
    fn read_promotion(&mut self) -> io::Result<Option<Piece>> {
        loop {
            write!(self.output, "Pawn reached the last rank! Choose a promotion (q, r, b, n): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if is_exit(&line) {
                return Ok(None);
            }
            match parse_promotion(&line) {
                Some(piece) => return Ok(Some(piece)),
                None => self.error("Invalid choice. Enter 'q', 'r', 'b' or 'n'.")?,
            }
        }
    }

    /// Reads one line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "!! Error: {message}")
    }
}
