//! Game state machine and play loop

use super::messages;
use crate::console::Console;
use crate::core::rules::MAX_ATTEMPTS;
use crate::core::{Code, CodeError, Score};
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Attempts remain and the code is not cracked
    InProgress,
    /// Cracked on the given attempt (terminal)
    Won { attempts: u32 },
    /// Every attempt used without a win (terminal)
    Exhausted,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Malformed or absent input; no attempt consumed
    Rejected,
    /// Valid guess that did not win; one attempt consumed
    Scored(Score),
    /// Valid guess that cracked the code
    Won(Score),
    /// Valid guess that used the last attempt without winning
    Exhausted(Score),
    /// The game had already ended; nothing changed
    Finished,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Code cracked on attempt `attempts`
    Won { attempts: u32 },
    /// Attempts ran out; carries the secret for display
    Exhausted { secret: Code },
}

/// Errors that stop [`Game::play`] before the game finishes
#[derive(Debug, Error)]
pub enum GameError {
    /// The console can no longer produce input
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Check whether a line of input is a well-formed guess
///
/// Absent input is never valid.
#[must_use]
pub fn is_valid_guess(input: Option<&str>) -> bool {
    input.is_some_and(Code::is_valid)
}

/// One game of Mastermind bound to a console
///
/// # Examples
/// ```
/// use mastermind::console::ScriptedConsole;
/// use mastermind::core::Code;
/// use mastermind::game::{Game, Outcome};
///
/// let console = ScriptedConsole::new(["1111", "1234"]);
/// let mut game = Game::new(console, Code::parse("1234").unwrap());
///
/// assert_eq!(game.play().unwrap(), Outcome::Won { attempts: 2 });
/// ```
#[derive(Debug)]
pub struct Game<C> {
    console: C,
    secret: Code,
    remaining_attempts: u32,
    state: GameState,
}

impl<C> Game<C> {
    /// Start a game with `secret` and the full attempt budget
    pub const fn new(console: C, secret: Code) -> Self {
        Self {
            console,
            secret,
            remaining_attempts: MAX_ATTEMPTS,
            state: GameState::InProgress,
        }
    }

    /// Start a game from a secret given as text
    ///
    /// # Errors
    /// Returns `CodeError` if `secret` is not a valid code.
    pub fn with_secret_str(console: C, secret: &str) -> Result<Self, CodeError> {
        Ok(Self::new(console, Code::parse(secret)?))
    }

    /// Score a well-formed guess against the secret
    #[must_use]
    pub fn evaluate_guess(&self, guess: &Code) -> Score {
        Score::calculate(guess, &self.secret)
    }

    /// Apply one line of input to the game
    ///
    /// This is the only place state changes. Invalid input leaves the
    /// attempt counter alone; once the game has ended every call returns
    /// [`Turn::Finished`].
    pub fn submit(&mut self, input: Option<&str>) -> Turn {
        if self.is_finished() {
            return Turn::Finished;
        }

        let attempt = self.attempt_number();
        let Some(guess) = input.and_then(|line| Code::parse(line).ok()) else {
            debug!(attempt, "rejected malformed guess");
            return Turn::Rejected;
        };

        let score = self.evaluate_guess(&guess);
        if score.is_win() {
            self.state = GameState::Won { attempts: attempt };
            return Turn::Won(score);
        }

        self.remaining_attempts -= 1;
        debug!(attempt, %score, remaining = self.remaining_attempts, "scored guess");

        if self.remaining_attempts == 0 {
            self.state = GameState::Exhausted;
            Turn::Exhausted(score)
        } else {
            Turn::Scored(score)
        }
    }

    /// Number of the attempt the next valid guess will use (1-based)
    #[must_use]
    pub const fn attempt_number(&self) -> u32 {
        MAX_ATTEMPTS - self.remaining_attempts + 1
    }

    /// Valid guesses left
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.state, GameState::InProgress)
    }

    /// The outcome, once the game has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Won { attempts } => Some(Outcome::Won { attempts }),
            GameState::Exhausted => Some(Outcome::Exhausted {
                secret: self.secret,
            }),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consume the game, returning its console
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> Game<C> {
    /// Run the game to completion over the console
    ///
    /// Announces the rules, then prompts, reads and scores until the code is
    /// cracked or attempts run out. Calling this on a finished game returns
    /// the recorded outcome without any I/O.
    ///
    /// # Errors
    /// - `GameError::InputClosed` if the console reports its input is gone
    ///   for good; the game stays in progress with its counter unchanged
    /// - `GameError::Io` for any other console failure
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }

        info!(remaining = self.remaining_attempts, "game started");
        self.console.write_line(&messages::welcome())?;
        self.console
            .write_line(&messages::attempts_available(self.remaining_attempts))?;

        loop {
            self.console
                .write(&messages::prompt(self.attempt_number()))?;

            let line = match self.console.read_line() {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    warn!(
                        remaining = self.remaining_attempts,
                        "input closed mid-game"
                    );
                    return Err(GameError::InputClosed);
                }
                Err(e) => return Err(e.into()),
            };

            match self.submit(line.as_deref()) {
                Turn::Rejected => self.console.write_line(&messages::invalid_input())?,
                Turn::Scored(score) => self.console.write_line(&messages::result(score))?,
                Turn::Won(score) => {
                    self.console.write_line(&messages::result(score))?;
                    self.console.write_line(messages::WIN)?;
                }
                Turn::Exhausted(score) => {
                    self.console.write_line(&messages::result(score))?;
                    self.console.write_line(&messages::game_over(&self.secret))?;
                }
                Turn::Finished => {}
            }

            if let Some(outcome) = self.outcome() {
                info!(?outcome, "game finished");
                return Ok(outcome);
            }
        }
    }
}
