//! Game orchestration around the engine
//!
//! A game owns the secret, one elimination session and the turn history. Human
//! and bot guesses both go through [`Game::submit`], which scores the guess
//! against the secret and feeds the real feedback back into the session.

use super::secret::random_secret;
use crate::core::{Code, EngineError, Feedback};
use crate::solver::{Engine, Session};
use rand::Rng;
use std::fmt;

/// Who made a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Bot,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Bot => write!(f, "Bot"),
        }
    }
}

/// Which player moves in each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnOrder {
    /// Human first, then turns alternate (cooperative play)
    #[default]
    Alternating,
    /// The bot plays every round
    BotOnly,
    /// The human plays every round
    HumanOnly,
}

impl TurnOrder {
    /// Player to move in the zero-based `round`
    #[must_use]
    pub const fn player_for_round(self, round: usize) -> Player {
        match self {
            Self::Alternating if round % 2 == 0 => Player::Human,
            Self::Alternating | Self::BotOnly => Player::Bot,
            Self::HumanOnly => Player::Human,
        }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Player },
    Won { by: Player, rounds: usize },
    Lost,
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Errors from driving a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game was already won or lost
    GameOver,
    /// The candidate set is empty so the bot has nothing to propose
    NoMove,
    /// Round limit must be at least one
    InvalidRoundLimit,
    /// A code was rejected by the engine
    Engine(EngineError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::NoMove => write!(f, "No candidates remain, the engine cannot continue"),
            Self::InvalidRoundLimit => write!(f, "Round limit must be at least 1"),
            Self::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for GameError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}

/// A single game of Mastermind
#[derive(Debug, Clone)]
pub struct Game {
    engine: Engine,
    secret: Code,
    session: Session,
    history: Vec<Turn>,
    order: TurnOrder,
    max_rounds: usize,
    status: GameStatus,
}

impl Game {
    /// Round limit of the classic board
    pub const DEFAULT_MAX_ROUNDS: usize = 10;

    /// Start a game against a known secret
    ///
    /// # Errors
    /// Returns `InvalidRoundLimit` for a zero limit, or `Engine` if the secret
    /// does not fit the engine's configuration.
    pub fn new(
        engine: Engine,
        secret: Code,
        order: TurnOrder,
        max_rounds: usize,
    ) -> Result<Self, GameError> {
        if max_rounds == 0 {
            return Err(GameError::InvalidRoundLimit);
        }
        let secret = engine.code(secret)?;

        Ok(Self {
            engine,
            secret,
            session: engine.session(),
            history: Vec::new(),
            order,
            max_rounds,
            status: GameStatus::InProgress {
                next: order.player_for_round(0),
            },
        })
    }

    /// Start a game against a secret drawn from `rng`
    ///
    /// # Errors
    /// Returns `InvalidRoundLimit` for a zero limit.
    pub fn with_random_secret<R: Rng>(
        engine: Engine,
        rng: &mut R,
        order: TurnOrder,
        max_rounds: usize,
    ) -> Result<Self, GameError> {
        let secret = random_secret(&engine, rng);
        Self::new(engine, secret, order, max_rounds)
    }

    /// Begin a new game against `secret`, keeping turn order and round limit
    ///
    /// # Errors
    /// Returns `Engine` if the secret does not fit the configuration.
    pub fn restart(&mut self, secret: Code) -> Result<(), GameError> {
        self.secret = self.engine.code(secret)?;
        self.session.reset();
        self.history.clear();
        self.status = GameStatus::InProgress {
            next: self.order.player_for_round(0),
        };
        Ok(())
    }

    /// Score `guess` against the secret and prune the session with the result
    ///
    /// The guess is credited to whichever player is due to move.
    ///
    /// # Errors
    /// Returns `GameOver` once the game is decided, or `Engine` if the guess
    /// has the wrong length or colors.
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GameError> {
        let GameStatus::InProgress { next: player } = self.status else {
            return Err(GameError::GameOver);
        };

        let guess = self.engine.code(guess)?;
        let feedback = self.engine.evaluate(&guess, &self.secret)?;

        let candidates_before = self.session.candidate_count();
        self.session.advance(&guess, feedback)?;
        let candidates_after = self.session.candidate_count();

        self.history.push(Turn {
            player,
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        let rounds = self.history.len();
        self.status = if feedback.is_perfect(self.engine.code_length()) {
            log::info!("{player} cracked {} in {rounds} rounds", self.secret);
            GameStatus::Won { by: player, rounds }
        } else if rounds >= self.max_rounds {
            log::info!("round limit {} reached, secret was {}", self.max_rounds, self.secret);
            GameStatus::Lost
        } else {
            GameStatus::InProgress {
                next: self.order.player_for_round(rounds),
            }
        };

        Ok(feedback)
    }

    /// The bot's proposal for the current round
    #[must_use]
    pub fn bot_move(&self) -> Option<&Code> {
        self.session.greedy_guess()
    }

    /// Submit the bot's greedy guess
    ///
    /// # Errors
    /// Returns `GameOver` once the game is decided, or `NoMove` when the
    /// candidate set is empty.
    pub fn play_bot_turn(&mut self) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let guess = self.bot_move().cloned().ok_or(GameError::NoMove)?;
        self.submit(guess)
    }

    /// Play bot turns while the bot is due to move
    ///
    /// Stops when the game ends or the human is next.
    ///
    /// # Errors
    /// Returns `NoMove` if the bot runs out of candidates.
    pub fn play_bot_turns(&mut self) -> Result<GameStatus, GameError> {
        while let GameStatus::InProgress { next: Player::Bot } = self.status {
            self.play_bot_turn()?;
        }
        Ok(self.status)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress { .. })
    }

    /// Player due to move, if the game is still running
    #[must_use]
    pub const fn next_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress { next } => Some(next),
            _ => None,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub const fn order(&self) -> TurnOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bot_game(secret: [u8; 4]) -> Game {
        Game::new(
            Engine::default(),
            Code::from(secret),
            TurnOrder::BotOnly,
            Game::DEFAULT_MAX_ROUNDS,
        )
        .unwrap()
    }

    #[test]
    fn turn_order_alternates_from_human() {
        let order = TurnOrder::Alternating;
        assert_eq!(order.player_for_round(0), Player::Human);
        assert_eq!(order.player_for_round(1), Player::Bot);
        assert_eq!(order.player_for_round(2), Player::Human);
        assert_eq!(TurnOrder::BotOnly.player_for_round(0), Player::Bot);
        assert_eq!(TurnOrder::HumanOnly.player_for_round(3), Player::Human);
    }

    #[test]
    fn new_rejects_bad_inputs() {
        let engine = Engine::default();
        assert_eq!(
            Game::new(engine, Code::from([0, 1, 2, 3]), TurnOrder::BotOnly, 0).unwrap_err(),
            GameError::InvalidRoundLimit
        );
        assert!(matches!(
            Game::new(engine, Code::from([0, 1, 2, 9]), TurnOrder::BotOnly, 10),
            Err(GameError::Engine(EngineError::ColorOutOfRange { .. }))
        ));
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut game = Game::new(
            Engine::default(),
            Code::from([0, 1, 2, 3]),
            TurnOrder::Alternating,
            10,
        )
        .unwrap();

        let feedback = game.submit(Code::from([0, 1, 2, 3])).unwrap();

        assert_eq!(feedback, Feedback::perfect(4));
        assert_eq!(
            game.status(),
            GameStatus::Won {
                by: Player::Human,
                rounds: 1
            }
        );
        assert_eq!(game.session().candidates(), &[Code::from([0, 1, 2, 3])]);
        assert_eq!(game.submit(Code::from([0, 0, 0, 0])), Err(GameError::GameOver));
    }

    #[test]
    fn bot_solves_within_limit() {
        let mut game = bot_game([5, 4, 3, 2]);
        let status = game.play_bot_turns().unwrap();

        assert!(matches!(status, GameStatus::Won { by: Player::Bot, .. }));
        assert_eq!(game.history().last().unwrap().guess, Code::from([5, 4, 3, 2]));
        assert!(game.rounds_played() <= Game::DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn bot_first_guess_is_smallest_code() {
        let mut game = bot_game([1, 2, 3, 4]);
        game.play_bot_turn().unwrap();

        let first = &game.history()[0];
        assert_eq!(first.guess, Code::from([0, 0, 0, 0]));
        assert_eq!(first.player, Player::Bot);
        assert_eq!(first.candidates_before, 1296);
        assert!(first.candidates_after < first.candidates_before);
    }

    #[test]
    fn history_records_shrinking_candidates() {
        let mut game = bot_game([3, 3, 0, 5]);
        game.play_bot_turns().unwrap();

        for turn in game.history() {
            assert!(turn.candidates_after <= turn.candidates_before);
        }
        for pair in game.history().windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        assert_eq!(game.session().current_depth(), game.rounds_played());
    }

    #[test]
    fn alternating_game_hands_turn_to_bot() {
        let mut game = Game::new(
            Engine::default(),
            Code::from([2, 2, 4, 1]),
            TurnOrder::Alternating,
            10,
        )
        .unwrap();

        game.submit(Code::from([1, 1, 2, 2])).unwrap();
        assert_eq!(game.next_player(), Some(Player::Bot));

        // Bot guess is consistent with the human's observation
        let bot_guess = game.bot_move().cloned().unwrap();
        let human = &game.history()[0];
        assert_eq!(
            Feedback::calculate(&human.guess, &bot_guess).unwrap(),
            human.feedback
        );

        game.play_bot_turns().unwrap();
        assert!(game.is_over() || game.next_player() == Some(Player::Human));
    }

    #[test]
    fn round_limit_ends_in_loss() {
        let mut game = Game::new(
            Engine::default(),
            Code::from([5, 5, 5, 5]),
            TurnOrder::HumanOnly,
            2,
        )
        .unwrap();

        game.submit(Code::from([0, 0, 0, 0])).unwrap();
        assert!(!game.is_over());
        game.submit(Code::from([1, 1, 1, 1])).unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.play_bot_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn invalid_guess_does_not_consume_round() {
        let mut game = bot_game([0, 1, 2, 3]);
        assert!(matches!(
            game.submit(Code::from([0, 1, 2])),
            Err(GameError::Engine(EngineError::LengthMismatch { .. }))
        ));
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.session().candidate_count(), 1296);
    }

    #[test]
    fn restart_resets_everything() {
        let mut game = bot_game([4, 4, 1, 0]);
        game.play_bot_turns().unwrap();

        game.restart(Code::from([1, 1, 1, 1])).unwrap();

        assert!(game.history().is_empty());
        assert_eq!(game.session().candidate_count(), 1296);
        assert_eq!(game.session().current_depth(), 0);
        assert_eq!(game.next_player(), Some(Player::Bot));
        assert_eq!(game.secret(), &Code::from([1, 1, 1, 1]));
    }

    #[test]
    fn seeded_random_games_reproduce() {
        let play = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game =
                Game::with_random_secret(Engine::default(), &mut rng, TurnOrder::BotOnly, 10)
                    .unwrap();
            game.play_bot_turns().unwrap();
            game.history().to_vec()
        };
        assert_eq!(play(17), play(17));
    }

    #[test]
    fn game_error_display() {
        assert_eq!(
            GameError::NoMove.to_string(),
            "No candidates remain, the engine cannot continue"
        );
        let wrapped = GameError::from(EngineError::LengthMismatch {
            expected: 4,
            actual: 2,
        });
        assert_eq!(wrapped.to_string(), "Code must have exactly 4 pegs, got 2");
    }
}
