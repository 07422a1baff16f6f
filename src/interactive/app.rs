//! TUI application state and logic

use crate::game::{Game, GameError, GameStatus, Player, TurnOrder, random_secret};
use crate::solver::Engine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub human_wins: usize,
    pub bot_wins: usize,
    pub losses: usize,
}

impl App {
    /// Create the app with a cooperative human/bot game
    ///
    /// A `seed` makes the sequence of secrets reproducible.
    ///
    /// # Errors
    /// Returns an error if `max_rounds` is zero.
    pub fn new(engine: Engine, max_rounds: usize, seed: Option<u64>) -> Result<Self, GameError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = Game::with_random_secret(engine, &mut rng, TurnOrder::Alternating, max_rounds)?;

        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! You and the bot take turns cracking the code.",
            MessageStyle::Info,
        );
        app.add_message(
            &format!(
                "Type {} colors (0-{}) and press Enter.",
                engine.code_length(),
                engine.colors() - 1
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the typed code as the human's guess, then let the bot answer
    pub fn submit_input(&mut self) {
        if self.game.is_over() {
            self.add_message("Game over. Press 'n' for a new game.", MessageStyle::Error);
            return;
        }

        let guess = match self.game.engine().parse_code(&self.input_buffer) {
            Ok(code) => code,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.game.submit(guess) {
            Ok(feedback) => {
                self.input_buffer.clear();
                self.add_message(&format!("You scored {feedback}"), MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.play_bot();
        self.check_outcome();
    }

    fn play_bot(&mut self) {
        while self.game.next_player() == Some(Player::Bot) {
            match self.game.play_bot_turn() {
                Ok(feedback) => {
                    if let Some(turn) = self.game.history().last() {
                        let text = format!("Bot played {} and scored {feedback}", turn.guess);
                        self.add_message(&text, MessageStyle::Info);
                    }
                }
                Err(err) => {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                    return;
                }
            }
        }
    }

    fn check_outcome(&mut self) {
        match self.game.status() {
            GameStatus::InProgress { .. } => {}
            GameStatus::Won { by, rounds } => {
                self.stats.total_games += 1;
                match by {
                    Player::Human => self.stats.human_wins += 1,
                    Player::Bot => self.stats.bot_wins += 1,
                }
                self.add_message(
                    &format!("🎉 Goal reached by {by} in {rounds} rounds!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.stats.losses += 1;
                self.add_message(
                    &format!("Out of rounds! The code was {}", self.game.secret()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        let secret = random_secret(self.game.engine(), &mut self.rng);
        if let Err(err) = self.game.restart(secret) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started! Your move.", MessageStyle::Info);
    }

    /// Append a typed character if it can be part of a code
    pub fn push_input(&mut self, c: char) {
        if c.is_ascii_digit() || c == ' ' || c == ',' {
            self.input_buffer.push(c);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char(c) => app.push_input(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Esc => app.input_buffer.clear(),
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_app() -> App {
        App::new(Engine::default(), 10, Some(5)).unwrap()
    }

    fn type_code(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_input(c);
        }
    }

    #[test]
    fn new_app_waits_for_human() {
        let app = seeded_app();
        assert_eq!(app.game.next_player(), Some(Player::Human));
        assert!(app.game.history().is_empty());
        assert_eq!(app.messages.len(), 2);
    }

    #[test]
    fn push_input_filters_characters() {
        let mut app = seeded_app();
        type_code(&mut app, "0a1 b2,3");
        assert_eq!(app.input_buffer, "01 2,3");
    }

    #[test]
    fn human_move_triggers_bot_reply() {
        let mut app = seeded_app();
        type_code(&mut app, "0011");
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        let history = app.game.history();
        assert_eq!(history[0].player, Player::Human);
        if !app.game.is_over() {
            assert_eq!(history.len(), 2);
            assert_eq!(history[1].player, Player::Bot);
            assert_eq!(app.game.next_player(), Some(Player::Human));
        }
    }

    #[test]
    fn invalid_input_is_reported() {
        let mut app = seeded_app();
        type_code(&mut app, "019");
        app.submit_input();

        assert!(app.game.history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = seeded_app();
        let secret = app.game.secret().to_string();
        type_code(&mut app, &secret);
        app.submit_input();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.human_wins, 1);
        assert!(app.game.is_over());
    }

    #[test]
    fn game_played_to_completion_is_recorded() {
        let mut app = seeded_app();
        while !app.game.is_over() {
            let guess = app.game.bot_move().unwrap().to_string();
            type_code(&mut app, &guess);
            app.submit_input();
        }

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.human_wins + app.stats.bot_wins, 1);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = seeded_app();
        type_code(&mut app, "0011");
        app.submit_input();
        app.new_game();

        assert!(app.game.history().is_empty());
        assert_eq!(app.game.session().candidate_count(), 1296);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = seeded_app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
