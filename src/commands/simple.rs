//! Simple interactive CLI mode
//!
//! Text-based assistant for a game played on a real board: the engine suggests
//! a code, the user reports the feedback the codemaker gave.

use crate::core::{Code, Feedback};
use crate::output::formatters::feedback_to_pegs;
use crate::solver::{Engine, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Assistant state: the session plus the observations that built it
pub struct Assistant {
    engine: Engine,
    session: Session,
    history: Vec<(Code, Feedback)>,
    pending: Option<Code>,
}

impl Assistant {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let session = engine.session();
        let pending = session.greedy_guess().cloned();
        Self {
            engine,
            session,
            history: Vec::new(),
            pending,
        }
    }

    /// Guess the user is about to play
    #[must_use]
    pub const fn pending(&self) -> Option<&Code> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Replace the suggestion with a code of the user's choosing
    ///
    /// # Errors
    /// Returns an engine error if the text is not a valid code.
    pub fn override_guess(&mut self, text: &str) -> Result<()> {
        self.pending = Some(self.engine.parse_code(text)?);
        Ok(())
    }

    /// Apply the feedback for the pending guess
    ///
    /// # Errors
    /// Returns an error if there is no pending guess or the feedback is
    /// impossible for this board.
    pub fn record(&mut self, feedback: Feedback) -> Result<()> {
        let length = self.engine.code_length();
        if feedback.black() + feedback.white() > length {
            anyhow::bail!("Feedback {feedback} has more than {length} pegs");
        }
        let guess = self
            .pending
            .take()
            .ok_or_else(|| anyhow::anyhow!("No guess to score"))?;

        self.session.advance(&guess, feedback)?;
        self.history.push((guess, feedback));
        self.pending = self.session.greedy_guess().cloned();
        Ok(())
    }

    /// Drop the last observation by replaying the rest from a reset session
    ///
    /// Returns `false` if there was nothing to undo.
    ///
    /// # Errors
    /// Propagates engine errors from the replay.
    pub fn undo(&mut self) -> Result<bool> {
        if self.history.pop().is_none() {
            return Ok(false);
        }
        self.session.reset();
        for (guess, feedback) in &self.history {
            self.session.advance(guess, *feedback)?;
        }
        self.pending = self.session.greedy_guess().cloned();
        Ok(true)
    }

    /// Start over with the full code space
    pub fn new_game(&mut self) {
        self.session.reset();
        self.history.clear();
        self.pending = self.session.greedy_guess().cloned();
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn run_simple<R: BufRead, W: Write>(
    engine: Engine,
    max_rounds: usize,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let length = engine.code_length();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║            Mastermind Solver - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Board: {length} pegs, {} colors (0-{}), {max_rounds} rounds.",
        engine.colors(),
        engine.colors() - 1
    )?;
    writeln!(out, "After each guess, enter the codemaker's feedback:")?;
    writeln!(out, "  - as counts: '2 1' (2 black, 1 white)")?;
    writeln!(out, "  - or as pegs: 'BBW' (B=black, W=white)")?;
    writeln!(out, "  - or 'win' if the code was cracked\n")?;
    writeln!(
        out,
        "Commands: 'guess <code>' to play your own code, 'undo', 'new', 'quit'\n"
    )?;

    let mut assistant = Assistant::new(engine);

    loop {
        let round = assistant.history().len() + 1;

        let Some(guess) = assistant.pending().cloned() else {
            writeln!(
                out,
                "\n❌ No candidates remain! The feedback may be incorrect."
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

            match read_line(&mut input, &mut out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(()),
                Some("undo" | "u") => {
                    assistant.undo()?;
                }
                Some("new" | "n") => assistant.new_game(),
                Some(_) => {}
            }
            continue;
        };

        if round > max_rounds {
            writeln!(
                out,
                "\n{}",
                format!("Out of rounds after {max_rounds} guesses.").red()
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
            match read_line(&mut input, &mut out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(()),
                Some("undo" | "u") => {
                    assistant.undo()?;
                }
                Some("new" | "n") => assistant.new_game(),
                Some(_) => {}
            }
            continue;
        }

        let remaining = assistant.session().candidate_count();
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "Round {round}: {remaining} candidates remaining")?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "\nPlay: {}\n", guess.to_string().bright_yellow().bold())?;

        if remaining <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in assistant.session().candidates() {
                writeln!(out, "  • {candidate}")?;
            }
            writeln!(out)?;
        }

        let Some(line) = read_line(&mut input, &mut out, "Feedback")? else {
            return Ok(());
        };
        let line = line.to_lowercase();

        match line.as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                assistant.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "undo" | "u" => {
                if assistant.undo()? {
                    writeln!(out, "✓ Undone! Back to round {}\n", round - 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            "win" | "correct" | "solved" => {
                assistant.record(Feedback::perfect(length))?;
                report_win(&mut out, &assistant, length)?;
                assistant.new_game();
            }
            _ => {
                if let Some(code) = line.strip_prefix("guess ") {
                    match assistant.override_guess(code) {
                        Ok(()) => writeln!(out, "✓ Using your code instead\n")?,
                        Err(err) => writeln!(out, "❌ {err}\n")?,
                    }
                    continue;
                }

                match line.parse::<Feedback>() {
                    Ok(feedback) => match assistant.record(feedback) {
                        Ok(()) if feedback.is_perfect(length) => {
                            report_win(&mut out, &assistant, length)?;
                            assistant.new_game();
                        }
                        Ok(()) => {}
                        Err(err) => writeln!(out, "❌ {err}\n")?,
                    },
                    Err(err) => writeln!(out, "❌ {err}. Use '2 1' or 'BBW'\n")?,
                }
            }
        }
    }
}

fn report_win<W: Write>(out: &mut W, assistant: &Assistant, length: usize) -> Result<()> {
    let rounds = assistant.history().len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉  C O D E   C R A C K E D !  🎉        "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Solved in {rounds} {}",
        if rounds == 1 { "guess" } else { "guesses" }
    )?;
    writeln!(out, "\n  Guess history:")?;
    for (i, (code, feedback)) in assistant.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {code} {}",
            i + 1,
            feedback_to_pegs(*feedback, length)
        )?;
    }
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_simple(Engine::default(), 10, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn assistant_suggests_greedy_guess() {
        let assistant = Assistant::new(Engine::default());
        assert_eq!(assistant.pending(), Some(&Code::from([0, 0, 0, 0])));
    }

    #[test]
    fn assistant_record_advances_session() {
        let mut assistant = Assistant::new(Engine::default());
        assistant.record(Feedback::new(1, 0)).unwrap();

        assert_eq!(assistant.session().candidate_count(), 500);
        assert_eq!(assistant.pending(), Some(&Code::from([0, 1, 1, 1])));
    }

    #[test]
    fn assistant_rejects_oversized_feedback() {
        let mut assistant = Assistant::new(Engine::default());
        assert!(assistant.record(Feedback::new(3, 2)).is_err());
        assert_eq!(assistant.session().current_depth(), 0);
    }

    #[test]
    fn assistant_undo_replays_history() {
        let mut assistant = Assistant::new(Engine::default());
        assistant.record(Feedback::new(1, 0)).unwrap();
        let after_first = assistant.session().candidate_count();
        assistant.record(Feedback::new(0, 1)).unwrap();

        assert!(assistant.undo().unwrap());
        assert_eq!(assistant.session().candidate_count(), after_first);
        assert_eq!(assistant.session().current_depth(), 1);
        assert_eq!(assistant.pending(), Some(&Code::from([0, 1, 1, 1])));

        assert!(assistant.undo().unwrap());
        assert!(!assistant.undo().unwrap());
        assert_eq!(assistant.session().candidate_count(), 1296);
    }

    #[test]
    fn assistant_override_guess() {
        let mut assistant = Assistant::new(Engine::default());
        assistant.override_guess("0011").unwrap();
        assert_eq!(assistant.pending(), Some(&Code::from([0, 0, 1, 1])));
        assert!(assistant.override_guess("0019").is_err());

        assistant.record(Feedback::new(2, 0)).unwrap();
        assert_eq!(assistant.history()[0].0, Code::from([0, 0, 1, 1]));
    }

    #[test]
    fn script_plays_to_win() {
        // Secret 0123: greedy plays 0000, 0111, 0122, 0123
        let output = run("1 0\n2 0\nBBB\nwin\nquit\n");
        assert!(output.contains("Round 4"));
        assert!(output.contains("Solved in 4 guesses"));
    }

    #[test]
    fn script_reports_inconsistent_feedback() {
        let output = run("0 1\nquit\n");
        assert!(output.contains("No candidates remain"));
    }

    #[test]
    fn script_rejects_bad_feedback_text() {
        let output = run("hello\nquit\n");
        assert!(output.contains("Invalid feedback"));
        assert!(output.contains("Round 1"));
    }

    #[test]
    fn script_ends_at_end_of_input() {
        let output = run("");
        assert!(output.contains("Round 1: 1296 candidates remaining"));
    }
}
