//! TUI rendering with ratatui
//!
//! Board, candidate panel and message log for the cooperative game.

use super::app::{App, MessageStyle};
use crate::core::{Code, Color as PegColor, Feedback};
use crate::game::{GameStatus, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Engine panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Candidate Elimination & Greedy Bot")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Terminal color for a peg, cycling when there are more colors than entries
fn peg_color(color: PegColor) -> Color {
    const PALETTE: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::DarkGray,
    ];
    PALETTE[usize::from(color) % PALETTE.len()]
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.pegs()
        .iter()
        .map(|&color| {
            Span::styled(
                format!("●{color} "),
                Style::default()
                    .fg(peg_color(color))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn feedback_span(feedback: Feedback, code_length: usize) -> Span<'static> {
    Span::styled(
        crate::output::formatters::feedback_to_pegs(feedback, code_length),
        Style::default().fg(Color::White),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.game.engine().code_length();
    let history = app.game.history();
    let mut lines = Vec::with_capacity(app.game.max_rounds() + 2);

    for round in 0..app.game.max_rounds() {
        let mut spans = vec![Span::styled(
            format!("{:2} ", round + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(turn) = history.get(round) {
            let (label, color) = match turn.player {
                Player::Human => ("You ", Color::Yellow),
                Player::Bot => ("Bot ", Color::Cyan),
            };
            spans.push(Span::styled(label, Style::default().fg(color)));
            spans.extend(code_spans(&turn.guess));
            spans.push(Span::raw("  "));
            spans.push(feedback_span(turn.feedback, code_length));
        } else if round == history.len() && !app.game.is_over() {
            spans.push(Span::styled("▶   ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                app.input_buffer.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("    {}", "○  ".repeat(code_length)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut secret_row = vec![Span::raw("   Code ")];
    if app.game.is_over() {
        secret_row.extend(code_spans(app.game.secret()));
    } else {
        secret_row.push(Span::styled(
            "?  ".repeat(code_length),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(secret_row));

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Elimination gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.game.engine().config().space_size();
    let remaining = app.game.session().candidate_count();
    let eliminated_pct = ((total - remaining) * 100 / total.max(1)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct.min(100))
        .label(format!("{remaining}/{total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let count = session.candidate_count();

    let mut lines = Vec::new();
    match session.greedy_guess() {
        Some(next) if !app.game.is_over() => {
            let mut spans = vec![Span::raw("Bot would play: ")];
            spans.extend(code_spans(next));
            lines.push(Line::from(spans));
        }
        None => lines.push(Line::from(Span::styled(
            "No consistent code remains",
            Style::default().fg(Color::Red),
        ))),
        Some(_) => {}
    }

    if count <= 12 {
        for candidate in session.candidates() {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(code_spans(candidate));
            lines.push(Line::from(spans));
        }
    } else {
        lines.push(Line::from(format!("{count} codes still consistent")));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.game.status() {
        GameStatus::Won { .. } => (
            " 🎉 CODE CRACKED! 🎉 | 'n' new game, 'q' quit ",
            "",
            Color::Green,
        ),
        GameStatus::Lost => (" Out of rounds | 'n' new game, 'q' quit ", "", Color::Red),
        GameStatus::InProgress { .. } => (
            " Your guess (digits, Enter to submit, Esc to clear) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Games: {} | You: {} | Bot: {} | Lost: {} | Round {}/{} | q: Quit  n: New Game",
        app.stats.total_games,
        app.stats.human_wins,
        app.stats.bot_wins,
        app.stats.losses,
        app.game.rounds_played(),
        app.game.max_rounds()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
