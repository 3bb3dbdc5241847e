//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle, Screen};
use crate::core::{Band, LetterHints, LetterState};
use crate::game::{DayStatus, Guess, MAX_ATTEMPTS, Mode, Outcome};
use crate::output::formatters::year_hint;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, ListState, Paragraph,
        Wrap,
    },
};

/// Main UI rendering function
pub fn ui<S, C>(f: &mut Frame, app: &App<S, C>)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
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

    match app.screen {
        Screen::Game => render_game(f, app, chunks[1]),
        Screen::Stats => render_stats(f, app, chunks[1]),
        Screen::History => render_history(f, app, chunks[1]),
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📜 HISTODLE - Guess the day in history")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(rounded("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn render_game<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Event + attempts
            Constraint::Percentage(40), // Keyboard + messages
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(main_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_clue(f, app, left[0]);
    render_attempts(f, app, left[1]);
    render_keyboard(f, &app.game.letter_hints(), right[0]);
    render_messages(f, app, right[1]);
}

fn render_clue<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let title = if app.game.is_today() {
        " Today's Event ".to_string()
    } else {
        format!(" {} ", app.date.format("%d %b %Y"))
    };

    let text = app
        .game
        .target()
        .map_or("No event for this date", |e| e.clue.as_str());

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(rounded(&title))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(turn: usize, guess: &Guess) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{turn}: "))];
    match guess {
        Guess::Year(g) => {
            let color = match g.band {
                Band::Exact => Color::Green,
                Band::Close => Color::Yellow,
                Band::Far => Color::Red,
            };
            spans.push(Span::styled(
                format!("{:>6}", g.value),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(year_hint(g), Style::default().fg(color)));
        }
        Guess::Name(g) => {
            spans.extend(g.letters.iter().map(|l| {
                Span::styled(
                    format!(" {} ", l.letter),
                    state_style(l.state).add_modifier(Modifier::BOLD),
                )
            }));
        }
    }
    Line::from(spans)
}

fn render_attempts<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let Some(session) = app.game.session() else {
        f.render_widget(Paragraph::new("").block(rounded(" Attempts ")), area);
        return;
    };

    let mut lines: Vec<Line> = session
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, g)| guess_line(i + 1, g))
        .collect();

    if session.is_completed()
        && let Some(event) = app.game.target()
    {
        let (text, color) = match session.outcome() {
            Outcome::Won => ("🎉 Correct!", Color::Green),
            _ => ("Out of attempts", Color::Red),
        };
        lines.push(Line::from(""));
        lines.push(Line::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!("Year:  {}", event.year)));
        lines.push(Line::from(format!("Event: {}", event.event)));
    }

    let title = format!(
        " Attempts {}/{MAX_ATTEMPTS} | guessing the {} ",
        session.attempts().len(),
        session.mode()
    );
    let paragraph = Paragraph::new(lines).block(rounded(&title));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, hints: &LetterHints, area: Rect) {
    const ROWS: [&str; 4] = ["1234567890", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| {
                        let style = hints
                            .get(c)
                            .map_or_else(Style::default, state_style);
                        Span::styled(format!(" {c} "), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(rounded(" Letters "));
    f.render_widget(keyboard, area);
}

fn render_messages<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect) {
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

fn render_stats<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let stats = app.game.statistics();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let summary = Paragraph::new(vec![Line::from(format!(
        "Played: {}   Wins: {}   Win rate: {}%   Streak: {}   Best: {}",
        stats.played,
        stats.wins,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    ))])
    .alignment(Alignment::Center)
    .block(rounded(" Statistics "));
    f.render_widget(summary, chunks[0]);

    let bars: Vec<Bar> = stats
        .distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .label(Line::from((i + 1).to_string()))
                .value(u64::from(count))
        })
        .collect();

    let chart = BarChart::default()
        .block(rounded(" Wins by attempt "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, chunks[1]);
}

fn render_history<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| {
            let (badge, color) = match entry.status {
                DayStatus::Won => (format!("✓ in {}", entry.attempts), Color::Green),
                DayStatus::Lost => ("✗ failed".to_string(), Color::Red),
                DayStatus::Today => ("🎯 today".to_string(), Color::Cyan),
                DayStatus::Unplayed => ("⭕ not played".to_string(), Color::DarkGray),
            };
            let answer = entry
                .revealed
                .as_ref()
                .map_or_else(|| "???".to_string(), |r| format!("{} ({})", r.event, r.year));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  ", entry.date.format("%d %b %Y"))),
                Span::styled(format!("{badge:<14}"), Style::default().fg(color)),
                Span::raw(answer),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(rounded(" Last 7 days | ↑/↓ select | ENTER replay "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.history_selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_input<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let mode = app.game.session().map(crate::game::Session::mode);

    let (title, content, color) = match (app.screen, app.input_mode) {
        (Screen::Stats | Screen::History, _) => (" ESC to go back ", "", Color::DarkGray),
        (_, InputMode::Finished) => (
            " Game over | ←/→ other days | F2 stats | ESC quit ",
            "",
            Color::Green,
        ),
        (_, InputMode::ConfirmSwitch(_)) => (
            " Discard attempts and switch mode? (y/n) ",
            "",
            Color::Magenta,
        ),
        (_, InputMode::Guessing) => (
            match mode {
                Some(Mode::Name) => " Guess the event's name | TAB year mode ",
                _ => " Guess the year | TAB name mode ",
            },
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

fn render_status<S, C>(f: &mut Frame, app: &App<S, C>, area: Rect)
where
    S: crate::storage::KeyValueStore,
    C: crate::game::Clock,
{
    let stats = app.game.statistics();
    let text = format!(
        "Played {} | Win rate {}% | Streak {}    F1 game  F2 stats  F3 history  ←/→ day  ESC quit",
        stats.played,
        stats.win_rate(),
        stats.current_streak
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
