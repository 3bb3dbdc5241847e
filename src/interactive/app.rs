//! TUI application state and logic

use crate::GameError;
use crate::game::{
    Clock, Controller, DEFAULT_HISTORY_DAYS, HistoryEntry, Mode, ModeSwitch, Outcome, Rejection,
    Submission,
};
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, C> {
    pub game: Controller<S, C>,
    pub date: NaiveDate,
    pub screen: Screen,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub history: Vec<HistoryEntry>,
    /// Highlighted row on the history screen
    pub history_selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Stats,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    ConfirmSwitch(Mode),
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    #[must_use]
    pub fn new(game: Controller<S, C>) -> Self {
        let date = game.today();
        Self {
            game,
            date,
            screen: Screen::Game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the year of today's event. TAB switches to guessing its name."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Guessing,
            history: Vec::new(),
            history_selected: 0,
        }
    }

    /// Open today's event (or the latest one)
    pub fn open_today(&mut self) {
        match self.game.open_today() {
            Ok(session) => {
                self.date = session.date();
                self.sync_input_mode();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Open the day before or after the current one
    pub fn step_date(&mut self, forward: bool) {
        let next = if forward {
            self.date.checked_add_days(Days::new(1))
        } else {
            self.date.checked_sub_days(Days::new(1))
        };
        if let Some(next) = next {
            self.open_date(next);
        }
    }

    /// Open a specific day; future days are refused
    pub fn open_date(&mut self, date: NaiveDate) {
        self.input_buffer.clear();
        match self.game.open_date(date) {
            Ok(_) => {
                self.date = date;
                self.sync_input_mode();
                if date != self.game.today() {
                    self.add_message(
                        &format!("Replaying {date}, statistics unaffected"),
                        MessageStyle::Info,
                    );
                }
            }
            Err(GameError::FutureDate(_)) => {
                self.add_message("No peeking at future events!", MessageStyle::Error);
            }
            Err(GameError::NoEventForDate(date)) => {
                self.date = date;
                self.input_mode = InputMode::Guessing;
                self.add_message(&format!("No event for {date}"), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn sync_input_mode(&mut self) {
        self.input_mode = match self.game.session() {
            Some(s) if s.is_completed() => InputMode::Finished,
            _ => InputMode::Guessing,
        };
    }

    pub fn handle_submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&input) {
            Ok(Submission::Ignored(Rejection::InvalidYear)) => {
                self.add_message("Enter a year, e.g. 1492 or -44", MessageStyle::Error);
            }
            Ok(Submission::Ignored(Rejection::EmptyName)) => {
                self.add_message("Type the event's name first", MessageStyle::Error);
            }
            Ok(Submission::Ignored(Rejection::Completed)) => {
                self.input_mode = InputMode::Finished;
            }
            Ok(Submission::Accepted(_)) => {
                let remaining = self.game.session().map_or(0, |s| s.remaining());
                self.add_message(
                    &format!("{remaining} attempt(s) left"),
                    MessageStyle::Info,
                );
            }
            Ok(Submission::Finished { outcome, .. }) => {
                self.input_mode = InputMode::Finished;
                let answer = self
                    .game
                    .target()
                    .map(|e| format!("{} ({})", e.event, e.year))
                    .unwrap_or_default();
                match outcome {
                    Outcome::Won => {
                        self.add_message(&format!("🎉 Correct! {answer}"), MessageStyle::Success);
                    }
                    _ => self.add_message(&format!("The answer was {answer}"), MessageStyle::Error),
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Ask to switch to the other mode
    pub fn request_switch(&mut self) {
        let Some(session) = self.game.session() else {
            return;
        };
        if session.is_completed() {
            self.add_message("This game is finished", MessageStyle::Error);
            return;
        }

        let target = match session.mode() {
            Mode::Year => Mode::Name,
            Mode::Name => Mode::Year,
        };
        if session.attempts().is_empty() {
            self.apply_switch(target, true);
        } else {
            self.input_mode = InputMode::ConfirmSwitch(target);
            self.add_message(
                "Switching mode discards your attempts. Continue? (y/n)",
                MessageStyle::Info,
            );
        }
    }

    pub fn apply_switch(&mut self, mode: Mode, confirmed: bool) {
        self.input_mode = InputMode::Guessing;
        match self.game.switch_mode(mode, || confirmed) {
            Ok(ModeSwitch::Switched) => {
                self.input_buffer.clear();
                self.add_message(&format!("Now guessing the {mode}"), MessageStyle::Success);
            }
            Ok(ModeSwitch::Declined) => self.add_message("Mode unchanged", MessageStyle::Info),
            Ok(ModeSwitch::Unchanged) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_history(&mut self) {
        match self.game.history(DEFAULT_HISTORY_DAYS) {
            Ok(entries) => {
                self.history = entries;
                self.history_selected = 0;
                self.screen = Screen::History;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Replay the highlighted history row
    pub fn open_selected_day(&mut self) {
        let Some(date) = self.history.get(self.history_selected).map(|e| e.date) else {
            return;
        };
        self.screen = Screen::Game;
        self.open_date(date);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match (self.screen, code) {
            (_, KeyCode::F(1)) => self.screen = Screen::Game,
            (_, KeyCode::F(2)) => self.screen = Screen::Stats,
            (_, KeyCode::F(3)) => self.show_history(),
            (Screen::Stats | Screen::History, KeyCode::Esc) => self.screen = Screen::Game,
            (Screen::History, KeyCode::Up) => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            (Screen::History, KeyCode::Down) => {
                if self.history_selected + 1 < self.history.len() {
                    self.history_selected += 1;
                }
            }
            (Screen::History, KeyCode::Enter) => self.open_selected_day(),
            (Screen::Game, _) => self.handle_game_key(code),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match (self.input_mode, code) {
            (InputMode::ConfirmSwitch(mode), KeyCode::Esc) => self.apply_switch(mode, false),
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Left) => self.step_date(false),
            (_, KeyCode::Right) => self.step_date(true),
            (InputMode::ConfirmSwitch(mode), KeyCode::Char('y' | 'Y')) => {
                self.apply_switch(mode, true);
            }
            (InputMode::ConfirmSwitch(mode), KeyCode::Char(_) | KeyCode::Enter) => {
                self.apply_switch(mode, false);
            }
            (InputMode::Guessing, KeyCode::Tab) => self.request_switch(),
            (InputMode::Guessing, KeyCode::Char(c)) => self.input_buffer.push(c),
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.handle_submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, C: Clock>(app: App<S, C>, start: Option<NaiveDate>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, start);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, C>(
    terminal: &mut Terminal<B>,
    mut app: App<S, C>,
    start: Option<NaiveDate>,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    C: Clock,
{
    match start {
        Some(date) => app.open_date(date),
        None => app.open_today(),
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                app.handle_key(key.code);
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
    use crate::catalog::loader::from_json_str;
    use crate::game::FixedClock;
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore, FixedClock> {
        let catalog = from_json_str(
            r#"[
                {"date": "2024-07-19", "year": 1066, "event": "Hastings", "clue": "arrow"},
                {"date": "2024-07-20", "year": 1969, "event": "Apollo 11", "clue": "moon"}
            ]"#,
        )
        .unwrap();
        let clock = FixedClock("2024-07-20".parse().unwrap());
        let mut app = App::new(Controller::new(catalog, MemoryStore::new(), clock).unwrap());
        app.open_today();
        app
    }

    fn type_line(app: &mut App<MemoryStore, FixedClock>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn typing_a_winning_year_finishes() {
        let mut app = app();
        type_line(&mut app, "1969");

        assert_eq!(app.input_mode, InputMode::Finished);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.statistics().wins, 1);
    }

    #[test]
    fn switch_requires_confirmation_after_guess() {
        let mut app = app();
        type_line(&mut app, "1900");

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ConfirmSwitch(Mode::Name));

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.session().unwrap().mode(), Mode::Year);

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('y'));
        assert_eq!(app.game.session().unwrap().mode(), Mode::Name);
    }

    #[test]
    fn cannot_step_into_future() {
        let mut app = app();
        app.step_date(true);
        assert_eq!(app.date, "2024-07-20".parse().unwrap());

        app.step_date(false);
        assert_eq!(app.date, "2024-07-19".parse().unwrap());
        assert_eq!(app.game.target().unwrap().event, "Hastings");
    }

    #[test]
    fn history_row_opens_that_day() {
        let mut app = app();
        app.handle_key(KeyCode::F(3));

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.history_selected, 1);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.history_selected, 0);

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.date, "2024-07-19".parse().unwrap());
        assert_eq!(app.game.target().unwrap().event, "Hastings");
    }

    #[test]
    fn opening_a_future_day_keeps_the_current_one() {
        let mut app = app();
        type_line(&mut app, "1900");

        app.open_date("2024-07-21".parse().unwrap());
        assert_eq!(app.date, "2024-07-20".parse().unwrap());
        assert_eq!(app.game.session().unwrap().attempts().len(), 1);
    }

    #[test]
    fn history_screen_loads_entries() {
        let mut app = app();
        app.handle_key(KeyCode::F(3));
        assert_eq!(app.screen, Screen::History);
        assert_eq!(app.history.len(), 2);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.screen, Screen::Game);
        assert!(!app.should_quit);
    }
}
