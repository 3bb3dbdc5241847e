//! End-to-end game flows against a file-backed store.

use chrono::NaiveDate;
use histodle::GameError;
use histodle::catalog::loader::from_json_str;
use histodle::core::{Band, LetterState};
use histodle::game::{
    Controller, DayStatus, FixedClock, Guess, Mode, Outcome, Rejection, Submission,
};
use histodle::storage::{FileStore, KeyValueStore, MemoryStore, STATS_KEY, snapshot_key};
use std::path::Path;

const CATALOG: &str = r#"[
    {"date": "2024-07-18", "year": 1453, "event": "Fall of Constantinople", "clue": "walls"},
    {"date": "2024-07-19", "year": 1066, "event": "Battle of Hastings", "clue": "arrow"},
    {"date": "2024-07-20", "year": 1969, "event": "APOLLO 11", "clue": "moon"}
]"#;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn game_in(dir: &Path, today: &str) -> Controller<FileStore, FixedClock> {
    Controller::new(
        from_json_str(CATALOG).unwrap(),
        FileStore::open(dir).unwrap(),
        FixedClock(date(today)),
    )
    .unwrap()
}

fn year_band(submission: &Submission) -> Band {
    match submission {
        Submission::Accepted(Guess::Year(g))
        | Submission::Finished {
            guess: Guess::Year(g),
            ..
        } => g.band,
        other => panic!("expected a year guess, got {other:?}"),
    }
}

#[test]
fn year_scenario_win_in_three() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");
    game.open_today().unwrap();

    let first = game.submit_guess("1900").unwrap();
    let second = game.submit_guess("2000").unwrap();
    let third = game.submit_guess("1969").unwrap();

    assert_eq!(year_band(&first), Band::Far);
    assert_eq!(year_band(&second), Band::Close);
    assert_eq!(year_band(&third), Band::Exact);
    assert!(matches!(
        third,
        Submission::Finished {
            outcome: Outcome::Won,
            ..
        }
    ));

    let stats = game.statistics();
    assert_eq!(stats.played, 1);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.distribution, [0, 0, 1, 0, 0]);
}

#[test]
fn name_scenario_apollo() {
    let mut game = Controller::new(
        from_json_str(CATALOG).unwrap(),
        MemoryStore::new(),
        FixedClock(date("2024-07-20")),
    )
    .unwrap();
    game.open_today().unwrap();
    game.switch_mode(Mode::Name, || unreachable!()).unwrap();

    let Submission::Accepted(Guess::Name(feedback)) = game.submit_guess("APOLLO 12").unwrap()
    else {
        panic!("expected accepted name guess");
    };
    let states: Vec<LetterState> = feedback.letters.iter().map(|l| l.state).collect();
    assert_eq!(&states[..7], &[LetterState::Correct; 7]);
    assert_eq!(states[7], LetterState::Absent);

    let hints = game.letter_hints();
    assert_eq!(hints.get('1'), Some(LetterState::Correct));
    assert_eq!(hints.get('2'), Some(LetterState::Absent));
}

#[test]
fn five_misses_lose_and_reset_streak() {
    let dir = tempfile::tempdir().unwrap();

    // Win yesterday's game on its own day to build a streak
    let mut game = game_in(dir.path(), "2024-07-19");
    game.open_today().unwrap();
    game.submit_guess("1066").unwrap();
    assert_eq!(game.statistics().current_streak, 1);
    drop(game);

    let mut game = game_in(dir.path(), "2024-07-20");
    game.open_today().unwrap();
    for year in ["1000", "1100", "1200", "1300", "1400"] {
        game.submit_guess(year).unwrap();
    }

    let session = game.session().unwrap();
    assert!(session.is_completed());
    assert_eq!(session.outcome(), Outcome::Lost);

    let stats = game.statistics();
    assert_eq!(stats.played, 2);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
}

#[test]
fn finished_game_is_restored_and_locked() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");
    game.open_today().unwrap();
    game.submit_guess("1950").unwrap();
    game.submit_guess("1969").unwrap();
    drop(game);

    let mut game = game_in(dir.path(), "2024-07-20");
    let session = game.open_today().unwrap();
    assert!(session.is_completed());
    assert_eq!(session.attempts().len(), 2);
    assert_eq!(session.outcome(), Outcome::Won);

    assert_eq!(
        game.submit_guess("1969").unwrap(),
        Submission::Ignored(Rejection::Completed)
    );
    assert!(matches!(
        game.switch_mode(Mode::Name, || true),
        Err(GameError::SessionCompleted(_))
    ));

    // Statistics were loaded, not recounted
    assert_eq!(game.statistics().played, 1);
}

#[test]
fn unfinished_game_starts_over() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");
    game.open_today().unwrap();
    game.switch_mode(Mode::Name, || true).unwrap();
    game.submit_guess("moon landing").unwrap();
    drop(game);

    let mut game = game_in(dir.path(), "2024-07-20");
    let session = game.open_today().unwrap();
    assert_eq!(session.mode(), Mode::Year);
    assert!(session.attempts().is_empty());
}

#[test]
fn replay_leaves_statistics_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");

    game.open_date(date("2024-07-18")).unwrap();
    assert!(!game.is_today());
    game.submit_guess("1453").unwrap();
    assert!(game.session().unwrap().is_completed());

    assert_eq!(game.statistics().played, 0);
    drop(game);

    let store = FileStore::open(dir.path()).unwrap();
    assert!(store.get(STATS_KEY).unwrap().is_none());
    assert!(store.get(&snapshot_key(date("2024-07-18"))).unwrap().is_some());
}

#[test]
fn missing_date_shows_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");

    assert!(matches!(
        game.open_date(date("2024-07-17")),
        Err(GameError::NoEventForDate(_))
    ));
    assert!(game.session().is_none());
    assert!(game.target().is_none());
    assert!(matches!(
        game.submit_guess("1969"),
        Err(GameError::NoActiveSession)
    ));
}

#[test]
fn future_day_cannot_be_played_early() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-19");

    assert!(matches!(
        game.open_date(date("2024-07-20")),
        Err(GameError::FutureDate(_))
    ));
    assert!(game.submit_guess("1969").is_err());
    drop(game);

    // Once the day arrives it is a normal, counted game
    let mut game = game_in(dir.path(), "2024-07-20");
    let session = game.open_today().unwrap();
    assert!(!session.is_completed());
    assert!(matches!(
        game.submit_guess("1969").unwrap(),
        Submission::Finished {
            outcome: Outcome::Won,
            ..
        }
    ));
    assert_eq!(game.statistics().played, 1);
}

#[test]
fn history_reflects_saved_games() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), "2024-07-20");

    game.open_date(date("2024-07-18")).unwrap();
    for year in ["1", "2", "3", "4", "5"] {
        game.submit_guess(year).unwrap();
    }
    game.open_date(date("2024-07-19")).unwrap();
    game.submit_guess("1066").unwrap();

    let history = game.history(7).unwrap();
    let statuses: Vec<DayStatus> = history.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![DayStatus::Today, DayStatus::Won, DayStatus::Lost]
    );
    assert_eq!(
        history[2].revealed.as_ref().unwrap().event,
        "Fall of Constantinople"
    );

    let short = game.history(1).unwrap();
    assert_eq!(short.len(), 1);
}

#[test]
fn malformed_catalog_is_load_failure() {
    for json in ["", "[]", "{}", r#"[{"date": "2024-01-01"}]"#] {
        assert!(matches!(
            from_json_str(json),
            Err(GameError::CatalogLoad(_))
        ));
    }
}
