//! Display functions for game state

use super::formatters::{create_progress_bar, guess_to_emoji, share_text, year_hint};
use crate::catalog::Event;
use crate::core::{Band, LetterHints, LetterState};
use crate::game::{DayStatus, Guess, HistoryEntry, MAX_ATTEMPTS, Outcome, Session, Statistics};
use colored::{ColoredString, Colorize};

/// Print the header for the open game
pub fn print_event_header(event: &Event, is_today: bool) {
    let label = if is_today {
        "TODAY'S EVENT".to_string()
    } else {
        event.date.format("%d %b %Y").to_string().to_uppercase()
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", label.bright_cyan().bold());
    println!("{}", event.clue.bright_white());
    println!("{}", "─".repeat(60).cyan());
}

fn colored_letter(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Print a single attempt
pub fn print_guess(turn: usize, guess: &Guess) {
    match guess {
        Guess::Year(g) => {
            let hint = year_hint(g);
            let hint = match g.band {
                Band::Exact => hint.green().bold(),
                Band::Close => hint.yellow(),
                Band::Far => hint.red(),
            };
            println!(
                "Turn {turn}: {:>6} {} {hint}",
                g.value.to_string().bright_white().bold(),
                guess_to_emoji(guess)
            );
        }
        Guess::Name(g) => {
            let letters: String = g
                .letters
                .iter()
                .map(|l| colored_letter(l.letter, l.state).to_string())
                .collect();
            println!(
                "Turn {turn}: {letters}  {}",
                format!(
                    "{} placed, {} misplaced",
                    g.count_correct(),
                    g.count_present()
                )
                .bright_black()
            );
        }
    }
}

/// Print every attempt of a session
pub fn print_attempts(session: &Session) {
    for (i, guess) in session.attempts().iter().enumerate() {
        print_guess(i + 1, guess);
    }
    println!(
        "{}",
        format!("Attempts: {}/{MAX_ATTEMPTS}", session.attempts().len()).bright_black()
    );
}

/// Print the letters seen so far in name mode
pub fn print_letter_hints(hints: &LetterHints) {
    if hints.is_empty() {
        return;
    }
    let letters: String = hints
        .sorted()
        .into_iter()
        .map(|(c, s)| colored_letter(c, s).to_string())
        .collect();
    println!("Letters: {letters}");
}

/// Print the win/loss banner with the answer
pub fn print_result(session: &Session, event: &Event) {
    println!();
    match session.outcome() {
        Outcome::Won => println!(
            "{}",
            format!("🎉 Correct in {} attempt(s)!", session.attempts().len())
                .green()
                .bold()
        ),
        Outcome::Lost => println!("{}", "❌ Out of attempts. The answer was:".red().bold()),
        Outcome::Unset => return,
    }
    println!("   Year:  {}", event.year.to_string().bright_yellow().bold());
    println!("   Event: {}", event.event.bright_yellow().bold());
    println!("\n{}\n", share_text(session));
}

/// Print aggregate statistics with the win distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.played);
    println!("   Wins:            {}", stats.wins);
    println!(
        "   Win rate:        {}",
        format!("{}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
    println!();
}

/// Print the recent-days list
pub fn print_history(entries: &[HistoryEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RECENT DAYS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\n   No events in this period.\n");
        return;
    }

    for entry in entries {
        let badge = match entry.status {
            DayStatus::Won => format!("✓ Solved in {}", entry.attempts).green(),
            DayStatus::Lost => "✗ Failed".red(),
            DayStatus::Today => "🎯 Today".bright_cyan(),
            DayStatus::Unplayed => "⭕ Not played".bright_black(),
        };
        let answer = entry.revealed.as_ref().map_or_else(
            || "???".to_string(),
            |r| format!("{} ({})", r.event, r.year),
        );
        println!(
            "\n   {}  {badge}\n   {}",
            entry.date.format("%d %b %Y").to_string().bold(),
            answer
        );
    }
    println!();
}
