use std::io::{self, BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    services::{PopularMovie, SimilarMovie},
};

/// Prints a prompt and reads one trimmed line from stdin
pub fn prompt(label: &str) -> AppResult<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for a non-negative integer parameter
///
/// Rejects non-numeric or negative text before any query runs; the
/// recommenders themselves only ever see a valid count.
pub fn prompt_count(label: &str) -> AppResult<usize> {
    parse_count(&prompt(label)?)
}

/// Parses a non-negative integer parameter from user input
pub fn parse_count(raw: &str) -> AppResult<usize> {
    raw.parse().map_err(|_| {
        AppError::InvalidInput(format!("expected a non-negative integer, got '{}'", raw))
    })
}

/// Renders popularity recommendations as an aligned stdout table
pub fn print_popular(rows: &[PopularMovie]) {
    if rows.is_empty() {
        println!("No movies matched the genre and rating threshold.");
        return;
    }

    println!("{:<50} {:>10} {:>14}", "title", "avg_rating", "rating_count");
    for row in rows {
        println!(
            "{:<50} {:>10.3} {:>14}",
            row.title, row.avg_rating, row.rating_count
        );
    }
}

/// Renders similar-movie recommendations as an aligned stdout table
pub fn print_similar(rows: &[SimilarMovie]) {
    if rows.is_empty() {
        println!("No other movies share this genre combination.");
        return;
    }

    println!("{:<50} {}", "title", "genres");
    for row in rows {
        println!("{:<50} {}", row.title, row.genres);
    }
}
