use chrono::{Datelike, Local};

use crate::models::{Season, Semester};

/// Season for a 1-indexed calendar month.
pub fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

/// Semester tag for the submission moment. This is current-semester tagging
/// only; it is independent of the study's own schedule.
pub fn current_semester() -> Semester {
    let now = Local::now();
    Semester {
        year: now.year(),
        season: season_for_month(now.month()),
    }
}
