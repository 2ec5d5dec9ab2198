use crate::models::ScheduleDay;

/// Uppercase and swap `-` for `_`. The backend API speaks upper-snake enums
/// (`ON_LEAVE`, `CHEON_AN`) while the form speaks lowercase tokens.
pub fn to_canonical_enum(value: &str) -> String {
    value.replace('-', "_").to_uppercase()
}

/// Map a short day token (`mon` .. `sun`, `thu`/`thurs` both accepted) to the
/// full weekday name the API expects. Unknown tokens, `undecided` and the
/// empty string all mean "no day selected".
pub fn full_day_name(token: &str) -> Option<ScheduleDay> {
    match to_canonical_enum(token.trim()).as_str() {
        "MON" => Some(ScheduleDay::Monday),
        "TUE" => Some(ScheduleDay::Tuesday),
        "WED" => Some(ScheduleDay::Wednesday),
        "THU" | "THURS" => Some(ScheduleDay::Thursday),
        "FRI" => Some(ScheduleDay::Friday),
        "SAT" => Some(ScheduleDay::Saturday),
        "SUN" => Some(ScheduleDay::Sunday),
        _ => None,
    }
}

/// Parse `"HH:mm"` into minutes since midnight. Empty input or a component
/// that is not a number yields `None`; never panics.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    if time.is_empty() {
        return None;
    }
    let (h, m) = time.split_once(':')?;
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Strip everything but ASCII digits, capped at `max` digits. Phone numbers
/// are collected with hyphens but sent to the API as bare digits.
pub fn digits_only(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_enum_uppercases_and_replaces_hyphens() {
        assert_eq!(to_canonical_enum("on-leave"), "ON_LEAVE");
        assert_eq!(to_canonical_enum("cheon_an"), "CHEON_AN");
        assert_eq!(to_canonical_enum("seoul"), "SEOUL");
        assert_eq!(to_canonical_enum(""), "");
    }

    #[test]
    fn day_tokens_map_to_full_names() {
        assert_eq!(full_day_name("mon"), Some(ScheduleDay::Monday));
        assert_eq!(full_day_name("thurs"), Some(ScheduleDay::Thursday));
        assert_eq!(full_day_name("thu"), Some(ScheduleDay::Thursday));
        assert_eq!(full_day_name("SUN"), Some(ScheduleDay::Sunday));
    }

    #[test]
    fn undecided_and_unknown_days_are_none() {
        assert_eq!(full_day_name("undecided"), None);
        assert_eq!(full_day_name(""), None);
        assert_eq!(full_day_name("someday"), None);
    }

    #[test]
    fn time_parsing() {
        assert_eq!(time_to_minutes("19:00"), Some(1140));
        assert_eq!(time_to_minutes("00:05"), Some(5));
        assert_eq!(time_to_minutes(""), None);
        assert_eq!(time_to_minutes("19"), None);
        assert_eq!(time_to_minutes("aa:30"), None);
        assert_eq!(time_to_minutes("19:xx"), None);
    }

    #[test]
    fn digits_only_strips_formatting() {
        assert_eq!(digits_only("010-1234-5678", 11), "01012345678");
        assert_eq!(digits_only("010-1234-5678-999", 11), "01012345678");
        assert_eq!(digits_only("", 11), "");
    }
}
