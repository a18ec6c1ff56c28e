use regex::Regex;

/// 12-hour clock time followed by an am/pm suffix, optional space between.
const BOOKING_TIME_PATTERN: &str = r"\b(\d{1,2}:\d{2})\s*([apAP][mM])\b";

/// Pull the latest-booking time out of a free-text cell.
///
/// Takes the first pattern match reading left to right, strips the am/pm
/// suffix and lowercases the rest, yielding a bare `H:MM` string. Note the
/// "first match" contract: if a cell ever carries several times, the later
/// ones are ignored, latest or not. Whether that is a real input case is
/// an open question; until then this stays byte-compatible with the data
/// already imported downstream.
pub fn extract_booking_time(text: &str) -> Option<String> {
    let regex = Regex::new(BOOKING_TIME_PATTERN).ok()?;
    let captures = regex.captures(text)?;
    Some(captures[1].to_lowercase())
}
