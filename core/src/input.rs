/// Parses a week number typed at the prompt. Surrounding whitespace is allowed.
/// Week numbers start at 1.
pub fn parse_week_number(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Parses hours for one day. `None` means the caller should fall back to zero.
pub fn parse_hours(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Parses how many recent records to list. Zero is rejected.
pub fn parse_record_count(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
