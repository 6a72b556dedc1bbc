pub const COUNTRY_CODE: char = '1';
pub const NATIONAL_DIGITS: usize = 10;

/// Keeps digits and `+` in their original order. Everything else is dropped.
pub fn filter_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect()
}

pub fn extract_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Digits of `value` with a single leading country code removed.
pub fn national_digits(value: &str) -> String {
    let digits = extract_digits(value);
    match digits.strip_prefix(COUNTRY_CODE) {
        Some(rest) => rest.to_string(),
        None => digits,
    }
}

pub fn is_complete_nanp(value: &str) -> bool {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if body.is_empty() || !body.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    national_digits(body).len() == NATIONAL_DIGITS
}
