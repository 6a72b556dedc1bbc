use crate::domain::{extract_digits, filter_phone_input, COUNTRY_CODE, NATIONAL_DIGITS};
use crate::mask::{MaskKind, PhoneMask};

const DISPLAY_PREFIX: &str = "+1 ";

/// Formats as `+1 (AAA) BBB-CCCC` once the trailing eleven digits line up,
/// otherwise falls back to `+1 <digits>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeTextMask;

impl PhoneMask for FreeTextMask {
    fn kind(&self) -> MaskKind {
        MaskKind::FreeText
    }

    fn render(&self, logical: &str) -> String {
        let mut digits = extract_digits(logical);
        if !digits.starts_with(COUNTRY_CODE) {
            digits.insert(0, COUNTRY_CODE);
        }

        let full = NATIONAL_DIGITS + 1;
        if digits.len() >= full {
            let tail = &digits[digits.len() - full..];
            if tail.starts_with(COUNTRY_CODE) {
                return format!("+1 ({}) {}-{}", &tail[1..4], &tail[4..7], &tail[7..]);
            }
        }

        format!("{DISPLAY_PREFIX}{}", &digits[1..])
    }

    // Widget text begins with the rendered `+1 ` prefix; it is not typed input.
    fn unmask(&self, display: &str) -> String {
        let typed = display.strip_prefix(DISPLAY_PREFIX).unwrap_or(display);
        filter_phone_input(typed)
    }

    fn normalize_external(&self, value: &str) -> String {
        filter_phone_input(value)
    }

    fn digit_capacity(&self, logical: &str) -> usize {
        match logical.chars().find(char::is_ascii_digit) {
            Some(COUNTRY_CODE) => NATIONAL_DIGITS + 1,
            _ => NATIONAL_DIGITS,
        }
    }
}
