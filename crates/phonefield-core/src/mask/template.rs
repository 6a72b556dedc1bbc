use crate::domain::{extract_digits, national_digits, NATIONAL_DIGITS};
use crate::error::CoreError;
use crate::mask::{MaskKind, PhoneMask};

/// Literal template; every `0` is a digit slot.
pub const PHONE_TEMPLATE: &str = "+1 (000) 000-0000";
pub const DEFAULT_PLACEHOLDER: char = '_';

const SLOT: char = '0';
const LITERAL_PREFIX: &str = "+1 ";

/// Fills the fixed template left to right. Unfilled slots stay visible as
/// the placeholder character; digits past the last slot are never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMask {
    placeholder: char,
}

impl TemplateMask {
    pub fn new(placeholder: char) -> Result<Self, CoreError> {
        if placeholder.is_ascii_digit() || placeholder == '+' || placeholder.is_control() {
            return Err(CoreError::InvalidPlaceholderChar(placeholder));
        }
        Ok(Self { placeholder })
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }
}

impl Default for TemplateMask {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl PhoneMask for TemplateMask {
    fn kind(&self) -> MaskKind {
        MaskKind::Template
    }

    fn render(&self, logical: &str) -> String {
        let mut digits = extract_digits(logical).into_bytes().into_iter();
        PHONE_TEMPLATE
            .chars()
            .map(|ch| match ch {
                SLOT => digits.next().map(char::from).unwrap_or(self.placeholder),
                literal => literal,
            })
            .collect()
    }

    // A `1` typed into the first slot is taken as the country code, which
    // the literal prefix already shows. NANP area codes never start with `1`.
    fn unmask(&self, display: &str) -> String {
        let typed = display.strip_prefix(LITERAL_PREFIX).unwrap_or(display);
        national_digits(typed)
    }

    fn normalize_external(&self, value: &str) -> String {
        national_digits(value)
    }

    fn digit_capacity(&self, _logical: &str) -> usize {
        NATIONAL_DIGITS
    }
}

#[cfg(test)]
mod tests {
    use super::{TemplateMask, PHONE_TEMPLATE};
    use crate::mask::PhoneMask;

    #[test]
    fn empty_value_shows_unfilled_template() {
        let mask = TemplateMask::default();
        assert_eq!(mask.empty_display(), "+1 (___) ___-____");
    }

    #[test]
    fn fills_slots_left_to_right() {
        let mask = TemplateMask::default();
        assert_eq!(mask.render("555"), "+1 (555) ___-____");
        assert_eq!(mask.render("5551"), "+1 (555) 1__-____");
        assert_eq!(mask.render("5551234567"), "+1 (555) 123-4567");
    }

    #[test]
    fn ignores_digits_past_last_slot() {
        let mask = TemplateMask::default();
        assert_eq!(mask.render("55512345678"), "+1 (555) 123-4567");
    }

    #[test]
    fn unmask_drops_literals_and_placeholders() {
        let mask = TemplateMask::default();
        assert_eq!(mask.unmask("+1 (555) 1__-____"), "5551");
        assert_eq!(mask.unmask("+1 (___) ___-____"), "");
        assert_eq!(mask.unmask("15551234567"), "5551234567");
        assert_eq!(mask.unmask("+1 (___) ___-____1"), "");
        assert_eq!(mask.unmask("+1 (5__) ___-____1"), "51");
    }

    #[test]
    fn external_values_drop_country_code() {
        let mask = TemplateMask::default();
        assert_eq!(mask.normalize_external("1"), "");
        assert_eq!(mask.normalize_external("+15551234567"), "5551234567");
        assert_eq!(mask.normalize_external("555-1234"), "5551234");
    }

    #[test]
    fn custom_placeholder_is_used() {
        let mask = TemplateMask::new(' ').expect("space placeholder");
        assert_eq!(mask.render("5"), "+1 (5  )    -    ");
        assert_eq!(mask.unmask(&mask.render("5")), "5");
    }

    #[test]
    fn rejects_placeholders_that_would_unmask() {
        assert!(TemplateMask::new('7').is_err());
        assert!(TemplateMask::new('+').is_err());
    }

    #[test]
    fn template_has_ten_slots() {
        assert_eq!(PHONE_TEMPLATE.chars().filter(|ch| *ch == '0').count(), 10);
    }
}
