//! Display masks for phone values.
//!
//! A mask turns the logical value (digits and `+`) into the text a widget
//! shows, and recovers the logical value from whatever text the widget sends
//! back after an edit. Both masks are idempotent: feeding a rendered string
//! back through [`PhoneMask::unmask`] and [`PhoneMask::render`] yields the same
//! string.

pub mod free_text;
pub mod template;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use free_text::FreeTextMask;
pub use template::{TemplateMask, DEFAULT_PLACEHOLDER, PHONE_TEMPLATE};

/// Length of a fully formatted number, `+1 (555) 123-4567`.
pub const MAX_DISPLAY_LEN: usize = 17;

pub trait PhoneMask: fmt::Debug + Send + Sync {
    fn kind(&self) -> MaskKind;

    fn render(&self, logical: &str) -> String;

    /// Recovers the logical value from displayed or typed text.
    fn unmask(&self, display: &str) -> String;

    /// Cleans a value supplied by the owner (initial or controlled value),
    /// which is already logical rather than displayed text.
    fn normalize_external(&self, value: &str) -> String;

    /// Most digits a logical value may carry before overflow handling applies.
    fn digit_capacity(&self, logical: &str) -> usize;

    fn empty_display(&self) -> String {
        self.render("")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskKind {
    #[default]
    FreeText,
    Template,
}

impl MaskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MaskKind::FreeText => "free-text",
            MaskKind::Template => "template",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to digits typed after a full national number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the first full number, drop everything after it.
    #[default]
    Truncate,
    /// Keep every filtered character. The free-text mask falls back to its
    /// unformatted rendering, the template keeps showing its first slots.
    Append,
}

impl OverflowPolicy {
    pub fn apply(self, logical: String, capacity: usize) -> String {
        match self {
            OverflowPolicy::Append => logical,
            OverflowPolicy::Truncate => {
                let mut seen = 0;
                let mut out = String::with_capacity(logical.len());
                for ch in logical.chars() {
                    if ch.is_ascii_digit() {
                        if seen == capacity {
                            break;
                        }
                        seen += 1;
                    }
                    out.push(ch);
                }
                out
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    pub kind: MaskKind,
    pub overflow: OverflowPolicy,
    pub placeholder: char,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            kind: MaskKind::FreeText,
            overflow: OverflowPolicy::Truncate,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl MaskOptions {
    pub fn build(&self) -> Result<Box<dyn PhoneMask>, CoreError> {
        Ok(match self.kind {
            MaskKind::FreeText => Box::new(FreeTextMask),
            MaskKind::Template => Box::new(TemplateMask::new(self.placeholder)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MaskKind, MaskOptions, OverflowPolicy};

    #[test]
    fn truncate_stops_at_capacity_and_drops_trailing_plus() {
        let value = OverflowPolicy::Truncate.apply("+155512345678+9".to_string(), 11);
        assert_eq!(value, "+15551234567");
    }

    #[test]
    fn truncate_keeps_short_values() {
        let value = OverflowPolicy::Truncate.apply("555".to_string(), 10);
        assert_eq!(value, "555");
    }

    #[test]
    fn append_keeps_everything() {
        let value = OverflowPolicy::Append.apply("5551234567890".to_string(), 10);
        assert_eq!(value, "5551234567890");
    }

    #[test]
    fn options_build_selected_mask() {
        let mask = MaskOptions::default().build().expect("free text");
        assert_eq!(mask.kind(), MaskKind::FreeText);

        let options = MaskOptions {
            kind: MaskKind::Template,
            ..MaskOptions::default()
        };
        let mask = options.build().expect("template");
        assert_eq!(mask.kind(), MaskKind::Template);
    }

    #[test]
    fn options_reject_digit_placeholder() {
        let options = MaskOptions {
            kind: MaskKind::Template,
            placeholder: '0',
            ..MaskOptions::default()
        };
        assert!(options.build().is_err());
    }

    #[test]
    fn both_masks_are_idempotent() {
        let inputs = ["", "5", "555123", "5551234567", "15551234567", "+1 (555) 123-4567"];
        for kind in [MaskKind::FreeText, MaskKind::Template] {
            let mask = MaskOptions {
                kind,
                ..MaskOptions::default()
            }
            .build()
            .expect("mask");
            for input in inputs {
                let once = mask.render(&mask.unmask(input));
                let twice = mask.render(&mask.unmask(&once));
                assert_eq!(once, twice, "{kind} mask on {input:?}");
            }
        }
    }
}
