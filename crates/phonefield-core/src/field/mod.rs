//! Phone field controller.
//!
//! [`PhoneField`] owns the logical value of one phone input. Every keystroke
//! is filtered to digits and `+`, stored, forwarded to the owner's change
//! callback and rendered through the configured [`PhoneMask`]. The field never
//! fails: anything that cannot be formatted degrades to a plainer rendering.

pub mod props;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dto::FieldSnapshot;
use crate::error::CoreError;
use crate::mask::{MaskOptions, OverflowPolicy, PhoneMask};

pub use props::{FieldProps, HiddenField, WidgetProps, DEFAULT_FIELD_NAME};

/// Who owns the value. Fixed for the lifetime of the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// The owner's value replaces internal state whenever it is synced.
    Controlled,
    /// Seeded once from the initial value, then self-managed.
    #[default]
    Uncontrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeystrokeOutcome {
    Applied { display: String, logical: String },
    /// The field is disabled; nothing changed and no callback ran.
    Suppressed,
}

type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct PhoneField {
    mode: InputMode,
    value: String,
    mask: Box<dyn PhoneMask>,
    overflow: OverflowPolicy,
    props: FieldProps,
    on_change: Option<ChangeCallback>,
}

impl PhoneField {
    pub fn new(
        initial_value: &str,
        mode: InputMode,
        mask: Box<dyn PhoneMask>,
        overflow: OverflowPolicy,
    ) -> Self {
        let mut field = Self {
            mode,
            value: String::new(),
            mask,
            overflow,
            props: FieldProps::default(),
            on_change: None,
        };
        field.value = field.accept_external(initial_value);
        field
    }

    pub fn from_options(
        initial_value: &str,
        mode: InputMode,
        options: &MaskOptions,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(
            initial_value,
            mode,
            options.build()?,
            options.overflow,
        ))
    }

    pub fn with_props(mut self, props: FieldProps) -> Self {
        self.props = props;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Applies the text the widget reports after an edit.
    pub fn handle_input(&mut self, raw_text: &str) -> KeystrokeOutcome {
        if self.props.disabled {
            return KeystrokeOutcome::Suppressed;
        }

        let unmasked = self.mask.unmask(raw_text);
        let capacity = self.mask.digit_capacity(&unmasked);
        self.value = self.overflow.apply(unmasked, capacity);

        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }

        KeystrokeOutcome::Applied {
            display: self.display_text(),
            logical: self.value.clone(),
        }
    }

    /// Pushes the owner's current value. Returns `false` when the field is
    /// uncontrolled and the value was ignored.
    pub fn sync_external(&mut self, value: &str) -> bool {
        match self.mode {
            InputMode::Controlled => {
                self.value = self.accept_external(value);
                true
            }
            InputMode::Uncontrolled => false,
        }
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    pub fn set_feedback(&mut self, error: bool, helper_text: Option<String>) {
        self.props.error = error;
        self.props.helper_text = helper_text;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn logical_value(&self) -> &str {
        &self.value
    }

    pub fn display_text(&self) -> String {
        self.mask.render(&self.value)
    }

    pub fn hidden_field(&self) -> HiddenField {
        HiddenField {
            name: self.props.name.clone(),
            value: self.value.clone(),
        }
    }

    pub fn widget(&self) -> WidgetProps {
        WidgetProps::from_props(&self.props, self.display_text())
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            mode: self.mode,
            mask: self.mask.kind(),
            overflow: self.overflow,
            display: self.display_text(),
            logical: self.value.clone(),
            hidden: self.hidden_field(),
            disabled: self.props.disabled,
        }
    }

    fn accept_external(&self, value: &str) -> String {
        let normalized = self.mask.normalize_external(value);
        let capacity = self.mask.digit_capacity(&normalized);
        self.overflow.apply(normalized, capacity)
    }
}

impl fmt::Debug for PhoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneField")
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("mask", &self.mask)
            .field("overflow", &self.overflow)
            .field("props", &self.props)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
