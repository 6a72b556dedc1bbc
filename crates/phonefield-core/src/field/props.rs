use serde::Serialize;

use crate::mask::MAX_DISPLAY_LEN;

pub const DEFAULT_FIELD_NAME: &str = "phone";
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Phone";

/// Owner-supplied presentation settings. Only `disabled` changes behavior,
/// the rest is handed to the widget untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps {
    pub name: String,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub disabled: bool,
    pub auto_focus: bool,
    pub placeholder: Option<String>,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            name: DEFAULT_FIELD_NAME.to_string(),
            label: None,
            helper_text: None,
            error: false,
            disabled: false,
            auto_focus: false,
            placeholder: Some(DEFAULT_PLACEHOLDER_TEXT.to_string()),
        }
    }
}

/// Companion field holding the logical value under the owner's field name,
/// so form submission reads the unmasked number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// Everything the visible text input needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetProps {
    pub name: String,
    pub value: String,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub disabled: bool,
    pub auto_focus: bool,
    pub placeholder: Option<String>,
    pub max_length: usize,
    pub input_type: &'static str,
    pub input_mode: &'static str,
    pub auto_complete: &'static str,
}

impl WidgetProps {
    pub(crate) fn from_props(props: &FieldProps, display: String) -> Self {
        Self {
            // The submitted name belongs to the hidden field.
            name: format!("_{}", props.name),
            value: display,
            label: props.label.clone(),
            helper_text: props.helper_text.clone(),
            error: props.error,
            disabled: props.disabled,
            auto_focus: props.auto_focus,
            placeholder: props.placeholder.clone(),
            max_length: MAX_DISPLAY_LEN,
            input_type: "tel",
            input_mode: "numeric",
            auto_complete: "tel",
        }
    }
}
