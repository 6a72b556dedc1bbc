//! Client side of the one-click form: a phone field and a birth date field
//! that submit on their own as soon as both are valid.
//!
//! The form owns the phone value and drives its [`PhoneField`] in controlled
//! mode. While a submission is in flight both inputs are disabled; when it
//! finishes the owner clears both fields, which is the only time the phone
//! field is reset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::{FieldProps, InputMode, KeystrokeOutcome, PhoneField};
use crate::mask::MaskOptions;
use crate::rules::{format_us_date, parse_us_date, validate_phone};

pub const BIRTH_DATE_HINT: &str = "MM/DD/YYYY";
const FORM_ACTION: &str = "one-click";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOptions {
    #[default]
    OnlyCode,
    OnlyLink,
    BothLinkAndCode,
}

impl VerificationOptions {
    /// Lenient parse for query parameters: anything unknown means the code flow.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerificationOptions::OnlyCode => "only_code",
            VerificationOptions::OnlyLink => "only_link",
            VerificationOptions::BothLinkAndCode => "both_link_and_code",
        }
    }
}

impl FromStr for VerificationOptions {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "only_code" => Ok(VerificationOptions::OnlyCode),
            "only_link" => Ok(VerificationOptions::OnlyLink),
            "both_link_and_code" => Ok(VerificationOptions::BothLinkAndCode),
            other => Err(CoreError::InvalidVerificationOptions(other.to_string())),
        }
    }
}

impl fmt::Display for VerificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStatus {
    pub touched: bool,
    pub error: Option<CoreError>,
}

impl FieldStatus {
    /// Errors are only surfaced once the user has edited the field.
    pub fn visible_error(&self) -> Option<String> {
        if !self.touched {
            return None;
        }
        self.error.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneClickSubmission {
    pub action: &'static str,
    pub phone: String,
    pub birth_date: String,
    pub verification_options: VerificationOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { phone: String },
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfirmationDialog {
    /// A text message with a link was sent.
    Sms { phone: String },
    /// The user confirms the share on this page.
    Prompt { phone: String },
}

#[derive(Debug)]
pub struct OneClickForm {
    phone: PhoneField,
    phone_value: String,
    phone_status: FieldStatus,
    birth_date: String,
    birth_date_status: FieldStatus,
    verification_options: VerificationOptions,
    fetching: bool,
    form_key: u64,
    confirmed_phone: Option<String>,
    error: Option<String>,
}

impl OneClickForm {
    pub fn new(
        options: &MaskOptions,
        verification_options: VerificationOptions,
    ) -> Result<Self, CoreError> {
        let phone = PhoneField::from_options("", InputMode::Controlled, options)?.with_props(
            FieldProps {
                label: Some("Phone".to_string()),
                auto_focus: true,
                placeholder: None,
                ..FieldProps::default()
            },
        );
        Ok(Self {
            phone,
            phone_value: String::new(),
            phone_status: FieldStatus::default(),
            birth_date: String::new(),
            birth_date_status: FieldStatus::default(),
            verification_options,
            fetching: false,
            form_key: 0,
            confirmed_phone: None,
            error: None,
        })
    }

    /// Feeds raw widget text into the phone field. Returns a submission when
    /// the change completes a valid form.
    pub fn change_phone(&mut self, raw_text: &str) -> Option<OneClickSubmission> {
        let KeystrokeOutcome::Applied { logical, .. } =
            self.phone.handle_input(raw_text)
        else {
            return None;
        };
        self.phone_value = logical;
        let synced = self.phone.sync_external(&self.phone_value);
        debug_assert!(synced, "one-click phone field is controlled");
        self.phone_status = FieldStatus {
            touched: true,
            error: validate_phone(&self.phone_value).err(),
        };
        self.refresh_phone_feedback();
        self.try_submit()
    }

    pub fn change_birth_date(&mut self, value: &str) -> Option<OneClickSubmission> {
        if self.fetching {
            return None;
        }
        self.birth_date = value.trim().to_string();
        self.birth_date_status = FieldStatus {
            touched: true,
            error: parse_us_date(&self.birth_date).err(),
        };
        self.try_submit()
    }

    pub fn finish_fetch(&mut self, outcome: FetchOutcome) {
        self.fetching = false;
        self.phone.set_disabled(false);

        self.phone_value.clear();
        self.phone.reset();
        self.phone_status = FieldStatus::default();
        self.birth_date.clear();
        self.birth_date_status = FieldStatus::default();
        self.refresh_phone_feedback();
        self.form_key += 1;

        match outcome {
            FetchOutcome::Success { phone } => {
                self.confirmed_phone = Some(phone);
                self.error = None;
            }
            FetchOutcome::Failure { message } => {
                self.confirmed_phone = None;
                self.error = Some(message);
            }
        }
    }

    /// Dismisses the confirmation so the user can start over.
    pub fn retry(&mut self) {
        self.confirmed_phone = None;
        self.error = None;
    }

    pub fn dialog(&self) -> Option<ConfirmationDialog> {
        let phone = self.confirmed_phone.clone()?;
        Some(match self.verification_options {
            VerificationOptions::OnlyLink => ConfirmationDialog::Sms { phone },
            VerificationOptions::OnlyCode | VerificationOptions::BothLinkAndCode => {
                ConfirmationDialog::Prompt { phone }
            }
        })
    }

    pub fn phone(&self) -> &PhoneField {
        &self.phone
    }

    pub fn phone_status(&self) -> &FieldStatus {
        &self.phone_status
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn birth_date_status(&self) -> &FieldStatus {
        &self.birth_date_status
    }

    pub fn birth_date_helper_text(&self) -> String {
        self.birth_date_status
            .visible_error()
            .unwrap_or_else(|| BIRTH_DATE_HINT.to_string())
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Bumped on every completed submission so the surrounding form remounts.
    pub fn form_key(&self) -> u64 {
        self.form_key
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn verification_options(&self) -> VerificationOptions {
        self.verification_options
    }

    fn refresh_phone_feedback(&mut self) {
        let message = self.phone_status.visible_error();
        self.phone.set_feedback(message.is_some(), message);
    }

    fn try_submit(&mut self) -> Option<OneClickSubmission> {
        if self.fetching {
            return None;
        }
        validate_phone(&self.phone_value).ok()?;
        let birth_date = parse_us_date(&self.birth_date).ok()?;

        self.fetching = true;
        self.phone.set_disabled(true);
        Some(OneClickSubmission {
            action: FORM_ACTION,
            phone: self.phone.hidden_field().value,
            birth_date: format_us_date(birth_date),
            verification_options: self.verification_options,
        })
    }
}
