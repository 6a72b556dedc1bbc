pub mod domain;
pub mod dto;
pub mod error;
pub mod field;
pub mod form;
pub mod mask;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use field::{FieldProps, HiddenField, InputMode, KeystrokeOutcome, PhoneField, WidgetProps};
pub use form::{
    ConfirmationDialog, FetchOutcome, OneClickForm, OneClickSubmission, VerificationOptions,
};
pub use mask::{MaskKind, MaskOptions, OverflowPolicy, PhoneMask};
pub use rules::*;
