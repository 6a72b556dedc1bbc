pub mod one_click;

pub use one_click::{
    ConfirmationDialog, FetchOutcome, FieldStatus, OneClickForm, OneClickSubmission,
    VerificationOptions, BIRTH_DATE_HINT,
};
