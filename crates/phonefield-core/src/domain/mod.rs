pub mod phone;

pub use phone::{
    extract_digits, filter_phone_input, is_complete_nanp, national_digits, COUNTRY_CODE,
    NATIONAL_DIGITS,
};
