pub mod validation;

pub use validation::{format_us_date, parse_us_date, validate_phone};
