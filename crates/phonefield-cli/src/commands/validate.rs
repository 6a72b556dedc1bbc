use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use phonefield_core::rules::{format_us_date, parse_us_date, validate_phone};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub phone: Option<String>,
    /// Birth date as M/D/YYYY
    #[arg(long)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckDto {
    field: &'static str,
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckDto {
    fn new(field: &'static str, input: String, result: Result<String, String>) -> Self {
        match result {
            Ok(value) => Self {
                field,
                input,
                valid: true,
                value: Some(value),
                error: None,
            },
            Err(error) => Self {
                field,
                input,
                valid: false,
                value: None,
                error: Some(error),
            },
        }
    }
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    if args.phone.is_none() && args.birth_date.is_none() {
        return Err(invalid_input("nothing to validate: pass --phone or --birth-date"));
    }

    let mut checks = Vec::new();
    if let Some(phone) = args.phone {
        let result = validate_phone(&phone).map_err(|err| err.to_string());
        checks.push(CheckDto::new("phone", phone, result));
    }
    if let Some(birth_date) = args.birth_date {
        let result = parse_us_date(&birth_date)
            .map(format_us_date)
            .map_err(|err| err.to_string());
        checks.push(CheckDto::new("birth_date", birth_date, result));
    }

    if ctx.json {
        print_json(&checks)?;
    } else {
        for check in &checks {
            match (&check.value, &check.error) {
                (Some(value), _) => println!("{}: ok ({})", check.field, value),
                (_, Some(error)) => println!("{}: {}", check.field, error),
                _ => {}
            }
        }
    }

    let failed: Vec<&str> = checks
        .iter()
        .filter(|check| !check.valid)
        .map(|check| check.field)
        .collect();
    if !failed.is_empty() {
        return Err(invalid_input(format!("invalid {}", failed.join(", "))));
    }
    Ok(())
}
