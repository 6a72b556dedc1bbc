use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::append_keystroke;
use anyhow::{Context as _, Result};
use clap::Args;
use phonefield_core::rules::{parse_us_date, validate_phone};
use phonefield_core::{
    ConfirmationDialog, FetchOutcome, OneClickForm, OneClickSubmission, VerificationOptions,
};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct OneClickArgs {
    /// Phone number, typed one character at a time
    #[arg(long)]
    pub phone: String,
    /// Birth date as M/D/YYYY
    #[arg(long)]
    pub birth_date: String,
    /// only_code or only_link; unknown values fall back to only_code
    #[arg(long)]
    pub verification_options: Option<String>,
}

#[derive(Debug, Serialize)]
struct OneClickReportDto {
    submission: OneClickSubmission,
    dialog: Option<ConfirmationDialog>,
    form_key: u64,
}

pub fn one_click(ctx: &Context<'_>, args: OneClickArgs) -> Result<()> {
    let verification_options = match args.verification_options.as_deref() {
        Some(raw) => VerificationOptions::from_query(Some(raw)),
        None => ctx.config.form.verification_options,
    };
    let mut form =
        OneClickForm::new(&ctx.mask, verification_options).with_context(|| "build one-click form")?;

    let mut submission = None;
    for ch in args.phone.chars() {
        let raw = append_keystroke(&form.phone().display_text(), ch);
        if let Some(ready) = form.change_phone(&raw) {
            submission = Some(ready);
        }
    }
    debug!(phone = form.phone().logical_value(), "phone entered");

    if submission.is_none() {
        submission = form.change_birth_date(&args.birth_date);
    }

    let Some(submission) = submission else {
        let mut problems = Vec::new();
        if let Err(error) = validate_phone(form.phone().logical_value()) {
            problems.push(format!("phone: {error}"));
        }
        if let Err(error) = parse_us_date(form.birth_date()) {
            problems.push(format!("birth date: {error}"));
        }
        return Err(invalid_input(format!(
            "one-click form incomplete ({})",
            problems.join("; ")
        )));
    };
    info!(
        verification_options = %submission.verification_options,
        "one-click form submitted"
    );

    // Completes the fetch as a success carrying the normalized number.
    let phone = validate_phone(&submission.phone)?;
    form.finish_fetch(FetchOutcome::Success { phone });

    let report = OneClickReportDto {
        submission,
        dialog: form.dialog(),
        form_key: form.form_key(),
    };

    if ctx.json {
        return print_json(&report);
    }

    println!("action: {}", report.submission.action);
    println!("phone: {}", report.submission.phone);
    println!("birth_date: {}", report.submission.birth_date);
    println!(
        "verification_options: {}",
        report.submission.verification_options
    );
    match &report.dialog {
        Some(ConfirmationDialog::Sms { phone }) => println!("dialog: sms sent to {phone}"),
        Some(ConfirmationDialog::Prompt { phone }) => println!("dialog: confirm share for {phone}"),
        None => {}
    }
    Ok(())
}
