use crate::commands::{print_json, Context};
use crate::util::{append_keystroke, describe_key};
use anyhow::{Context as _, Result};
use clap::Args;
use phonefield_core::{FieldProps, FieldSnapshot, InputMode, KeystrokeOutcome, PhoneField};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Args)]
pub struct TypeArgs {
    /// Characters typed one at a time at the end of the input
    pub text: String,
    /// Value the field starts with
    #[arg(long, default_value = "")]
    pub initial: String,
    /// Type into a disabled field
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Debug, Serialize)]
struct StepDto {
    key: String,
    applied: bool,
    display: String,
    logical: String,
}

#[derive(Debug, Serialize)]
struct TypingReportDto {
    steps: Vec<StepDto>,
    changes: usize,
    field: FieldSnapshot,
}

pub fn type_text(ctx: &Context<'_>, args: TypeArgs) -> Result<()> {
    let changes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&changes);
    let mut field = PhoneField::from_options(&args.initial, InputMode::Uncontrolled, &ctx.mask)
        .with_context(|| "build phone mask")?
        .with_props(FieldProps {
            disabled: args.disabled,
            ..FieldProps::default()
        })
        .on_change(move |value| {
            counter.set(counter.get() + 1);
            debug!(value, "phone value changed");
        });

    let mut steps = Vec::with_capacity(args.text.chars().count());
    for ch in args.text.chars() {
        let raw = append_keystroke(&field.display_text(), ch);
        let step = match field.handle_input(&raw) {
            KeystrokeOutcome::Applied { display, logical } => StepDto {
                key: describe_key(ch),
                applied: true,
                display,
                logical,
            },
            KeystrokeOutcome::Suppressed => {
                debug!(key = %ch, "keystroke suppressed, field disabled");
                StepDto {
                    key: describe_key(ch),
                    applied: false,
                    display: field.display_text(),
                    logical: field.logical_value().to_string(),
                }
            }
        };
        steps.push(step);
    }

    let report = TypingReportDto {
        steps,
        changes: changes.get(),
        field: field.snapshot(),
    };

    if ctx.json {
        return print_json(&report);
    }

    for step in &report.steps {
        let marker = if step.applied { ' ' } else { '!' };
        println!(
            "{marker} {:<4} {:<20} {}",
            step.key, step.display, step.logical
        );
    }
    println!("{}", report.field.display);
    Ok(())
}
