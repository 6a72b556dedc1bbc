use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use phonefield_core::{InputMode, PhoneField};

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Text as a user would type or paste it
    pub value: String,
}

pub fn format_value(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let mut field = PhoneField::from_options("", InputMode::Uncontrolled, &ctx.mask)
        .with_context(|| "build phone mask")?;
    field.handle_input(&args.value);

    if ctx.json {
        return print_json(&field.snapshot());
    }

    println!("{}", field.display_text());
    Ok(())
}
