use anyhow::Result;
use phonefield_config::AppConfig;
use phonefield_core::mask::{MaskKind, MaskOptions, OverflowPolicy};
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod format;
pub mod one_click;
pub mod typing;
pub mod validate;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub mask: MaskOptions,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum MaskArg {
    #[value(name = "free-text")]
    FreeText,
    Template,
}

impl From<MaskArg> for MaskKind {
    fn from(arg: MaskArg) -> Self {
        match arg {
            MaskArg::FreeText => MaskKind::FreeText,
            MaskArg::Template => MaskKind::Template,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OverflowArg {
    Truncate,
    Append,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Truncate => OverflowPolicy::Truncate,
            OverflowArg::Append => OverflowPolicy::Append,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
