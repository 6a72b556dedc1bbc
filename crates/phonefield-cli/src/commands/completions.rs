use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let bin_name = cmd.get_name().to_string();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("create completions file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    generate(args.shell, &mut cmd, bin_name, &mut out);
    out.flush()?;

    if let Some(path) = &args.output {
        debug!(shell = %args.shell, path = %path.display(), "completions written");
    }
    Ok(())
}
