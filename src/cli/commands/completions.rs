use crate::cli::Cli;
use crate::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Binary name completions are generated for
pub const BIN_NAME: &str = "keki";

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print the completion script for `shell` to stdout
pub fn generate_completions(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout());
    Ok(())
}
