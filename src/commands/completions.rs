//! Completions command - shell completion scripts

use crate::cli::Cli;
use crate::RoamrError;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Write the completion script for `shell`
///
/// # Errors
/// Returns an error if output fails
pub fn execute(shell: Shell, out: &mut impl Write) -> Result<(), RoamrError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
