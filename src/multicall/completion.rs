use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Write the completion script for `bin_name` to stdout.
pub fn generate_to_stdout(shell: Shell, cmd: &mut Command, bin_name: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    generate(shell, cmd, bin_name, &mut stdout);
    stdout.flush()
}
