mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

pub async fn run(argv: Vec<OsString>) -> Result<()> {
    let args = cli::AlvyaCli::parse_from(argv);

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity)
        .with_writer(std::io::stderr)
        .init();

    if let cli::Commands::Completion { shell } = args.command {
        let mut cmd = cli::AlvyaCli::command();
        crate::multicall::completion::generate_to_stdout(shell, &mut cmd, "alvya")?;
        return Ok(());
    }

    commands::handle_commands(&args.config, args.command).await
}
