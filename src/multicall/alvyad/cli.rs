use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Debug, Parser)]
#[command(name = "alvyad", author, version = crate::core::version(), about = "Alvya dashboard daemon")]
#[command(styles=crate::utils::STYLES)]
pub struct Alvyad {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The configuration file to use
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Parser)]
pub enum Commands {
    /// Generate shell completion scripts
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
