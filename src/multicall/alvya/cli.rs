use clap::Parser;
use clap_complete::Shell;
use clap_verbosity_flag::Verbosity;

#[derive(Debug, Parser)]
#[command(
    name = "alvya",
    author,
    version = crate::core::version(),
    about = "Monitor task workload and get next-task suggestions from alvyad."
)]
#[command(styles=crate::utils::STYLES)]
pub struct AlvyaCli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Path to the config file", hide = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Parser)]
pub enum Commands {
    /// List the task catalog
    Tasks,
    /// Show past task executions
    History {
        /// Show the 5-minute rolling average instead of raw records
        #[arg(long)]
        rolling: bool,
    },
    /// Sample the host and compare it with a task's expected profile
    Monitor {
        /// Task ID
        task_id: u32,
    },
    /// Monitor a task and suggest what to run next
    Allocate {
        /// Task ID
        task_id: u32,
    },
    /// Suggest the next task from the usage history
    Suggest,
    /// Generate shell completion scripts
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
