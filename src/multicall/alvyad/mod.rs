use clap::{CommandFactory, Parser};
use std::ffi::OsString;

mod cli;
pub mod server;

pub async fn run(argv: Vec<OsString>) -> anyhow::Result<()> {
    let alvyad = cli::Alvyad::parse_from(argv);

    if let Some(command) = alvyad.command {
        match command {
            cli::Commands::Completion { shell } => {
                let mut cmd = cli::Alvyad::command();
                crate::multicall::completion::generate_to_stdout(shell, &mut cmd, "alvyad")?;
                return Ok(());
            }
        }
    }

    // Initialize tracing: console (stderr) + daily rolling file appender
    let log_dir = crate::core::get_data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix("daemon")
        .filename_suffix("log")
        .max_log_files(7)
        .build(&log_dir)?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from(
            alvyad.verbosity,
        ))
        .with(console_layer)
        .with(file_layer)
        .init();

    let mut config = crate::config::load_config(alvyad.config.as_ref())?;

    // CLI flags override config file
    if let Some(host) = alvyad.host {
        config.daemon.host = host;
    }
    if let Some(port) = alvyad.port {
        config.daemon.port = port;
    }

    server::run(config).await
}
