use super::cli::Commands;
use crate::client::Client;
use std::path::PathBuf;

pub mod allocate;
pub mod history;
pub mod monitor;
pub mod suggest;
pub mod tasks;

pub async fn handle_commands(config_path: &Option<PathBuf>, command: Commands) -> anyhow::Result<()> {
    let config = crate::config::load_config(config_path.as_ref()).unwrap_or_default();
    let client = Client::build(&config)?;
    tracing::debug!("Using daemon at {}", client.base_url());

    match command {
        Commands::Tasks => tasks::handle_tasks(&client).await?,
        Commands::History { rolling } => history::handle_history(&client, rolling).await?,
        Commands::Monitor { task_id } => monitor::handle_monitor(&client, task_id).await?,
        Commands::Allocate { task_id } => allocate::handle_allocate(&client, task_id).await?,
        Commands::Suggest => suggest::handle_suggest(&client).await?,
        Commands::Completion { .. } => {}
    }

    Ok(())
}
