use super::monitor::render_evaluation;
use super::suggest::render_suggestion;
use crate::client::Client;
use anyhow::{Context, Result};

pub async fn handle_allocate(client: &Client, task_id: u32) -> Result<()> {
    eprintln!("Sampling host usage for task {task_id}...");
    let allocation = client
        .allocate(task_id)
        .await
        .with_context(|| format!("Failed to allocate task {task_id}"))?;
    print!("{}", render_evaluation(&allocation.evaluation));
    println!(
        "  Workload: {}",
        crate::utils::colored_verdict(allocation.cpu_workload)
    );
    println!("{}", render_suggestion(&allocation.suggestion));
    Ok(())
}
