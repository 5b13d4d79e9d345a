use crate::client::Client;
use crate::core::task::Task;
use crate::utils::format_percent;
use anyhow::{Context, Result};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "MEM")]
    mem: String,
    #[tabled(rename = "KIND")]
    kind: &'static str,
}

pub async fn handle_tasks(client: &Client) -> Result<()> {
    let tasks = client
        .list_tasks()
        .await
        .context("Failed to list tasks")?;
    println!("{}", render_tasks(&tasks));
    Ok(())
}

pub(crate) fn render_tasks(tasks: &[Task]) -> String {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|t| TaskRow {
            id: t.id,
            name: t.name.clone(),
            cpu: format_percent(t.expected_cpu),
            gpu: format_percent(t.expected_gpu),
            mem: format_percent(t.expected_mem),
            kind: if t.is_low_work() { "low" } else { "high" },
        })
        .collect();
    Table::new(&rows).with(Style::empty()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskCatalog;

    #[test]
    fn test_render_tasks() {
        let out = render_tasks(TaskCatalog::builtin().tasks());
        assert!(out.contains("NAME"));
        assert!(out.contains("Train Model"));
        assert!(out.contains("95%"));
        let browse = out.lines().find(|l| l.contains("Browse")).unwrap();
        assert!(browse.contains("low"));
    }
}
