use crate::client::Client;
use crate::core::history::HistoryRecord;
use crate::core::rolling::RollingPoint;
use crate::utils::{format_percent, format_timestamp};
use anyhow::{Context, Result};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "TASK")]
    task_id: u32,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "MEM")]
    mem: String,
    #[tabled(rename = "DURATION")]
    duration: String,
}

#[derive(Tabled)]
struct RollingRow {
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "AVG CPU")]
    cpu: String,
    #[tabled(rename = "AVG GPU")]
    gpu: String,
    #[tabled(rename = "AVG MEM")]
    mem: String,
}

pub async fn handle_history(client: &Client, rolling: bool) -> Result<()> {
    let table = if rolling {
        let points = client
            .rolling_history()
            .await
            .context("Failed to get rolling history")?;
        render_rolling(&points)
    } else {
        let records = client
            .list_history()
            .await
            .context("Failed to get history")?;
        render_records(&records)
    };
    println!("{table}");
    Ok(())
}

fn render_records(records: &[HistoryRecord]) -> String {
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            time: format_timestamp(&r.timestamp),
            task_id: r.task_id,
            cpu: format_percent(r.actual_cpu),
            gpu: format_percent(r.actual_gpu),
            mem: format_percent(r.actual_mem),
            duration: format!("{}m", r.duration_minutes),
        })
        .collect();
    Table::new(&rows).with(Style::empty()).to_string()
}

fn render_rolling(points: &[RollingPoint]) -> String {
    let rows: Vec<RollingRow> = points
        .iter()
        .map(|p| RollingRow {
            time: format_timestamp(&p.timestamp),
            cpu: format_percent(p.avg_cpu),
            gpu: format_percent(p.avg_gpu),
            mem: format_percent(p.avg_mem),
        })
        .collect();
    Table::new(&rows).with(Style::empty()).to_string()
}
