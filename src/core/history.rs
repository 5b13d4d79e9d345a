use crate::core::task::TaskCatalog;
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the built-in history rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryRecord {
    pub timestamp: NaiveDateTime,
    pub task_id: u32,
    /// Measured usage, in percent
    pub actual_cpu: f64,
    pub actual_gpu: f64,
    pub actual_mem: f64,
    pub duration_minutes: u32,
}

impl HistoryRecord {
    /// Build a record from a `YYYY-MM-DD HH:MM` timestamp.
    pub fn parse(
        timestamp: &str,
        task_id: u32,
        actual_cpu: f64,
        actual_gpu: f64,
        actual_mem: f64,
        duration_minutes: u32,
    ) -> anyhow::Result<Self> {
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .with_context(|| format!("Invalid history timestamp '{timestamp}'"))?;
        Ok(Self {
            timestamp,
            task_id,
            actual_cpu,
            actual_gpu,
            actual_mem,
            duration_minutes,
        })
    }
}

/// Read-only table of past task executions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct UsageHistory {
    records: Vec<HistoryRecord>,
}

impl UsageHistory {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// The history the dashboard ships with.
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(vec![
            HistoryRecord::parse("2025-03-05 10:00", 1, 82.0, 90.0, 65.0, 45)?,
            HistoryRecord::parse("2025-03-05 11:00", 2, 38.0, 12.0, 28.0, 20)?,
        ]))
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose task id does not appear in `catalog`.
    ///
    /// Nothing downstream depends on the reference being valid; this is only
    /// used to warn about inconsistent tables.
    pub fn dangling_records<'a>(&'a self, catalog: &TaskCatalog) -> Vec<&'a HistoryRecord> {
        self.records
            .iter()
            .filter(|r| !catalog.contains(r.task_id))
            .collect()
    }
}
