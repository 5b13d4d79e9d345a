use crate::core::sampler::{Sampler, UsageSample};
use crate::core::task::{Task, TaskCatalog};
use crate::core::{round2, EngineError};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Samples taken per evaluation.
pub const DEFAULT_TICKS: u32 = 2;

/// Percentage points an average may exceed its expected value by.
pub const USAGE_TOLERANCE: f64 = 10.0;

/// CPU average above which the allocation view calls the load high.
pub const CPU_WORKLOAD_THRESHOLD: f64 = 70.0;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Display)]
pub enum Verdict {
    #[strum(to_string = "High Workload")]
    High,
    #[strum(to_string = "Low Workload")]
    Low,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EvaluationResult {
    pub task_id: u32,
    pub task_name: String,
    pub avg_cpu: f64,
    pub avg_gpu: f64,
    pub avg_mem: f64,
    pub expected_cpu: f64,
    pub expected_gpu: f64,
    pub expected_mem: f64,
    pub verdict: Verdict,
}

impl EvaluationResult {
    fn from_average(task: &Task, average: UsageSample) -> Self {
        Self {
            task_id: task.id,
            task_name: task.name.clone(),
            avg_cpu: average.cpu,
            avg_gpu: average.gpu,
            avg_mem: average.mem,
            expected_cpu: task.expected_cpu,
            expected_gpu: task.expected_gpu,
            expected_mem: task.expected_mem,
            verdict: verdict(task, &average),
        }
    }

    /// Coarse CPU-only classification shown next to an allocation.
    pub fn cpu_workload(&self) -> Verdict {
        if self.avg_cpu > CPU_WORKLOAD_THRESHOLD {
            Verdict::High
        } else {
            Verdict::Low
        }
    }
}

/// `High` if any average runs more than [`USAGE_TOLERANCE`] over the task's profile.
pub fn verdict(task: &Task, average: &UsageSample) -> Verdict {
    let exceeds = average.cpu > task.expected_cpu + USAGE_TOLERANCE
        || average.gpu > task.expected_gpu + USAGE_TOLERANCE
        || average.mem > task.expected_mem + USAGE_TOLERANCE;
    if exceeds {
        Verdict::High
    } else {
        Verdict::Low
    }
}

/// Sample the host `ticks` times and judge the load against task `task_id`.
///
/// Blocks for `ticks` sampling intervals. Unknown ids fail before any sampling.
pub fn evaluate<S: Sampler + ?Sized>(
    task_id: u32,
    catalog: &TaskCatalog,
    sampler: &mut S,
    ticks: u32,
) -> Result<EvaluationResult, EngineError> {
    let task = catalog
        .get(task_id)
        .ok_or(EngineError::InvalidTask(task_id))?;
    if ticks == 0 {
        return Err(EngineError::InvalidTicks);
    }

    let mut total = UsageSample::default();
    for tick in 0..ticks {
        let sample = sampler.sample().inspect_err(|e| {
            tracing::warn!(task_id, tick, "Sampling failed: {e}");
        })?;
        total.cpu += sample.cpu;
        total.gpu += sample.gpu;
        total.mem += sample.mem;
    }

    let n = f64::from(ticks);
    let average = UsageSample::new(
        round2(total.cpu / n),
        round2(total.gpu / n),
        round2(total.mem / n),
    );
    let result = EvaluationResult::from_average(task, average);
    tracing::info!(
        task_id,
        ticks,
        avg_cpu = result.avg_cpu,
        avg_mem = result.avg_mem,
        "Evaluated task '{}': {}",
        result.task_name,
        result.verdict
    );
    Ok(result)
}
