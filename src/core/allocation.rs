use crate::core::evaluator::{evaluate, EvaluationResult, Verdict};
use crate::core::history::UsageHistory;
use crate::core::rolling::{rolling_average, RollingPoint};
use crate::core::sampler::Sampler;
use crate::core::suggest::{suggest, Suggestion};
use crate::core::task::TaskCatalog;
use crate::core::EngineError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Outcome of allocating a task: the live evaluation plus a follow-up suggestion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Allocation {
    pub evaluation: EvaluationResult,
    /// CPU-only load classification of the evaluation
    pub cpu_workload: Verdict,
    pub suggestion: Suggestion,
}

/// Suggestion derived from the usage history alone.
pub fn suggest_from_history(
    history: &UsageHistory,
    catalog: &TaskCatalog,
    window: TimeDelta,
) -> (Vec<RollingPoint>, Suggestion) {
    let points = rolling_average(history.records(), window);
    let suggestion = suggest(&points, catalog);
    (points, suggestion)
}

/// Evaluate `task_id` against live samples, then propose the next task.
pub fn allocate<S: Sampler + ?Sized>(
    task_id: u32,
    catalog: &TaskCatalog,
    history: &UsageHistory,
    sampler: &mut S,
    ticks: u32,
    window: TimeDelta,
) -> Result<Allocation, EngineError> {
    let evaluation = evaluate(task_id, catalog, sampler, ticks)?;
    let (_, suggestion) = suggest_from_history(history, catalog, window);
    Ok(Allocation {
        cpu_workload: evaluation.cpu_workload(),
        evaluation,
        suggestion,
    })
}
