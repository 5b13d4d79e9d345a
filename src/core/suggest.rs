use crate::core::rolling::RollingPoint;
use crate::core::task::{Task, TaskCatalog};
use serde::{Deserialize, Serialize};
use strum::Display;

/// All three rolling averages above this mean the host has been busy.
pub const SUSTAINED_HIGH_LOAD: f64 = 70.0;
/// All three rolling averages below this mean the host has been idle.
pub const SUSTAINED_LOW_LOAD: f64 = 30.0;

/// Kind of task being recommended.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    #[strum(to_string = "high")]
    High,
    #[strum(to_string = "low")]
    Low,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Suggestion {
    pub task: Option<Task>,
    pub intensity: Option<Intensity>,
}

impl Suggestion {
    fn none() -> Self {
        Self::default()
    }

    fn pick(task: Option<&Task>, intensity: Intensity) -> Self {
        Self {
            task: task.cloned(),
            intensity: Some(intensity),
        }
    }
}

/// Recommend a task that complements the most recent rolling load.
///
/// After sustained high load the first low-work task in catalog order is
/// proposed; after sustained low load the first task that is not low-work.
/// Mixed load yields no suggestion.
pub fn suggest(points: &[RollingPoint], catalog: &TaskCatalog) -> Suggestion {
    let Some(last) = points.last() else {
        return Suggestion::none();
    };

    let sustained_high = last.avg_cpu > SUSTAINED_HIGH_LOAD
        && last.avg_gpu > SUSTAINED_HIGH_LOAD
        && last.avg_mem > SUSTAINED_HIGH_LOAD;
    let sustained_low = last.avg_cpu < SUSTAINED_LOW_LOAD
        && last.avg_gpu < SUSTAINED_LOW_LOAD
        && last.avg_mem < SUSTAINED_LOW_LOAD;

    let suggestion = if sustained_high {
        Suggestion::pick(catalog.iter().find(|t| t.is_low_work()), Intensity::Low)
    } else if sustained_low {
        Suggestion::pick(catalog.iter().find(|t| !t.is_low_work()), Intensity::High)
    } else {
        Suggestion::none()
    };

    tracing::debug!(
        avg_cpu = last.avg_cpu,
        avg_gpu = last.avg_gpu,
        avg_mem = last.avg_mem,
        task = suggestion.task.as_ref().map(|t| t.id),
        "Suggestion computed"
    );
    suggestion
}
