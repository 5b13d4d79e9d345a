use thiserror::Error;

/// Failures of the evaluation engine.
///
/// A missing suggestion is not an error; it is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No task in the catalog carries this id
    #[error("Invalid Task: no task with id {0}")]
    InvalidTask(u32),

    /// An evaluation needs at least one sample
    #[error("Invalid sampling length: at least one tick is required")]
    InvalidTicks,

    /// The host refused to report CPU or memory usage
    #[error("System metrics unavailable: {0}")]
    MetricsUnavailable(String),
}
