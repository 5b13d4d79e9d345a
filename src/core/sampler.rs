//! Host usage sampling.
//!
//! A sample is CPU and memory utilisation in percent. GPU utilisation is not
//! measured and always reads as zero.

use crate::core::EngineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use sysinfo::System;

/// How long a single CPU reading blocks the caller.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    pub cpu: f64,
    pub gpu: f64,
    pub mem: f64,
}

impl UsageSample {
    pub fn new(cpu: f64, gpu: f64, mem: f64) -> Self {
        Self { cpu, gpu, mem }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Sampler {
    /// Take one reading. May block for the sampling interval.
    fn sample(&mut self) -> Result<UsageSample, EngineError>;
}

/// Reads utilisation from the running host through `sysinfo`.
pub struct SystemSampler {
    system: System,
    interval: Duration,
}

impl SystemSampler {
    pub fn new() -> Result<Self, EngineError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(EngineError::MetricsUnavailable(format!(
                "{} is not supported by the metrics backend",
                std::env::consts::OS
            )));
        }
        let mut system = System::new();
        // First CPU refresh only establishes the baseline for the next delta.
        system.refresh_cpu_usage();
        Ok(Self {
            system,
            interval: SAMPLE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        })
    }

    fn cpu_percent(&mut self) -> f64 {
        self.system.refresh_cpu_usage();
        std::thread::sleep(self.interval);
        self.system.refresh_cpu_usage();
        f64::from(self.system.global_cpu_usage())
    }

    fn memory_percent(&mut self) -> Result<f64, EngineError> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(EngineError::MetricsUnavailable(
                "total memory reported as zero".to_string(),
            ));
        }
        let used = total.saturating_sub(self.system.available_memory());
        Ok(used as f64 / total as f64 * 100.0)
    }
}

impl Sampler for SystemSampler {
    fn sample(&mut self) -> Result<UsageSample, EngineError> {
        let cpu = self.cpu_percent();
        let mem = self.memory_percent()?;
        tracing::trace!(cpu, mem, "Sampled host usage");
        Ok(UsageSample::new(cpu, 0.0, mem))
    }
}
