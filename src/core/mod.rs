pub mod allocation;
pub mod error;
pub mod evaluator;
pub mod history;
pub mod info;
pub mod rolling;
pub mod sampler;
pub mod suggest;
pub mod task;

use std::path::PathBuf;

pub use error::EngineError;

const VERSION_MESSAGE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_BUILD_TIMESTAMP"),
    ")\n",
    "Branch: ",
    env!("VERGEN_GIT_BRANCH"),
    "\nCommit: ",
    env!("VERGEN_GIT_SHA"),
);

pub fn version() -> &'static str {
    let author = clap::crate_authors!();

    Box::leak(Box::new(format!(
        "\
{VERSION_MESSAGE}
Authors: {author}"
    )))
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get config directory"))
        .map(|p| p.join("alvya"))
}

pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get data directory"))
        .map(|p| p.join("alvya"))
}

/// Round to two decimal places, the precision every reported average uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        assert_eq!(round2(10.125), 10.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(10.375), 10.38);
    }
}
