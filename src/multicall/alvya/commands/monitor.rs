use crate::client::Client;
use crate::core::evaluator::EvaluationResult;
use crate::utils::{colored_verdict, format_percent};
use anyhow::{Context, Result};
use std::fmt::Write;

pub async fn handle_monitor(client: &Client, task_id: u32) -> Result<()> {
    eprintln!("Sampling host usage for task {task_id}...");
    let result = client
        .monitor(task_id)
        .await
        .with_context(|| format!("Failed to monitor task {task_id}"))?;
    print!("{}", render_evaluation(&result));
    println!("Overall Status: {}", colored_verdict(result.verdict));
    Ok(())
}

pub(crate) fn render_evaluation(result: &EvaluationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (task {})", result.task_name, result.task_id);
    let rows = [
        ("CPU", result.avg_cpu, result.expected_cpu),
        ("GPU", result.avg_gpu, result.expected_gpu),
        ("Memory", result.avg_mem, result.expected_mem),
    ];
    for (label, actual, expected) in rows {
        let _ = writeln!(
            out,
            "  {label} Usage: {} (Expected: {})",
            format_percent(actual),
            format_percent(expected)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::Verdict;

    #[test]
    fn test_render_evaluation() {
        let result = EvaluationResult {
            task_id: 1,
            task_name: "Render".to_string(),
            avg_cpu: 96.0,
            avg_gpu: 0.0,
            avg_mem: 72.5,
            expected_cpu: 85.0,
            expected_gpu: 95.0,
            expected_mem: 70.0,
            verdict: Verdict::High,
        };
        let out = render_evaluation(&result);
        assert!(out.starts_with("Render (task 1)"));
        assert!(out.contains("CPU Usage: 96% (Expected: 85%)"));
        assert!(out.contains("Memory Usage: 72.50% (Expected: 70%)"));
    }
}
