use crate::client::Client;
use crate::core::suggest::Suggestion;
use crate::utils::format_percent;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub async fn handle_suggest(client: &Client) -> Result<()> {
    let suggestion = client
        .suggestion()
        .await
        .context("Failed to get suggestion")?;
    println!("{}", render_suggestion(&suggestion));
    Ok(())
}

pub(crate) fn render_suggestion(suggestion: &Suggestion) -> String {
    match (&suggestion.task, suggestion.intensity) {
        (Some(task), Some(intensity)) => format!(
            "Suggested Next Task ({intensity}): {} (CPU: {}, GPU: {}, Memory: {})",
            task.name.cyan().bold(),
            format_percent(task.expected_cpu),
            format_percent(task.expected_gpu),
            format_percent(task.expected_mem),
        ),
        (None, Some(intensity)) => {
            format!("No {intensity}-intensity task available in the catalog")
        }
        _ => "No suggestion: recent load is neither sustained high nor low".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::suggest::Intensity;
    use crate::core::task::Task;

    #[test]
    fn test_render_suggestion_with_task() {
        let suggestion = Suggestion {
            task: Some(Task::new(4, "Browse", 15.0, 5.0, 15.0)),
            intensity: Some(Intensity::Low),
        };
        let out = render_suggestion(&suggestion);
        assert!(out.starts_with("Suggested Next Task (low):"));
        assert!(out.contains("Browse"));
        assert!(out.contains("GPU: 5%"));
    }

    #[test]
    fn test_render_suggestion_without_task() {
        let tagged = Suggestion {
            task: None,
            intensity: Some(Intensity::High),
        };
        assert!(render_suggestion(&tagged).contains("high-intensity"));
        assert!(render_suggestion(&Suggestion::default()).starts_with("No suggestion"));
    }
}
