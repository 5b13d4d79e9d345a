use crate::core::allocation::Allocation;
use crate::core::evaluator::EvaluationResult;
use crate::core::history::HistoryRecord;
use crate::core::info::{ErrorInfo, TaskRequest};
use crate::core::rolling::RollingPoint;
use crate::core::suggest::Suggestion;
use crate::core::task::Task;
use anyhow::Context;
use reqwest::{Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use std::sync::Once;

fn ensure_rustls_provider_installed() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Another part of the process may already have installed one.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// HTTP client for the `alvyad` API.
#[derive(Debug, Clone)]
pub struct Client {
    client: ReqwestClient,
    base_url: String,
}

impl Client {
    pub fn build(config: &crate::config::Config) -> anyhow::Result<Self> {
        ensure_rustls_provider_installed();
        let base_url = format!("http://{}", config.daemon.address());
        let client = ReqwestClient::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_tasks(&self) -> anyhow::Result<Vec<Task>> {
        let response = self
            .client
            .get(format!("{}/api/tasks", self.base_url))
            .send()
            .await
            .context("Failed to send list tasks request")?;
        decode(response).await
    }

    pub async fn list_history(&self) -> anyhow::Result<Vec<HistoryRecord>> {
        let response = self
            .client
            .get(format!("{}/api/history", self.base_url))
            .send()
            .await
            .context("Failed to send history request")?;
        decode(response).await
    }

    pub async fn rolling_history(&self) -> anyhow::Result<Vec<RollingPoint>> {
        let response = self
            .client
            .get(format!("{}/api/history/rolling", self.base_url))
            .send()
            .await
            .context("Failed to send rolling history request")?;
        decode(response).await
    }

    pub async fn monitor(&self, task_id: u32) -> anyhow::Result<EvaluationResult> {
        tracing::debug!("Monitoring task {task_id}");
        let response = self
            .client
            .post(format!("{}/api/monitor", self.base_url))
            .json(&TaskRequest { task_id })
            .send()
            .await
            .context("Failed to send monitor request")?;
        decode(response).await
    }

    pub async fn allocate(&self, task_id: u32) -> anyhow::Result<Allocation> {
        tracing::debug!("Allocating task {task_id}");
        let response = self
            .client
            .post(format!("{}/api/allocate", self.base_url))
            .json(&TaskRequest { task_id })
            .send()
            .await
            .context("Failed to send allocate request")?;
        decode(response).await
    }

    pub async fn suggestion(&self) -> anyhow::Result<Suggestion> {
        let response = self
            .client
            .get(format!("{}/api/suggestion", self.base_url))
            .send()
            .await
            .context("Failed to send suggestion request")?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .context("Failed to parse daemon response");
    }
    let message = match response.json::<ErrorInfo>().await {
        Ok(info) => info.detail.unwrap_or(info.error),
        Err(_) => status.to_string(),
    };
    anyhow::bail!("{message} (HTTP {})", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_config() {
        let mut config = crate::config::Config::default();
        config.daemon.port = 6123;
        let client = Client::build(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:6123");
    }
}
