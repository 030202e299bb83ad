use crate::{
    api::{StatusPatch, TodoApi, TodoPage},
    config::ApiConfig,
    domain::{StatusTotals, TaskId, TaskItem, TaskStatus, WorkloadEntry},
    error::{BoardError, Result},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// `TodoApi` over the backend's REST endpoints
pub struct HttpTodoApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpTodoApi {
    const TODOS_PATH: &'static str = "/todos/";
    const STATUS_STATS_PATH: &'static str = "/todos/stats/status";
    const WORKLOAD_STATS_PATH: &'static str = "/todos/stats/workload";

    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. one carrying auth headers
    pub fn with_client(config: ApiConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn todo_url(&self, id: &TaskId) -> String {
        self.config
            .endpoint(&format!("{}{}", Self::TODOS_PATH, id.as_str()))
    }

    fn list_request(&self, page_size: u32) -> reqwest::RequestBuilder {
        self.client
            .get(self.config.endpoint(Self::TODOS_PATH))
            .query(&[("size", page_size)])
    }

    fn update_request(&self, id: &TaskId, status: TaskStatus) -> reqwest::RequestBuilder {
        self.client
            .put(self.todo_url(id))
            .json(&StatusPatch { status })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response)?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BoardError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self, page_size: u32) -> Result<Vec<TaskItem>> {
        tracing::debug!(page_size, "fetching todos");

        let response = self.list_request(page_size).send().await?;
        let response = check_status(response)?;
        let bytes = response.bytes().await?;
        let page: TodoPage = serde_json::from_slice(&bytes)?;

        Ok(page.items)
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<()> {
        tracing::debug!(%id, %status, "updating todo status");

        let response = self.update_request(id, status).send().await?;
        check_status(response)?;

        Ok(())
    }

    async fn status_totals(&self) -> Result<StatusTotals> {
        let url = self.config.endpoint(Self::STATUS_STATS_PATH);
        self.get_json(&url).await
    }

    async fn workload(&self) -> Result<Vec<WorkloadEntry>> {
        let url = self.config.endpoint(Self::WORKLOAD_STATS_PATH);
        self.get_json(&url).await
    }
}
