use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use todo_domain::{NewTodo, TodoPatch, TodoRecord};

use crate::error::ClientError;

/// Thin async wrapper over the todo HTTP API, one method per endpoint.
///
/// No timeouts are configured beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
    http: reqwest::Client,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<TodoRecord>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/all-todos", self.base_url))
            .send()
            .await?;
        parse_json(resp).await
    }

    pub async fn create(&self, todo: &NewTodo) -> Result<TodoRecord, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/new-todos", self.base_url))
            .json(todo)
            .send()
            .await?;
        parse_json(resp).await
    }

    pub async fn update(&self, id: &str, patch: &TodoPatch) -> Result<TodoRecord, ClientError> {
        let resp = self
            .http
            .put(format!("{}/api/edit-todo/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;
        parse_json(resp).await
    }

    pub async fn delete(&self, id: &str) -> Result<TodoRecord, ClientError> {
        let resp = self
            .http
            .delete(format!("{}/api/all-todos/{id}", self.base_url))
            .send()
            .await?;
        parse_json(resp).await
    }
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Server {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp.json().await?)
}
