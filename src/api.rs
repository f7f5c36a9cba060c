//! HTTP client for the tracker backend.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::sync::Backend;
use crate::types::{Settings, UpdateRequest, VideoRecord};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let transport = |source: reqwest::Error| ApiError::Transport { path: path.to_string(), source };
        let resp = self.client.get(self.url(path)).send().await.map_err(transport)?;
        check_status(path, resp.status())?;
        resp.json::<T>().await.map_err(transport)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { path: path.to_string(), source })?;
        check_status(path, resp.status())
    }

    pub async fn fetch_videos(&self) -> Result<Vec<VideoRecord>, ApiError> {
        self.get_json("/api/videos").await
    }

    pub async fn load_settings(&self) -> Result<Settings, ApiError> {
        self.get_json("/api/settings").await
    }

    pub async fn save_settings(&self, settings: &Settings) -> Result<(), ApiError> {
        self.post_json("/api/settings", settings).await
    }

    pub async fn update_video(&self, request: &UpdateRequest) -> Result<(), ApiError> {
        self.post_json("/api/update", request).await
    }
}

impl Backend for ApiClient {
    async fn push_update(&self, request: &UpdateRequest) -> Result<(), ApiError> {
        self.update_video(request).await
    }
}

fn check_status(path: &str, status: reqwest::StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { path: path.to_string(), status: status.as_u16() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_the_base() {
        let api = ApiClient::new("http://127.0.0.1:8000");
        assert_eq!(api.url("/api/videos"), "http://127.0.0.1:8000/api/videos");
    }

    #[test]
    fn non_success_status_is_an_error() {
        assert!(check_status("/api/update", reqwest::StatusCode::OK).is_ok());
        let err = check_status("/api/update", reqwest::StatusCode::NOT_FOUND).unwrap_err();
        assert_eq!(err.to_string(), "/api/update answered with HTTP 404");
    }
}
