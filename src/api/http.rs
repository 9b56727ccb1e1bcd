//! HTTP Backend Client
//!
//! reqwest implementation of [`Backend`] for native builds.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{
    endpoint, upload_status_error, ApiError, ApiResult, Backend, ColumnCount, OverviewStats,
    PageResponse, UploadResponse,
};
use crate::upload::UploadedFile;

/// Dashboard backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    type File = UploadedFile;

    async fn overview(&self) -> ApiResult<OverviewStats> {
        self.get_json(self.url("/api/overview")).await
    }

    async fn column_counts(&self) -> ApiResult<Vec<ColumnCount>> {
        self.get_json(self.url("/api/column_counts")).await
    }

    async fn page(&self, page: u32, limit: u32) -> ApiResult<PageResponse> {
        let url = format!("{}?page={}&limit={}", self.url("/api/data"), page, limit);
        self.get_json(url).await
    }

    async fn upload(&self, file: &UploadedFile) -> ApiResult<()> {
        let url = self.url("/api/upload");

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if !file.mime.is_empty() {
            part = part.mime_str(&file.mime)?;
        }
        let form = Form::new().part("file", part);

        tracing::debug!(%url, file = %file.name, size = file.bytes.len(), "POST upload");
        let response = self.client.post(&url).multipart(form).send().await?;

        // The body is decoded before the status is looked at; an unreadable
        // body is a failed upload even on 200.
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: UploadResponse = serde_json::from_slice(&bytes)?;

        if status.is_success() {
            Ok(())
        } else {
            Err(upload_status_error(status.as_u16(), body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let backend = HttpBackend::new("http://127.0.0.1:5000/");
        assert_eq!(backend.url("/api/overview"), "http://127.0.0.1:5000/api/overview");
        assert_eq!(backend.base_url(), "http://127.0.0.1:5000/");
    }
}
