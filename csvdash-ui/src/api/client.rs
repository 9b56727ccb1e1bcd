//! HTTP API Client
//!
//! `fetch`-based [`Backend`] for the browser, plus the file handle the
//! upload input produces.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use csvdash::api::{endpoint, upload_status_error};
use csvdash::{
    ApiError, ApiResult, Backend, ColumnCount, OverviewStats, PageResponse, SelectedFile,
    UploadResponse,
};

/// A file picked through `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(File);

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl SelectedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime(&self) -> String {
        self.0.type_()
    }
}

/// Dashboard backend reached with `fetch`
#[derive(Debug, Clone)]
pub struct BrowserBackend {
    base_url: String,
}

impl BrowserBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = Request::get(url).send().await.map_err(network_error)?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message,
            });
        }

        decode(&response).await
    }
}

#[async_trait(?Send)]
impl Backend for BrowserBackend {
    type File = BrowserFile;

    async fn overview(&self) -> ApiResult<OverviewStats> {
        self.get_json(&self.url("/api/overview")).await
    }

    async fn column_counts(&self) -> ApiResult<Vec<ColumnCount>> {
        self.get_json(&self.url("/api/column_counts")).await
    }

    async fn page(&self, page: u32, limit: u32) -> ApiResult<PageResponse> {
        let url = format!("{}?page={}&limit={}", self.url("/api/data"), page, limit);
        self.get_json(&url).await
    }

    async fn upload(&self, file: &BrowserFile) -> ApiResult<()> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", &file.0, &file.0.name())
            .map_err(js_error)?;

        let response = Request::post(&self.url("/api/upload"))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        let body: UploadResponse = decode(&response).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(upload_status_error(response.status(), body))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", value))
}
