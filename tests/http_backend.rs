//! HttpBackend against an in-process axum stub of the dashboard API.

use axum::extract::{Multipart, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use csvdash::{
    upload_file, ApiError, Backend, DashboardState, HttpBackend, RecordTable, UploadOutcome,
    UploadedFile,
};

async fn overview() -> Json<serde_json::Value> {
    Json(json!({ "total_users": 12, "total_cities": 0 }))
}

async fn column_counts() -> Json<serde_json::Value> {
    Json(json!([
        { "column_name": "name", "total_rows": 10 },
        { "column_name": "city", "total_rows": 7 }
    ]))
}

/// Echoes the query into `_id`; keys are deliberately out of alphabetical order
async fn data(Query(params): Query<HashMap<String, String>>) -> Response {
    let page = params.get("page").cloned().unwrap_or_default();
    let limit = params.get("limit").cloned().unwrap_or_default();
    let body = format!(
        r#"{{"data":[{{"zeta":null,"_id":"p{page}-l{limit}","alpha":1}}],"total_pages":4}}"#
    );
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn upload(mut multipart: Multipart) -> Response {
    let mut received = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap_or_default();
        if name == "file" {
            received = Some((file_name, bytes));
        }
    }

    let Some((file_name, bytes)) = received else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "No file part" }))).into_response();
    };

    match file_name.as_str() {
        "broken.csv" => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid CSV" }))).into_response()
        }
        "silent.csv" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response(),
        "html.csv" => (StatusCode::OK, "<html>ok</html>").into_response(),
        _ if bytes.is_empty() => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": "Empty file" }))).into_response()
        }
        _ => Json(json!({ "message": "File uploaded" })).into_response(),
    }
}

async fn start_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

async fn stub_backend() -> HttpBackend {
    let app = Router::new()
        .route("/api/overview", get(overview))
        .route("/api/column_counts", get(column_counts))
        .route("/api/data", get(data))
        .route("/api/upload", post(upload));
    HttpBackend::new(start_server(app).await)
}

fn csv_file(name: &str) -> UploadedFile {
    UploadedFile::new(name, "text/csv", b"name,city\nAda,London\n".to_vec())
}

#[tokio::test]
async fn test_overview_and_column_counts() {
    let backend = stub_backend().await;

    let stats = backend.overview().await.unwrap();
    assert_eq!(stats.total_users, Some(12));
    assert_eq!(stats.total_cities, Some(0));
    assert_eq!(stats.total_states, None);

    let counts = backend.column_counts().await.unwrap();
    let names: Vec<&str> = counts.iter().map(|c| c.column_name.as_str()).collect();
    assert_eq!(names, vec!["name", "city"]);
}

#[tokio::test]
async fn test_dashboard_refresh_over_http() {
    let backend = stub_backend().await;
    let mut state = DashboardState::<UploadedFile>::new();

    state.refresh(&backend).await;

    let cards = state.stat_cards().unwrap();
    assert_eq!(cards[0].display_value(), "12");
    assert_eq!(cards[2].display_value(), "0");
    assert_eq!(cards[3].display_value(), "N/A");
    assert_eq!(state.column_counts().ready().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_page_query_and_field_order() {
    let backend = stub_backend().await;
    let mut table = RecordTable::default();

    table.load(&backend).await.unwrap();
    assert_eq!(table.total_pages(), 4);
    assert_eq!(table.records()[0].id(), Some("p1-l5"));
    assert_eq!(table.columns(), vec!["_id", "zeta", "alpha"]);
    assert_eq!(table.rows()[0], vec!["p1-l5", "N/A", "1"]);

    assert!(table.paginate(3));
    table.load(&backend).await.unwrap();
    assert_eq!(table.records()[0].id(), Some("p3-l5"));
    assert!(!table.is_loading());
}

#[tokio::test]
async fn test_upload_outcomes() {
    let backend = stub_backend().await;

    let ok = upload_file(&backend, &csv_file("doctors.csv")).await;
    assert_eq!(ok.alert_message(), "doctors.csv uploaded successfully!");

    let rejected = upload_file(&backend, &csv_file("broken.csv")).await;
    assert_eq!(rejected.alert_message(), "Error: Invalid CSV");

    let silent = upload_file(&backend, &csv_file("silent.csv")).await;
    assert_eq!(
        silent,
        UploadOutcome::Rejected {
            message: "Unknown error".to_string()
        }
    );

    // 200 with a body that is not JSON still counts as a failed upload
    let html = upload_file(&backend, &csv_file("html.csv")).await;
    assert_eq!(html, UploadOutcome::Failed);
    assert_eq!(html.alert_message(), "Failed to upload file.");
}

#[tokio::test]
async fn test_upload_without_mime() {
    let backend = stub_backend().await;
    let file = UploadedFile::new("plain.csv", "", b"a\n1\n".to_vec());

    assert!(backend.upload(&file).await.is_ok());
}

#[tokio::test]
async fn test_error_status_on_json_fetch() {
    let app = Router::new().route(
        "/api/overview",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "backend down") }),
    );
    let backend = HttpBackend::new(start_server(app).await);

    let err = backend.overview().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            message: "backend down".to_string()
        }
    );

    // Unrouted path: 404 from the stub
    assert!(matches!(
        backend.column_counts().await,
        Err(ApiError::Status { status: 404, .. })
    ));

    // A failed fetch leaves the slot pending
    let mut state = DashboardState::<UploadedFile>::new();
    state.refresh(&backend).await;
    assert!(state.overview().is_pending());
    assert!(state.column_counts().is_pending());
}

#[tokio::test]
async fn test_unreachable_backend() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{addr}"));
    assert!(matches!(backend.overview().await, Err(ApiError::Network(_))));

    let outcome = upload_file(&backend, &csv_file("doctors.csv")).await;
    assert_eq!(outcome, UploadOutcome::Failed);
}

#[tokio::test]
async fn test_records_from_unreachable_backend_fail() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{addr}"));
    let mut table = RecordTable::default();

    // The failure surfaces instead of reading as an empty first page
    let err = table.load(&backend).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!table.is_loading());
    assert!(table.records().is_empty());
}
