//! End-to-end tests driving the HTTP API over a real socket.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio_test::{assert_err, assert_ok};

use talent_gateway::api;
use talent_gateway::app_state::AppState;
use talent_gateway::domain::{Cursor, Pool, PoolRegistry, SearchHints};
use talent_gateway::service::SearchService;
use talent_gateway::source::{CandidateRecord, MockCandidateSource, ResultSource, SourceError};

#[derive(Debug)]
struct BrokenSource;

#[async_trait]
impl ResultSource for BrokenSource {
    async fn generate(
        &self,
        pool: &Pool,
        _count: usize,
        _hints: &SearchHints,
    ) -> Result<Vec<CandidateRecord>, SourceError> {
        Err(SourceError::new(pool.id.clone(), "connection refused by talent-db:5432"))
    }
}

#[derive(Debug, Default)]
struct RecordingSource {
    hints: Mutex<Vec<SearchHints>>,
}

#[async_trait]
impl ResultSource for RecordingSource {
    async fn generate(
        &self,
        pool: &Pool,
        count: usize,
        hints: &SearchHints,
    ) -> Result<Vec<CandidateRecord>, SourceError> {
        if let Ok(mut seen) = self.hints.lock() {
            seen.push(hints.clone());
        }
        Ok((0..count).map(|i| json!({ "network": pool.id, "index": i })).collect())
    }
}

async fn spawn_with(registry: PoolRegistry, source: Arc<dyn ResultSource>, per_pool: usize) -> SocketAddr {
    let search_service = Arc::new(SearchService::new(Arc::new(registry), source, per_pool));
    let app = api::build_app(AppState { search_service });

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn spawn_default() -> SocketAddr {
    spawn_with(PoolRegistry::builtin(), Arc::new(MockCandidateSource::new()), 5).await
}

fn eu_only_registry() -> PoolRegistry {
    let pool = Pool::new(
        "eu_grad_pool",
        "Europe",
        "graduate",
        vec!["Frontend".to_string()],
        "HIDDEN_INTERNAL_LINK",
    );
    let Ok(registry) = PoolRegistry::from_pools(vec![pool]) else {
        panic!("valid registry");
    };
    registry
}

async fn search(addr: SocketAddr, body: &Value) -> (StatusCode, Value) {
    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("http://{addr}/api/v1/talent/search"))
        .json(body)
        .send()
        .await
    else {
        panic!("request failed");
    };
    let status = response.status();
    let Ok(json) = response.json::<Value>().await else {
        panic!("response is not json");
    };
    (status, json)
}

#[tokio::test]
async fn react_developer_scenario() {
    let addr = spawn_with(eu_only_registry(), Arc::new(MockCandidateSource::new()), 5).await;
    let body = json!({
        "role": "React Developer",
        "skills": ["React"],
        "region": "Europe",
        "category": "graduate",
        "specializations": ["Frontend"],
        "limit": 5
    });

    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 5);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(5));
    assert!(json["next_page_token"].is_null());
    assert_eq!(json["needs_expansion_confirmation"], false);
    assert!(!json.to_string().contains("HIDDEN_INTERNAL_LINK"));
}

#[tokio::test]
async fn narrow_results_ask_for_expansion() {
    let addr = spawn_with(eu_only_registry(), Arc::new(MockCandidateSource::new()), 2).await;
    let body = json!({
        "role": "React Developer",
        "skills": ["React"],
        "region": "Europe",
        "category": "graduate",
        "specializations": ["Frontend"],
        "limit": 5,
        "progressive_search": false
    });

    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["needs_expansion_confirmation"], true);
}

#[tokio::test]
async fn missing_skills_is_validation_error() {
    let addr = spawn_default().await;
    let (status, json) = search(addr, &json!({ "role": "React Developer" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "validation_error");
    assert_eq!(json["error"]["code"], 1001);
}

#[tokio::test]
async fn wrongly_typed_body_is_validation_error() {
    let addr = spawn_default().await;
    let (status, json) = search(addr, &json!({ "role": "Dev", "skills": "React" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "validation_error");

    let (status, _) = search(addr, &json!({ "role": "Dev", "skills": [], "limit": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_limit_is_validation_error() {
    let addr = spawn_default().await;
    let (status, json) = search(addr, &json!({ "role": "Dev", "skills": [], "limit": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "validation_error");
    assert_eq!(json["error"]["message"], "invalid request: limit must be at least 1");
}

#[tokio::test]
async fn hints_are_sanitized_and_forwarded() {
    let recording = Arc::new(RecordingSource::default());
    let addr = spawn_with(
        PoolRegistry::builtin(),
        Arc::clone(&recording) as Arc<dyn ResultSource>,
        1,
    )
    .await;
    let body = json!({
        "role": "Engineer",
        "skills": [],
        "location": "Berlin<script>",
        "experience": "5+ years",
        "source_preference": "referrals_only"
    });

    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 3);

    let expected = SearchHints {
        location: Some("Berlinscript".to_string()),
        experience: Some("5 years".to_string()),
        source_preference: Some("referrals_only".to_string()),
    };
    let Ok(seen) = recording.hints.lock() else {
        panic!("hint log poisoned");
    };
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|h| *h == expected), "got {seen:?}");
}

#[tokio::test]
async fn malformed_page_token_is_cursor_error() {
    let addr = spawn_default().await;
    let body = json!({ "role": "Dev", "skills": [], "next_page_token": "not a token!" });
    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "cursor_error");
    assert_eq!(json["error"]["code"], 1002);
}

#[tokio::test]
async fn paging_walks_every_candidate_once() {
    let addr = spawn_default().await;
    let mut body = json!({ "role": "Engineer", "skills": [], "limit": 4 });

    let mut names = Vec::new();
    let mut pages = 0;
    loop {
        let (status, json) = search(addr, &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 15);
        pages += 1;

        let Some(results) = json["results"].as_array() else {
            panic!("results missing");
        };
        names.extend(
            results
                .iter()
                .filter_map(|r| r["name"].as_str().map(str::to_string)),
        );

        match json["next_page_token"].as_str() {
            Some(token) => body["next_page_token"] = json!(token),
            None => break,
        }
    }

    assert_eq!(pages, 4);
    assert_eq!(names.len(), 15);
    assert_eq!(names.first().map(String::as_str), Some("Alice - eu_grad_pool"));
    assert_eq!(names.last().map(String::as_str), Some("Eve - global_consultant_pool"));
}

#[tokio::test]
async fn region_filter_includes_global_pools() {
    let addr = spawn_default().await;
    let body = json!({ "role": "Engineer", "skills": [], "region": "North America" });
    let (_, json) = search(addr, &body).await;
    assert_eq!(json["total"], 10);

    let Some(results) = json["results"].as_array() else {
        panic!("results missing");
    };
    let networks: Vec<&str> = results.iter().filter_map(|r| r["network"].as_str()).collect();
    assert!(networks.iter().all(|n| *n == "us_industry_pool" || *n == "global_consultant_pool"));
}

#[tokio::test]
async fn cursor_beyond_end_is_empty_page() {
    let addr = spawn_default().await;
    let body = json!({
        "role": "Engineer",
        "skills": [],
        "next_page_token": Cursor::new(100).encode()
    });
    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 15);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(0));
    assert!(json["next_page_token"].is_null());
}

#[tokio::test]
async fn source_failure_is_opaque_500() {
    let addr = spawn_with(PoolRegistry::builtin(), Arc::new(BrokenSource), 5).await;
    let (status, json) = search(addr, &json!({ "role": "Engineer", "skills": [] })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["kind"], "internal_error");
    assert!(!json.to_string().contains("talent-db"));
    assert!(json.get("results").is_none());
}

#[tokio::test]
async fn pool_listing_hides_links() {
    let addr = spawn_default().await;
    let response = assert_ok!(reqwest::get(format!("http://{addr}/api/v1/pools")).await);
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = assert_ok!(response.json().await);
    assert_eq!(json["total"], 3);
    assert_eq!(json["data"][2]["pool_id"], "global_consultant_pool");
    assert!(!json.to_string().contains("HIDDEN_INTERNAL_LINK"));
}

#[tokio::test]
async fn health_and_limits() {
    let addr = spawn_default().await;

    let response = assert_ok!(reqwest::get(format!("http://{addr}/health")).await);
    let json: Value = assert_ok!(response.json().await);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["pool_count"], 3);

    let response = assert_ok!(reqwest::get(format!("http://{addr}/config/search-limits")).await);
    let json: Value = assert_ok!(response.json().await);
    assert_eq!(json["default_limit"], 10);
    assert_eq!(json["max_limit"], 50);
    assert_eq!(json["expansion_threshold"], 3);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let addr = spawn_default().await;
    let response = assert_ok!(reqwest::get(format!("http://{addr}/api/v1/nope")).await);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_file_drives_search() {
    let path = std::env::temp_dir().join(format!("talent-gateway-{}.json", std::process::id()));
    let catalog = json!([
        { "id": "apac_data_pool", "region": "APAC", "category": "industry", "specializations": ["Data Engineering"] },
        { "id": "remote_ml_pool", "region": "Global", "category": "industry", "specializations": ["ML"] }
    ]);
    assert_ok!(std::fs::write(&path, catalog.to_string()));
    let registry = assert_ok!(PoolRegistry::load(&path));
    let _ = std::fs::remove_file(&path);

    let addr = spawn_with(registry, Arc::new(MockCandidateSource::new()), 1).await;
    let body = json!({ "role": "Data Engineer", "skills": ["SQL"], "region": "APAC", "specializations": ["engineering"] });
    let (status, json) = search(addr, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["network"], "apac_data_pool");
    assert_eq!(json["needs_expansion_confirmation"], true);

    let duplicated = json!([
        { "id": "p", "region": "EU", "category": "c" },
        { "id": "p", "region": "US", "category": "c" }
    ]);
    assert_err!(PoolRegistry::from_json(&duplicated.to_string()));
}
