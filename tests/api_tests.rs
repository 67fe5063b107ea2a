use std::path::PathBuf;

use axum_test::TestServer;
use serde_json::json;

use recsys_api::api::{create_router, AppState};
use recsys_api::config::Config;
use recsys_api::services::loader;

const COLLABORATIVE_CSV: &str = "\
user_id,rec1,rec2,rec3,rec4,rec5
u1,The Matrix,Inception,Interstellar,Blade Runner,Arrival
u2,Breaking Bad,Better Call Saul,Ozark,Narcos,Fargo
u3,The Office,Parks and Recreation,Brooklyn Nine-Nine,Community,Superstore
";

const CONTENT_CSV: &str = "\
item_id,rec1,rec2,rec3,rec4,rec5
m1,Inception,Tenet,Memento,The Prestige,Dunkirk
m2,Arrival,Annihilation,Under the Skin,Solaris,Moon
";

struct TestContext {
    server: TestServer,
    collaborative_path: PathBuf,
    #[allow(dead_code)]
    content_path: PathBuf,
}

async fn setup(collaborative_csv: &str, content_csv: &str) -> TestContext {
    let dir = std::env::temp_dir().join(format!("recsys-api-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let collaborative_path = dir.join("collaborative.csv");
    let content_path = dir.join("content.csv");
    std::fs::write(&collaborative_path, collaborative_csv).unwrap();
    std::fs::write(&content_path, content_csv).unwrap();

    let config = Config {
        collaborative_table_path: collaborative_path.to_string_lossy().into_owned(),
        content_table_path: content_path.to_string_lossy().into_owned(),
        external_source_name: "Azure ML".to_string(),
        external_scoring_url: None,
        external_api_key: None,
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let collaborative = loader::load_from_path(&config.collaborative_table_path)
        .await
        .unwrap();
    let content = loader::load_from_path(&config.content_table_path)
        .await
        .unwrap();
    let state = AppState::new(&config, collaborative, content);

    TestContext {
        server: TestServer::new(create_router(state)).unwrap(),
        collaborative_path,
        content_path,
    }
}

#[tokio::test]
async fn test_health_check() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;
    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_user_based_exact_match() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    let response = ctx
        .server
        .post("/recommendations")
        .json(&json!({
            "identifier": "u2",
            "kind": "user_based"
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["identifier"], "u2");
    assert_eq!(
        body["collaborative"],
        json!(["Breaking Bad", "Better Call Saul", "Ozark", "Narcos", "Fargo"])
    );
    // Content has no native match for a user identifier, so it falls back to
    // a sampled row; still exactly five entries.
    assert_eq!(body["content"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["external"],
        json!([
            "Azure ML Recommendation 1",
            "Azure ML Recommendation 2",
            "Azure ML Recommendation 3",
            "Azure ML Recommendation 4",
            "Azure ML Recommendation 5",
        ])
    );
}

#[tokio::test]
async fn test_content_based_exact_match() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    let response = ctx
        .server
        .post("/recommendations")
        .json(&json!({
            "identifier": "m1",
            "kind": "content_based"
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["content"],
        json!(["Inception", "Tenet", "Memento", "The Prestige", "Dunkirk"])
    );
    assert_eq!(body["collaborative"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_identifier_still_returns_three_full_lists() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    let response = ctx
        .server
        .post("/recommendations")
        .json(&json!({
            "identifier": "nobody",
            "kind": "user_based"
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    for source in ["collaborative", "content", "external"] {
        assert_eq!(body[source].as_array().unwrap().len(), 5, "{}", source);
    }
}

#[tokio::test]
async fn test_blank_identifier_is_rejected() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    for identifier in ["", "   "] {
        let response = ctx
            .server
            .post("/recommendations")
            .json(&json!({
                "identifier": identifier,
                "kind": "user_based"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("identifier"));
    }
}

#[tokio::test]
async fn test_tables_report_row_counts() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    let response = ctx.server.get("/tables").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["collaborative_rows"], 3);
    assert_eq!(body["content_rows"], 2);
}

#[tokio::test]
async fn test_reload_publishes_new_snapshot() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    let extended = format!("{}u4,Seinfeld,Frasier,Cheers,Curb Your Enthusiasm,Arrested Development\n", COLLABORATIVE_CSV);
    std::fs::write(&ctx.collaborative_path, extended).unwrap();

    let response = ctx.server.post("/tables/reload").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["collaborative_rows"], 4);

    // The new row resolves exactly after the swap.
    let response = ctx
        .server
        .post("/recommendations")
        .json(&json!({
            "identifier": "u4",
            "kind": "user_based"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["collaborative"][0], "Seinfeld");
}

#[tokio::test]
async fn test_reload_failure_keeps_current_snapshot() {
    let ctx = setup(COLLABORATIVE_CSV, CONTENT_CSV).await;

    // A file with no header cannot be published.
    std::fs::write(&ctx.collaborative_path, "").unwrap();

    let response = ctx.server.post("/tables/reload").await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    // The previously published snapshot still serves exact matches.
    let response = ctx
        .server
        .post("/recommendations")
        .json(&json!({
            "identifier": "u1",
            "kind": "user_based"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["collaborative"][0], "The Matrix");
}
