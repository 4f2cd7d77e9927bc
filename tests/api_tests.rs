use std::io::Cursor;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use cert_advisor::api::{create_router, AppState, Settings};
use cert_advisor::services::{load_catalog, RecommendationEngine};

fn create_test_server() -> TestServer {
    let catalog = load_catalog(Cursor::new(include_str!("../data/certificates.jsonl"))).unwrap();
    let engine = RecommendationEngine::build(catalog);
    let state = AppState::with_defaults(engine, Settings::default());
    TestServer::new(create_router(state)).unwrap()
}

fn senior_computer_profile() -> Value {
    json!({
        "grade": 4,
        "department": "컴퓨터공학부",
        "major": "컴퓨터공학",
        "field": "빅데이터"
    })
}

fn names(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-abc-123"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-abc-123");
}

#[tokio::test]
async fn test_taxonomy_lists_departments() {
    let server = create_test_server();
    let response = server.get("/taxonomy").await;
    response.assert_status_ok();
    let departments: Vec<Value> = response.json();
    assert_eq!(departments.len(), 10);
    assert_eq!(departments[0]["name"], "기계공학부");
    assert_eq!(departments[0]["majors"][0]["fields"][0], "기계설계");
}

#[tokio::test]
async fn test_certificates_are_sorted() {
    let server = create_test_server();
    let names: Vec<String> = server.get("/certificates").await.json();
    assert_eq!(names.len(), 18);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_unknown_certificate_is_404() {
    let server = create_test_server();
    let response = server.get("/certificates/없는자격증").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendations_for_senior() {
    let server = create_test_server();
    let response = server
        .post("/recommendations")
        .json(&senior_computer_profile())
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["recommendations"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(body.get("message").is_none());

    let scores: Vec<f64> = items.iter().map(|i| i["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    for item in items {
        let mark = item["graduation_requirement"].as_str().unwrap();
        assert!(mark == "O" || mark == "X");
    }
}

#[tokio::test]
async fn test_first_year_gets_no_engineer_credentials() {
    let server = create_test_server();
    let mut profile = senior_computer_profile();
    profile["grade"] = json!(1);
    profile["top_n"] = json!(20);

    let body: Value = server.post("/recommendations").json(&profile).await.json();
    let names = names(&body);
    assert!(!names.is_empty());
    assert!(names.iter().all(|n| !n.contains("기사")));
}

#[tokio::test]
async fn test_invalid_profile_is_bad_request() {
    let server = create_test_server();
    let response = server
        .post("/recommendations")
        .json(&json!({
            "grade": 2,
            "department": "컴퓨터공학부",
            "major": "기계공학",
            "field": "로봇"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("기계공학"));
}

#[tokio::test]
async fn test_top_n_above_maximum_is_rejected() {
    let server = create_test_server();
    let mut profile = senior_computer_profile();
    profile["top_n"] = json!(1000);
    let response = server.post("/recommendations").json(&profile).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_matches_returns_message() {
    let server = create_test_server();
    let response = server
        .post("/recommendations")
        .json(&json!({
            "grade": 1,
            "department": "건축공학전공",
            "major": "건축공학",
            "field": "구조공학"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["recommendations"].as_array().unwrap().is_empty());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_session_acquired_list_excludes_recommendations() {
    let server = create_test_server();
    let session_id = create_session(&server).await;

    let mut profile = senior_computer_profile();
    profile["top_n"] = json!(20);
    let before = names(&server.post("/recommendations").json(&profile).await.json());
    assert!(before.contains(&"정보처리기사".to_string()));

    let response = server
        .post(&format!("/sessions/{}/acquired", session_id))
        .json(&json!({ "name": "정보처리기사" }))
        .await;
    response.assert_status_ok();
    let session: Value = response.json();
    assert_eq!(session["acquired_certificates"], json!(["정보처리기사"]));

    profile["session_id"] = json!(session_id);
    let after = names(&server.post("/recommendations").json(&profile).await.json());
    assert!(!after.contains(&"정보처리기사".to_string()));
    assert_eq!(after.len(), before.len() - 1);
}

#[tokio::test]
async fn test_add_and_remove_acquired() {
    let server = create_test_server();
    let session_id = create_session(&server).await;
    let path = format!("/sessions/{}/acquired", session_id);

    server.post(&path).json(&json!({ "name": "CCNA" })).await;
    server.post(&path).json(&json!({ "name": "CCNA" })).await;
    server.post(&path).json(&json!({ "name": "리눅스마스터" })).await;

    let session: Value = server.get(&format!("/sessions/{}", session_id)).await.json();
    assert_eq!(session["acquired_certificates"], json!(["CCNA", "리눅스마스터"]));

    let response = server.delete(&format!("{}/CCNA", path)).await;
    response.assert_status_ok();
    let session: Value = response.json();
    assert_eq!(session["acquired_certificates"], json!(["리눅스마스터"]));
}

#[tokio::test]
async fn test_acquiring_unknown_certificate_is_404() {
    let server = create_test_server();
    let session_id = create_session(&server).await;
    let response = server
        .post(&format!("/sessions/{}/acquired", session_id))
        .json(&json!({ "name": "없는자격증" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let server = create_test_server();
    let response = server
        .get("/sessions/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_alumni_stats() {
    let server = create_test_server();
    let response = server
        .get("/alumni")
        .add_query_param("department", "컴퓨터공학부")
        .add_query_param("major", "컴퓨터공학")
        .await;
    response.assert_status_ok();
    let stats: Vec<Value> = response.json();
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[0], json!({ "name": "정보처리기사", "count": 150 }));
}

#[tokio::test]
async fn test_internship_search() {
    let server = create_test_server();
    let response = server
        .post("/internships/search")
        .json(&json!({
            "department": "메카트로닉스공학부",
            "grade": 3
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["short_term"][0]["company"], "퓨처 테크");
    assert_eq!(body["long_term"][0]["company"], "메가 코퍼레이션");
    assert_eq!(body["long_term"][0]["months"], 9);
    assert_eq!(body["long_term"][0]["duration_class"], "long_term");
    assert_eq!(body["long_term"][0]["eligibility"], "3학년 이상");
}

#[tokio::test]
async fn test_internship_search_rejects_bad_grade() {
    let server = create_test_server();
    let response = server
        .post("/internships/search")
        .json(&json!({ "department": "컴퓨터공학부", "grade": 9 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_round_trip() {
    let server = create_test_server();
    let path = "/certificates/CCNA/comments";

    let response = server.post(path).json(&json!({ "text": "실습 위주로 준비하세요" })).await;
    response.assert_status(StatusCode::CREATED);

    let comments: Vec<Value> = server.get(path).await.json();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "실습 위주로 준비하세요");

    let response = server.post(path).json(&json!({ "text": "   " })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feedback() {
    let server = create_test_server();
    let response = server
        .post("/feedback")
        .json(&json!({ "text": "추천이 유용했습니다" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].is_string());
}
