use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::recruitment::domain::{ApplicantId, PaperStatus};
use crate::recruitment::repository::RecruitmentRepository;

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn applicant_list_route_applies_requested_order() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get(
            "/api/v1/mozips/mozip-spring/applicants?sort_by=total_paper_score&order=desc",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload["applicants"].as_array().expect("applicants array");
    let ranked: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| {
            (
                row["applicant_id"].as_str().unwrap_or_default(),
                row["total_paper_score"].as_i64().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(ranked, vec![("a1", 10), ("a2", 4), ("a4", 0)]);
    assert_eq!(payload["sort"], json!({ "field": "total_paper_score", "direction": "desc" }));
    assert_eq!(payload["title"], json!("2025 Spring Recruiting"));
}

#[tokio::test]
async fn applicant_list_route_returns_not_found_for_unknown_mozip() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get("/api/v1/mozips/nowhere/applicants"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("nowhere"));
}

#[tokio::test]
async fn applicant_list_route_rejects_unknown_order() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get("/api/v1/mozips/mozip-spring/applicants?order=sideways"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn applicant_route_returns_record_and_not_found() {
    let repository = seeded_repository();

    let found = router_with(repository.clone())
        .oneshot(get("/api/v1/applicants/a2"))
        .await
        .expect("route executes");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["name"], json!("Lee Dahye"));
    assert_eq!(payload["paper_status"], json!("PENDING"));
    assert_eq!(payload["mozip_id"], json!(SPRING));

    let missing = router_with(repository)
        .oneshot(get("/api/v1/applicants/ghost"))
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn paper_answers_route_parses_filters_once() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get(
            "/api/v1/mozips/mozip-spring/paper-answers?evaluator_id=evaluator-1&question_ids=q1,q2&applicant_ids=a1",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let groups = payload["questions"].as_array().expect("questions array");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["question_id"], json!("q1"));
    assert_eq!(groups[0]["answers"][0]["score"], json!(8));
    assert_eq!(groups[1]["answers"][0]["score"], json!(6));
}

#[tokio::test]
async fn paper_answers_route_maps_missing_scores_to_not_found() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get(
            "/api/v1/mozips/mozip-spring/paper-answers?evaluator_id=evaluator-1&applicant_ids=a1",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn paper_answers_route_requires_evaluator() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get("/api/v1/mozips/mozip-spring/paper-answers"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paper_status_route_updates_applicants() {
    let repository = seeded_repository();
    let router = router_with(repository.clone());

    let response = router
        .oneshot(json_request(
            "PATCH",
            "/api/v1/mozips/mozip-spring/applicants/paper-status",
            json!({
                "applicants": [
                    { "applicant_id": "a1", "status": "PASSED" },
                    { "applicant_id": "a4", "status": "HOLD" }
                ]
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["timestamp"].as_str().is_some());

    let a4 = repository
        .find_applicant(&ApplicantId::from("a4"))
        .expect("fetch succeeds")
        .expect("a4 present");
    assert_eq!(a4.paper_status, PaperStatus::Hold);
}

#[tokio::test]
async fn paper_question_route_updates_question() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/v1/paper-questions/q3",
            json!({ "question": "What should we try next semester?", "is_required": false }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["question"], json!("What should we try next semester?"));
    assert_eq!(payload["details"], Value::Null);
    assert_eq!(payload["is_required"], json!(false));
}

#[tokio::test]
async fn interview_questions_route_lists_in_order() {
    let router = router_with(seeded_repository());

    let response = router
        .oneshot(get("/api/v1/mozips/mozip-spring/interview-questions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let numbers: Vec<Value> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .map(|question| question["question_no"].clone())
        .collect();
    assert_eq!(numbers, vec![json!(1), json!(2), Value::Null]);
}

#[tokio::test]
async fn repository_outage_maps_to_service_unavailable() {
    let router = router_with(Arc::new(UnavailableRepository));

    let response = router
        .oneshot(get("/api/v1/mozips/mozip-spring/applicants"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("offline"));
}
