use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::{Extension, Json, Router};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::assessment::router::run_handler;
use crate::workflows::assessment::{
    assessment_router, AssessmentService, RunAssessmentRequest, TrackId, UserSkill,
};
use crate::workflows::dashboard::{dashboard_router, DashboardService};
use crate::workflows::generators::{generator_router, GeneratorService};
use crate::workflows::learner::{learner_router, OnboardingRequest};

fn app(fixture: &Fixture) -> Router {
    let dashboard = Arc::new(DashboardService::new(
        fixture.store.clone(),
        fixture.store.clone(),
    ));
    let generators = Arc::new(GeneratorService::new(
        fixture.assessments.clone(),
        fixture.catalog.clone(),
    ));

    Router::new()
        .merge(assessment_router(fixture.assessments.clone()))
        .merge(learner_router(fixture.learners.clone()))
        .merge(dashboard_router(dashboard))
        .merge(generator_router(generators))
        .layer(Extension(user()))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn run_route_returns_created_report() {
    let fixture = fixture();
    fixture
        .learners
        .record_skill(&user(), UserSkill::new("A", 2))
        .expect("recorded");

    let response = app(&fixture)
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({ "track_id": "scenario" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["result"]["readiness_score"], 45);
    assert_eq!(body["result"]["readiness_tier"], "needs_development");
    assert_eq!(body["result"]["missing_skills"], json!(["B"]));
    assert_eq!(body["user_id"], "ada");
}

#[tokio::test]
async fn run_route_maps_unknown_tracks_to_not_found() {
    let fixture = fixture();

    let response = app(&fixture)
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({ "track_id": "astronaut" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn run_route_maps_invalid_tracks_to_unprocessable() {
    let fixture = fixture();
    fixture
        .store
        .add_track(track_with("broken", &[("A", 3, -2.0)]));

    let response = app(&fixture)
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({ "track_id": "broken" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("invalid track definition")));
}

#[tokio::test]
async fn run_handler_reports_repository_outages() {
    let fixture = fixture();
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableStore),
        fixture.store.clone(),
        engine(),
    ));

    let response = run_handler(
        State(service),
        Extension(user()),
        Some(Json(RunAssessmentRequest {
            track_id: Some(TrackId::new("scenario")),
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn run_route_without_body_uses_the_onboarded_track() {
    let fixture = fixture();
    fixture
        .learners
        .onboard(
            &user(),
            OnboardingRequest {
                display_name: "Ada".to_string(),
                domain: "data".to_string(),
                track_id: TrackId::new("data-analyst"),
            },
        )
        .expect("onboarded");

    let response = app(&fixture)
        .oneshot(
            Request::post("/api/v1/assessments")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["track_id"], "data-analyst");
}

#[tokio::test]
async fn latest_route_is_not_found_before_any_run() {
    let fixture = fixture();

    let response = app(&fixture)
        .oneshot(get("/api/v1/assessments/latest"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_route_honours_the_limit() {
    let fixture = fixture();
    for _ in 0..3 {
        fixture
            .assessments
            .run(&user(), Some(TrackId::new("scenario")))
            .expect("runs");
    }

    let response = app(&fixture)
        .oneshot(get("/api/v1/assessments?limit=2"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let history = body.as_array().expect("array payload");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["id"], "assessment-0003");
}

#[tokio::test]
async fn onboarding_route_validates_domain() {
    let fixture = fixture();

    let response = app(&fixture)
        .oneshot(json_request(
            "POST",
            "/api/v1/onboarding",
            json!({
                "display_name": "Ada",
                "domain": "astrology",
                "track_id": "data-analyst"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn skills_import_route_reports_count() {
    let fixture = fixture();

    let response = app(&fixture)
        .oneshot(
            Request::post("/api/v1/skills/import")
                .header(header::CONTENT_TYPE, "text/csv")
                .body(Body::from("name,level\nSQL,3\nPython,2\n"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["imported"], 2);
    assert_eq!(fixture.learners.skills(&user()).expect("listed").len(), 2);
}

#[tokio::test]
async fn dashboard_export_is_served_as_csv() {
    let fixture = fixture();
    fixture
        .assessments
        .run(&user(), Some(TrackId::new("scenario")))
        .expect("runs");

    let response = app(&fixture)
        .oneshot(get("/api/v1/dashboard/export.csv"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let body = read_text_body(response).await;
    assert_eq!(body.lines().count(), 2);
}

#[tokio::test]
async fn generator_routes_reject_unknown_domains() {
    let fixture = fixture();

    let roles = app(&fixture)
        .oneshot(get("/api/v1/generate/roles?domain=astrology"))
        .await
        .expect("router responds");
    let projects = app(&fixture)
        .oneshot(get("/api/v1/generate/projects?domain=design"))
        .await
        .expect("router responds");

    assert_eq!(roles.status(), StatusCode::NOT_FOUND);
    assert_eq!(projects.status(), StatusCode::OK);
}

#[tokio::test]
async fn roadmap_route_requires_onboarding_without_track() {
    let fixture = fixture();

    let response = app(&fixture)
        .oneshot(json_request("POST", "/api/v1/generate/roadmap", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
