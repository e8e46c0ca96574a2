use axum::{
    body::Body,
    http::{header, Method, Request},
};
use tower::ServiceExt;

use super::*;
use crate::{model::api::ErrorDto, server::router};

fn request(method: Method, uri: &str, json: Option<&'static str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match json {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json)),
        None => builder.body(Body::empty()),
    }
    .unwrap()
}

/// Tests that requests axum cannot extract are answered like any invalid argument.
///
/// Covers a wrongly typed body, broken JSON, a body without a JSON content type, a
/// non-numeric path id, a non-numeric query id and a missing query parameter.
///
/// Expected: 400 Bad Request with an `ErrorDto` body for each
#[tokio::test]
async fn malformed_requests_are_bad_requests() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let app = router::router().with_state(AppState::new(test.db.clone().unwrap(), false));

    let cases = [
        request(Method::POST, "/faculties", Some(r#"{"name": 5}"#)),
        request(Method::POST, "/faculties", Some(r#"{"name": "#)),
        Request::builder()
            .method(Method::POST)
            .uri("/faculties")
            .body(Body::from(r#"{"name": "Physics"}"#))?,
        request(Method::PATCH, "/lecturers/abc", Some(r#"{}"#)),
        request(Method::GET, "/faculties/abc", None),
        request(Method::GET, "/week-lessons/find-for-group?group-id=x", None),
        request(Method::GET, "/month-lessons/find-for-group?group-id=1", None),
    ];

    for case in cases {
        let uri = case.uri().to_string();
        let response = app.clone().oneshot(case).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let error: ErrorDto = body(response).await?;
        assert!(error.error.starts_with("Malformed request"), "{uri}: {}", error.error);
    }

    Ok(())
}

/// Tests that a well formed request still reaches the handler through the router.
///
/// Expected: 200 OK with the stored faculty
#[tokio::test]
async fn well_formed_request_reaches_handler() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let app = router::router().with_state(AppState::new(test.db.clone().unwrap(), false));

    let response = app
        .oneshot(request(
            Method::POST,
            "/faculties",
            Some(r#"{"name": "Physics"}"#),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
