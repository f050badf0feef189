//! End-to-end behaviour of the order service HTTP surface over in-memory
//! adapters.

#[expect(
    dead_code,
    reason = "Shared builders include user service helpers unused here."
)]
mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};
use storefront::domain::ports::FixtureUserDirectory;
use storefront::server::{build_order_state, order_app};
use storefront::test_support::{InMemoryOrderRepository, UnreachableUserDirectory};
use support::{order_ops, order_state};

fn known_users() -> FixtureUserDirectory {
    FixtureUserDirectory::with_users([1])
}

#[actix_web::test]
async fn creating_an_order_for_a_known_user_returns_the_stored_order() {
    let repository = Arc::new(InMemoryOrderRepository::starting_at(7));
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 1, "amount": 50.0}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        br#"{"id":7,"user_id":1,"amount":50.0,"status":"created"}"#
    );
    assert_eq!(repository.len(), 1);
}

#[actix_web::test]
async fn creating_an_order_for_an_unknown_user_writes_nothing() {
    let repository = Arc::new(InMemoryOrderRepository::starting_at(7));
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 999, "amount": 10.0}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "user not found"}));
    assert!(repository.is_empty());
}

#[actix_web::test]
async fn reading_a_created_order_returns_identical_bytes_every_time() {
    let repository = Arc::new(InMemoryOrderRepository::starting_at(7));
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 1, "amount": 50.0}))
            .to_request(),
    )
    .await;
    let created_body = test::read_body(created).await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/orders/7").to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = test::read_body(first).await;

    let second =
        test::call_service(&app, test::TestRequest::get().uri("/orders/7").to_request()).await;
    let second_body = test::read_body(second).await;

    assert_eq!(first_body, created_body);
    assert_eq!(first_body, second_body);
}

#[actix_web::test]
async fn reading_an_unknown_order_returns_not_found_with_empty_body() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/orders/9999").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(res).await.is_empty());
}

#[rstest]
#[case::non_numeric("/orders/abc")]
#[case::zero("/orders/0")]
#[case::negative("/orders/-3")]
#[actix_web::test]
async fn reading_with_an_invalid_id_is_a_bad_request(#[case] uri: &str) {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[rstest]
#[case::zero_amount(json!({"user_id": 1, "amount": 0.0}))]
#[case::negative_user(json!({"user_id": -1, "amount": 5.0}))]
#[case::missing_fields(json!({}))]
#[actix_web::test]
async fn creating_an_invalid_order_is_rejected_before_the_user_check(#[case] payload: Value) {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let directory = Arc::new(UnreachableUserDirectory::default());
    let app = test::init_service(order_app(
        build_order_state(Arc::clone(&repository), Arc::clone(&directory)),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "invalid order input"}));
    assert_eq!(directory.calls(), 0);
    assert!(repository.is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"user_id\": 1,")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty());
}

#[rstest]
#[case::no_content_type(None)]
#[case::form_encoded(Some("application/x-www-form-urlencoded"))]
#[case::plain_text(Some("text/plain"))]
#[actix_web::test]
async fn json_bodies_are_accepted_whatever_the_content_type(
    #[case] content_type: Option<&str>,
) {
    let repository = Arc::new(InMemoryOrderRepository::starting_at(7));
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let mut req = test::TestRequest::post()
        .uri("/orders")
        .set_payload(r#"{"user_id":1,"amount":50.0}"#);
    if let Some(content_type) = content_type {
        req = req.insert_header(("content-type", content_type));
    }
    let res = test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        br#"{"id":7,"user_id":1,"amount":50.0,"status":"created"}"#
    );
}

#[actix_web::test]
async fn unreachable_user_service_is_a_bad_gateway() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let directory = Arc::new(UnreachableUserDirectory::default());
    let app = test::init_service(order_app(
        build_order_state(Arc::clone(&repository), Arc::clone(&directory)),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 1, "amount": 50.0}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(directory.calls(), 1);
    assert!(repository.is_empty());
}

#[actix_web::test]
async fn storage_failures_are_redacted() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    repository.set_unavailable(true);
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 1, "amount": 50.0}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[actix_web::test]
async fn metrics_are_labelled_by_route_template() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let missing =
        test::call_service(&app, test::TestRequest::get().uri("/orders/42").to_request()).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    let text = std::str::from_utf8(&body).expect("metrics are UTF-8");

    assert!(text.contains(r#"path="/orders/{id}""#), "{text}");
    assert!(text.contains(r#"service="order-service""#), "{text}");
    assert!(text.contains(r#"status="404""#), "{text}");
    assert!(!text.contains(r#"path="/orders/42""#), "{text}");
}

#[rstest]
#[case::liveness("/healthz")]
#[case::readiness("/readyz")]
#[case::swagger("/swagger")]
#[case::document("/swagger/openapi.yaml")]
#[actix_web::test]
async fn operational_routes_are_served(#[case] uri: &str) {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn order_document_describes_only_order_routes() {
    let repository = Arc::new(InMemoryOrderRepository::default());
    let app = test::init_service(order_app(
        order_state(&repository, known_users()),
        order_ops(),
    ))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/swagger/openapi.yaml")
            .to_request(),
    )
    .await;
    let body = test::read_body(res).await;
    let yaml = std::str::from_utf8(&body).expect("document is UTF-8");

    assert!(yaml.contains("/orders/{id}"));
    assert!(!yaml.contains("/users/{id}"));
}
