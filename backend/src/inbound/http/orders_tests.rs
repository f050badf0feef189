//! Handler tests for the orders endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockOrderCommand, MockOrderQuery};
use crate::domain::{Error, INVALID_ORDER_MESSAGE, USER_NOT_FOUND_MESSAGE};
use crate::inbound::http::error::{REDACTED_MESSAGE, configure_extractors};

fn state(command: MockOrderCommand, query: MockOrderQuery) -> web::Data<OrderHttpState> {
    web::Data::new(OrderHttpState::new(Arc::new(command), Arc::new(query)))
}

fn stored_order() -> Order {
    Order {
        id: 7,
        user_id: 1,
        amount: 50.0,
        status: "created".to_owned(),
    }
}

async fn call(
    command: MockOrderCommand,
    query: MockOrderQuery,
    req: test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(state(command, query))
            .configure(configure_extractors)
            .configure(configure),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

#[actix_web::test]
async fn create_returns_created_order() {
    let mut command = MockOrderCommand::new();
    command
        .expect_create_order()
        .withf(|order| order.user_id == 1 && order.status.is_empty())
        .times(1)
        .return_once(|_| Ok(stored_order()));

    let res = call(
        command,
        MockOrderQuery::new(),
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 1, "amount": 50.0})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        br#"{"id":7,"user_id":1,"amount":50.0,"status":"created"}"#
    );
}

#[rstest]
#[case::invalid(Error::invalid_input(INVALID_ORDER_MESSAGE), StatusCode::BAD_REQUEST, INVALID_ORDER_MESSAGE)]
#[case::missing_user(
    Error::referenced_entity_missing(USER_NOT_FOUND_MESSAGE),
    StatusCode::NOT_FOUND,
    USER_NOT_FOUND_MESSAGE
)]
#[case::dependency(
    Error::dependency_unavailable("user service timed out"),
    StatusCode::BAD_GATEWAY,
    "user service timed out"
)]
#[case::storage(Error::storage("insert failed"), StatusCode::INTERNAL_SERVER_ERROR, REDACTED_MESSAGE)]
#[actix_web::test]
async fn create_maps_domain_errors(
    #[case] failure: Error,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let mut command = MockOrderCommand::new();
    command
        .expect_create_order()
        .times(1)
        .return_once(move |_| Err(failure));

    let res = call(
        command,
        MockOrderQuery::new(),
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"user_id": 999, "amount": 10.0})),
    )
    .await;

    assert_eq!(res.status(), status);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "error": message }));
}

#[actix_web::test]
async fn create_rejects_malformed_json_without_calling_the_use_case() {
    let mut command = MockOrderCommand::new();
    command.expect_create_order().times(0);

    let res = call(
        command,
        MockOrderQuery::new(),
        test::TestRequest::post()
            .uri("/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"user_id\": \"one\"}"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn get_returns_stored_order() {
    let mut query = MockOrderQuery::new();
    query
        .expect_find_order()
        .withf(|id| *id == 7)
        .times(1)
        .return_once(|_| Ok(Some(stored_order())));

    let res = call(
        MockOrderCommand::new(),
        query,
        test::TestRequest::get().uri("/orders/7"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let order: Order = test::read_body_json(res).await;
    assert_eq!(order, stored_order());
}

#[actix_web::test]
async fn get_missing_order_is_404_with_empty_body() {
    let mut query = MockOrderQuery::new();
    query.expect_find_order().return_once(|_| Ok(None));

    let res = call(
        MockOrderCommand::new(),
        query,
        test::TestRequest::get().uri("/orders/404"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(res).await.is_empty());
}

#[rstest]
#[case::letters("/orders/abc")]
#[case::fraction("/orders/1.5")]
#[case::overflow("/orders/99999999999999999999")]
#[actix_web::test]
async fn get_rejects_unparsable_ids(#[case] uri: &str) {
    let mut query = MockOrderQuery::new();
    query.expect_find_order().times(0);

    let res = call(MockOrderCommand::new(), query, test::TestRequest::get().uri(uri)).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn get_maps_invalid_id_from_use_case_to_400() {
    let mut query = MockOrderQuery::new();
    query
        .expect_find_order()
        .return_once(|_| Err(Error::invalid_input(INVALID_ORDER_MESSAGE)));

    let res = call(
        MockOrderCommand::new(),
        query,
        test::TestRequest::get().uri("/orders/0"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
