//! Tests for the users API handlers.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::domain::BoardError;
use crate::domain::ports::{
    FixtureAdsCommand, FixtureAdsQuery, FixtureUsersCommand, FixtureUsersQuery, MockUsersCommand,
    MockUsersQuery,
};
use crate::inbound::http::routes;

fn fixture_state() -> HttpState {
    HttpState {
        ads: Arc::new(FixtureAdsCommand),
        ads_query: Arc::new(FixtureAdsQuery),
        users: Arc::new(FixtureUsersCommand),
        users_query: Arc::new(FixtureUsersQuery),
    }
}

fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(routes::configure)
}

#[actix_web::test]
async fn create_user_echoes_the_registered_record() {
    let mut users = MockUsersCommand::new();
    users
        .expect_create_user()
        .withf(|name, email| name == "Ada" && email == "ada@example.com")
        .times(1)
        .returning(|name, email| {
            Ok(User {
                id: UserId::new(0),
                name: name.to_owned(),
                email: email.to_owned(),
            })
        });
    let state = HttpState {
        users: Arc::new(users),
        ..fixture_state()
    };
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: UserResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.id, 0);
    assert_eq!(body.name, "Ada");
    assert_eq!(body.email, "ada@example.com");
}

#[actix_web::test]
async fn unknown_user_maps_to_not_found() {
    let mut users_query = MockUsersQuery::new();
    users_query
        .expect_user()
        .returning(|user_id| Err(BoardError::no_such_user(user_id)));
    let state = HttpState {
        users_query: Arc::new(users_query),
        ..fixture_state()
    };
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/users/99")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("no_such_user"),
    );
}

#[actix_web::test]
async fn update_user_passes_both_fields_through() {
    let mut users = MockUsersCommand::new();
    users
        .expect_update_user()
        .withf(|user_id, name, email| {
            *user_id == UserId::new(5) && name == "Grace" && email == "grace@example.com"
        })
        .times(1)
        .returning(|user_id, name, email| {
            Ok(User {
                id: user_id,
                name: name.to_owned(),
                email: email.to_owned(),
            })
        });
    let state = HttpState {
        users: Arc::new(users),
        ..fixture_state()
    };
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/v1/users/5")
        .set_json(json!({ "name": "Grace", "email": "grace@example.com" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: UserResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.id, 5);
    assert_eq!(body.name, "Grace");
}

#[actix_web::test]
async fn delete_user_returns_no_content() {
    let mut users = MockUsersCommand::new();
    users
        .expect_delete_user()
        .withf(|user_id| *user_id == UserId::new(5))
        .times(1)
        .returning(|_| Ok(()));
    let state = HttpState {
        users: Arc::new(users),
        ..fixture_state()
    };
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/v1/users/5")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
