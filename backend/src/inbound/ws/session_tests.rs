//! Tests for RPC dispatch and the wire vocabulary.

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    FixtureAdsCommand, FixtureAdsQuery, FixtureUsersCommand, FixtureUsersQuery, MockAdsQuery,
    MockUsersQuery,
};

fn fixture_state() -> WsState {
    WsState {
        ads: Arc::new(FixtureAdsCommand),
        ads_query: Arc::new(FixtureAdsQuery),
        users: Arc::new(FixtureUsersCommand),
        users_query: Arc::new(FixtureUsersQuery),
    }
}

fn parse_request(raw: Value) -> RpcRequest {
    serde_json::from_value(raw).expect("valid request frame")
}

#[test]
fn request_frames_parse_by_op_discriminator() {
    let request = parse_request(json!({
        "requestId": "00000000-0000-0000-0000-000000000001",
        "op": "create_ad",
        "title": "hello",
        "text": "world",
        "userId": 3,
    }));

    assert_eq!(
        request.request_id,
        Uuid::from_u128(1),
    );
    match request.call {
        RpcCall::CreateAd {
            title,
            text,
            user_id,
        } => {
            assert_eq!(title, "hello");
            assert_eq!(text, "world");
            assert_eq!(user_id, 3);
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[test]
fn unknown_ops_are_rejected_at_parse_time() {
    let result = serde_json::from_value::<RpcRequest>(json!({
        "requestId": "00000000-0000-0000-0000-000000000001",
        "op": "drop_all_tables",
    }));
    assert!(result.is_err());
}

#[test]
fn create_ad_dispatch_yields_an_ad_payload() {
    let session = RpcSession::new(fixture_state());

    let data = session
        .dispatch(RpcCall::CreateAd {
            title: "hello".to_owned(),
            text: "world".to_owned(),
            user_id: 3,
        })
        .expect("fixture create succeeds");

    assert_eq!(data.get("title").and_then(Value::as_str), Some("hello"));
    assert_eq!(data.get("authorId").and_then(Value::as_i64), Some(3));
    assert_eq!(data.get("published").and_then(Value::as_bool), Some(false));
    assert!(data.get("createdAt").is_some());
}

#[test]
fn deletions_reply_with_null_data() {
    let session = RpcSession::new(fixture_state());

    let data = session
        .dispatch(RpcCall::DeleteAd { ad_id: 0, user_id: 3 })
        .expect("fixture delete succeeds");
    assert_eq!(data, Value::Null);

    let data = session
        .dispatch(RpcCall::DeleteUser { user_id: 3 })
        .expect("fixture delete succeeds");
    assert_eq!(data, Value::Null);
}

#[test]
fn listing_translates_the_any_author_sentinel() {
    let mut ads_query = MockAdsQuery::new();
    ads_query
        .expect_list_ads()
        .withf(|filter| filter.published && filter.author.is_none())
        .times(1)
        .returning(|_| Vec::new());
    let state = WsState {
        ads_query: Arc::new(ads_query),
        ..fixture_state()
    };
    let session = RpcSession::new(state);

    let data = session
        .dispatch(RpcCall::ListAds {
            published: true,
            user_id: Some(-1),
            created_at: None,
        })
        .expect("listing succeeds");
    assert_eq!(data, json!([]));
}

#[test]
fn failures_carry_the_shared_error_codes() {
    let mut ads_query = MockAdsQuery::new();
    ads_query
        .expect_ad()
        .returning(|ad_id| Err(BoardError::no_such_ad(ad_id)));
    let mut users_query = MockUsersQuery::new();
    users_query
        .expect_user()
        .returning(|user_id| Err(BoardError::no_such_user(user_id)));
    let state = WsState {
        ads_query: Arc::new(ads_query),
        users_query: Arc::new(users_query),
        ..fixture_state()
    };
    let session = RpcSession::new(state);

    let error = session
        .dispatch(RpcCall::GetAd { ad_id: 9 })
        .expect_err("missing ad");
    let body = RpcErrorBody::from_domain(&error);
    assert_eq!(body.code, crate::domain::ErrorCode::NoSuchAd);
    assert_eq!(body.message, "no ad with id 9");

    let error = session
        .dispatch(RpcCall::GetUser { user_id: 9 })
        .expect_err("missing user");
    let body = RpcErrorBody::from_domain(&error);
    assert_eq!(body.code, crate::domain::ErrorCode::NoSuchUser);
}

#[test]
fn internal_failures_are_masked_in_error_bodies() {
    let body = RpcErrorBody::from_domain(&BoardError::internal("store exploded"));
    assert_eq!(body.code, crate::domain::ErrorCode::Unknown);
    assert_eq!(body.message, "unknown error");
}

#[test]
fn reply_frames_serialise_in_camel_case() {
    let ok = RpcOk {
        request_id: Uuid::from_u128(7),
        data: json!({ "id": 0 }),
    };
    let value = serde_json::to_value(&ok).expect("serialisable");
    assert_eq!(
        value.get("requestId").and_then(Value::as_str),
        Some("00000000-0000-0000-0000-000000000007"),
    );
    assert!(value.get("data").is_some());

    let failure = RpcFailure {
        request_id: Uuid::from_u128(7),
        error: RpcErrorBody::from_domain(&BoardError::no_such_ad(crate::domain::AdId::new(1))),
    };
    let value = serde_json::to_value(&failure).expect("serialisable");
    assert_eq!(
        value.pointer("/error/code").and_then(Value::as_str),
        Some("no_such_ad"),
    );
}
