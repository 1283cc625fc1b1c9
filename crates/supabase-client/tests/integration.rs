//! End-to-end tests through the `supabase_client` facade.
//!
//! A `wiremock` server plays both GoTrue and PostgREST: the client signs in,
//! adopts the returned token, and reads rows under that identity.

use serde_json::json;
use supabase_client::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sign_in_then_read_rows_as_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Food"))
        .and(query_param("restaurant", "eq.Ramen Bar"))
        .and(header("apikey", "anon"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":1}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = SupabaseClient::new(server.uri(), "anon", "").unwrap();
    let tokens = client.auth().sign_in("a@b.c", "pass").await.unwrap();
    client.set_token(tokens.access_token);

    let body = client
        .get("Food", Filters::from([("restaurant", "Ramen Bar")]))
        .await
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows, json!([{"id": 1}]));
}

#[tokio::test]
async fn custom_request_through_shared_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/Food"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = SupabaseClient::new(server.uri(), "anon", "").unwrap();
    let request = ApiRequest::rest(Method::HEAD, "Food").filters(&Filters::by_key("id", "3"));
    let body = client.execute(request).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn failures_surface_as_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/Food"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"code":"42501","message":"new row violates row-level security policy"}"#,
        ))
        .mount(&server)
        .await;

    let client = SupabaseClient::new(server.uri(), "anon", "someone-else").unwrap();
    match client.post("Food", b"{}".to_vec()).await {
        Err(SupabaseError::RequestFailed { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("row-level security"));
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
}
