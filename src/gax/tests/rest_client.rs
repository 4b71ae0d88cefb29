// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Exercises the REST transport against a local HTTP server.

use gce_gax::client_builder::internal::ClientConfig;
use gce_gax::credentials::{Credentials, static_token};
use gce_gax::http_client::{NoBody, RestClient};
use gce_gax::options::RequestOptions;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::{Value, json};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn test_config(server: &Server, cred: Option<Credentials>) -> ClientConfig<Credentials> {
    ClientConfig {
        endpoint: Some(format!("http://{}", server.addr())),
        cred,
        tracing: false,
    }
}

#[tokio::test]
async fn get_includes_alt_json() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/test/path"),
            request::query(url_decoded(contains(("alt", "json")))),
        ])
        .respond_with(json_encoded(json!({"name": "test-name"}))),
    );

    let client = RestClient::new(test_config(&server, None), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/path".into());
    let response = client
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await?;
    assert_eq!(response.body(), &json!({"name": "test-name"}));
    Ok(())
}

#[tokio::test]
async fn auth_headers_attached() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/test/auth"),
            request::headers(contains(("authorization", "Bearer test-token"))),
        ])
        .respond_with(json_encoded(json!({}))),
    );

    let cred = static_token::Builder::new("test-token").build();
    let client =
        RestClient::new(test_config(&server, Some(cred)), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/auth".into());
    client
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await?;
    Ok(())
}

#[tokio::test]
async fn user_agent_prefix() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/test/agent"),
            request::headers(contains(("user-agent", "test-app/1.0"))),
        ])
        .respond_with(json_encoded(json!({}))),
    );

    let client = RestClient::new(test_config(&server, None), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/agent".into());
    let mut options = RequestOptions::default();
    options.set_user_agent("test-app/1.0");
    client
        .execute::<NoBody, Value>(builder, None, options)
        .await?;
    Ok(())
}

#[tokio::test]
async fn request_body_serialized() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/test/body"),
            request::body(json_decoded(eq(json!({"name": "new-resource"})))),
        ])
        .respond_with(json_encoded(json!({"done": true}))),
    );

    let client = RestClient::new(test_config(&server, None), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::POST, "/test/body".into());
    let body = json!({"name": "new-resource"});
    let response = client
        .execute::<Value, Value>(builder, Some(body), RequestOptions::default())
        .await?;
    assert_eq!(response.body(), &json!({"done": true}));
    Ok(())
}

#[tokio::test]
async fn error_with_service_status() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/test/missing")).respond_with(
            status_code(404).body(
                json!({"error": {
                    "code": 404,
                    "message": "not found",
                    "errors": [{"domain": "global", "reason": "notFound"}]
                }})
                .to_string(),
            ),
        ),
    );

    let client = RestClient::new(test_config(&server, None), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/missing".into());
    let response = client
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await;
    let err = response.expect_err("a 404 must not produce a body");
    assert_eq!(err.http_status_code(), Some(404));
    let status = err.status().expect("the body carries a structured error");
    assert_eq!(status.code, 404);
    assert_eq!(status.message, "not found");
    assert_eq!(status.errors[0].reason.as_deref(), Some("notFound"));
    Ok(())
}

#[tokio::test]
async fn error_without_structured_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/test/oops"))
            .respond_with(status_code(503).body("upstream connect error")),
    );

    let client = RestClient::new(test_config(&server, None), "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/oops".into());
    let response = client
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await;
    let err = response.expect_err("a 503 must not produce a body");
    assert!(err.is_transport(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(503));
    assert_eq!(
        err.http_payload(),
        Some(&bytes::Bytes::from("upstream connect error"))
    );
    assert!(err.status().is_none(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn transport_error_is_io() -> Result<()> {
    // A server that is not listening produces a connection error.
    let server = Server::run();
    let endpoint = format!("http://{}", server.addr());
    drop(server);

    let config = ClientConfig {
        endpoint: Some(endpoint),
        cred: None,
        tracing: false,
    };
    let client = RestClient::new(config, "https://unused.example.com").await?;
    let builder = client.builder(reqwest::Method::GET, "/test/unreachable".into());
    let response = client
        .execute::<NoBody, Value>(builder, None, RequestOptions::default())
        .await;
    let err = response.expect_err("the connection must fail");
    assert!(err.is_transport(), "{err:?}");
    assert!(err.is_io(), "{err:?}");
    assert!(err.http_status_code().is_none(), "{err:?}");
    Ok(())
}
