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

//! Exercises the page streaming adapter against a local HTTP server.

use gce_compute_v1::client::Client;
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

async fn test_client(server: &Server) -> Result<Client> {
    let client = Client::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build()
        .await?;
    Ok(client)
}

#[tokio::test]
async fn by_page_follows_next_page_token() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/global/images"),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(json!({
            "items": [{"name": "image-1"}, {"name": "image-2"}],
            "nextPageToken": "page-2"
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/global/images"),
            request::query(url_decoded(contains(("pageToken", "page-2")))),
        ])
        .respond_with(json_encoded(json!({
            "items": [{"name": "image-3"}]
        }))),
    );

    let client = test_client(&server).await?;
    let mut pages = client.images().list().set_project("p").by_page();
    let mut names = vec![];
    while let Some(page) = pages.next().await.transpose()? {
        names.extend(page.items.into_iter().filter_map(|i| i.name));
    }
    assert_eq!(names, vec!["image-1", "image-2", "image-3"]);
    Ok(())
}

#[tokio::test]
async fn by_page_resumes_from_explicit_token() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/global/images"),
            request::query(url_decoded(contains(("pageToken", "resume-here")))),
        ])
        .respond_with(json_encoded(json!({
            "items": [{"name": "image-9"}]
        }))),
    );

    let client = test_client(&server).await?;
    let mut pages = client
        .images()
        .list()
        .set_project("p")
        .set_page_token("resume-here")
        .by_page();
    let page = pages.next().await.transpose()?.unwrap();
    assert_eq!(page.items[0].name.as_deref(), Some("image-9"));
    assert!(pages.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn by_page_stops_after_an_error() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/projects/p/global/images"))
            .respond_with(status_code(503).body("overloaded")),
    );

    let client = test_client(&server).await?;
    let mut pages = client.images().list().set_project("p").by_page();
    let first = pages.next().await.expect("the error is reported");
    let err = first.expect_err("a 503 must surface as an error");
    assert_eq!(err.http_status_code(), Some(503));
    assert!(pages.next().await.is_none(), "the stream ends after an error");
    Ok(())
}

#[tokio::test]
async fn aggregated_list_pages_the_same_way() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/aggregated/addresses"),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(json!({
            "items": {
                "regions/us-central1": {"addresses": [{"name": "addr-1"}]}
            },
            "nextPageToken": "more"
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/aggregated/addresses"),
            request::query(url_decoded(contains(("pageToken", "more")))),
        ])
        .respond_with(json_encoded(json!({
            "items": {
                "regions/europe-west1": {"addresses": [{"name": "addr-2"}]}
            }
        }))),
    );

    let client = test_client(&server).await?;
    let mut pages = client.addresses().aggregated_list().set_project("p").by_page();
    let mut names = vec![];
    while let Some(page) = pages.next().await.transpose()? {
        for scoped in page.items.into_values() {
            names.extend(scoped.addresses.into_iter().filter_map(|a| a.name));
        }
    }
    names.sort();
    assert_eq!(names, vec!["addr-1", "addr-2"]);
    Ok(())
}
