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

//! Exercises the disks collection against a local HTTP server.

use gce_compute_v1::client::Client;
use gce_compute_v1::model;
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
async fn get_uses_method_path_and_decodes() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/zones/z/disks/d"),
            request::query(url_decoded(contains(("alt", "json")))),
        ])
        .respond_with(json_encoded(json!({
            "kind": "compute#disk",
            "id": "9876543210987654321",
            "name": "d",
            "sizeGb": "500",
            "status": "READY",
            "zone": "https://www.googleapis.com/compute/v1/projects/p/zones/z"
        }))),
    );

    let client = test_client(&server).await?;
    let response = client
        .disks()
        .get()
        .set_project("p")
        .set_zone("z")
        .set_disk("d")
        .send()
        .await?;
    let disk = response.body();
    assert_eq!(disk.id, Some(9876543210987654321_u64));
    assert_eq!(disk.name.as_deref(), Some("d"));
    assert_eq!(disk.size_gb, Some(500));
    assert_eq!(disk.status.as_deref(), Some("READY"));
    Ok(())
}

#[tokio::test]
async fn get_not_found_is_an_error() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/projects/p/zones/z/disks/nope"))
            .respond_with(
                status_code(404).body(
                    json!({"error": {
                        "code": 404,
                        "message": "The resource 'projects/p/zones/z/disks/nope' was not found",
                        "errors": [{"domain": "global", "reason": "notFound"}]
                    }})
                    .to_string(),
                ),
            ),
    );

    let client = test_client(&server).await?;
    let response = client
        .disks()
        .get()
        .set_project("p")
        .set_zone("z")
        .set_disk("nope")
        .send()
        .await;
    let err = response.expect_err("a 404 must not produce a disk");
    assert_eq!(err.http_status_code(), Some(404));
    let status = err.status().expect("the error body decodes into a status");
    assert_eq!(status.code, 404);
    assert_eq!(status.errors[0].reason.as_deref(), Some("notFound"));
    Ok(())
}

#[tokio::test]
async fn insert_posts_body_with_unset_fields_omitted() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/projects/p/zones/z/disks"),
            request::query(url_decoded(contains(("sourceImage", "debian-7")))),
            // Unset and empty fields must not appear in the payload.
            request::body(json_decoded(eq(json!({
                "name": "d",
                "sizeGb": "200"
            })))),
        ])
        .respond_with(json_encoded(json!({
            "kind": "compute#operation",
            "name": "operation-12345",
            "operationType": "insert",
            "status": "PENDING",
            "targetId": "123456789012345678"
        }))),
    );

    let client = test_client(&server).await?;
    let response = client
        .disks()
        .insert()
        .set_project("p")
        .set_zone("z")
        .set_source_image("debian-7")
        .set_body(model::Disk::new().set_name("d").set_size_gb(200))
        .send()
        .await?;
    let operation = response.body();
    assert_eq!(operation.name.as_deref(), Some("operation-12345"));
    assert_eq!(operation.status.as_deref(), Some("PENDING"));
    assert_eq!(operation.target_id, Some(123456789012345678_u64));
    Ok(())
}

#[tokio::test]
async fn list_sends_query_parameters_iff_set() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/zones/z/disks"),
            request::query(url_decoded(contains(("filter", "name eq d")))),
            request::query(url_decoded(contains(("maxResults", "25")))),
        ])
        .respond_with(json_encoded(json!({"kind": "compute#diskList", "items": []}))),
    );

    let client = test_client(&server).await?;
    client
        .disks()
        .list()
        .set_project("p")
        .set_zone("z")
        .set_filter("name eq d")
        .set_max_results(25)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn list_omits_unset_query_parameters() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/projects/p/zones/z/disks"),
            request::query(url_decoded(not(contains(key("filter"))))),
            request::query(url_decoded(not(contains(key("maxResults"))))),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(json!({"kind": "compute#diskList"}))),
    );

    let client = test_client(&server).await?;
    client
        .disks()
        .list()
        .set_project("p")
        .set_zone("z")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn aggregated_list_decodes_scoped_map() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/projects/p/aggregated/disks"))
            .respond_with(json_encoded(json!({
                "kind": "compute#diskAggregatedList",
                "items": {
                    "zones/us-central1-a": {
                        "disks": [{"name": "d1", "sizeGb": "10"}]
                    },
                    "zones/us-central1-b": {
                        "warning": {
                            "code": "NO_RESULTS_ON_PAGE",
                            "message": "There are no results for scope 'zones/us-central1-b'."
                        }
                    }
                }
            }))),
    );

    let client = test_client(&server).await?;
    let response = client
        .disks()
        .aggregated_list()
        .set_project("p")
        .send()
        .await?;
    let aggregated = response.body();
    let with_disks = &aggregated.items["zones/us-central1-a"];
    assert_eq!(with_disks.disks[0].name.as_deref(), Some("d1"));
    assert_eq!(with_disks.disks[0].size_gb, Some(10));
    let empty_scope = &aggregated.items["zones/us-central1-b"];
    assert!(empty_scope.disks.is_empty());
    assert_eq!(
        empty_scope.warning.as_ref().unwrap().code.as_deref(),
        Some("NO_RESULTS_ON_PAGE")
    );
    Ok(())
}

#[tokio::test]
async fn missing_path_parameter_fails_before_any_io() -> Result<()> {
    // No server: a missing parameter must not produce a request at all.
    let client = Client::builder()
        .with_endpoint("http://127.0.0.1:1")
        .build()
        .await?;
    let response = client.disks().get().set_project("p").set_zone("z").send().await;
    let err = response.expect_err("an unset disk name must fail locally");
    assert!(err.is_binding(), "{err:?}");
    assert!(err.to_string().contains("disk"), "{err}");
    Ok(())
}

#[tokio::test]
async fn missing_body_fails_before_any_io() -> Result<()> {
    let client = Client::builder()
        .with_endpoint("http://127.0.0.1:1")
        .build()
        .await?;
    let response = client
        .disks()
        .insert()
        .set_project("p")
        .set_zone("z")
        .send()
        .await;
    let err = response.expect_err("an unset body must fail locally");
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn path_parameters_are_percent_encoded() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/projects/p/zones/z/disks/a%20disk",
        ))
        .respond_with(json_encoded(json!({"name": "a disk"}))),
    );

    let client = test_client(&server).await?;
    client
        .disks()
        .get()
        .set_project("p")
        .set_zone("z")
        .set_disk("a disk")
        .send()
        .await?;
    Ok(())
}
