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

//! Exercises the instances collection against a local HTTP server.

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
async fn insert_posts_nested_resource() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/projects/p/zones/us-central1-a/instances"),
            request::body(json_decoded(eq(json!({
                "name": "vm-1",
                "machineType": "zones/us-central1-a/machineTypes/n1-standard-1",
                "disks": [{
                    "boot": true,
                    "initializeParams": {"sourceImage": "projects/debian-cloud/global/images/family/debian-7"}
                }],
                "networkInterfaces": [{"network": "global/networks/default"}]
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "operation-67890",
            "operationType": "insert",
            "status": "RUNNING"
        }))),
    );

    let client = test_client(&server).await?;
    let instance = model::Instance::new()
        .set_name("vm-1")
        .set_machine_type("zones/us-central1-a/machineTypes/n1-standard-1")
        .set_disks([model::AttachedDisk::new().set_boot(true).set_initialize_params(
            model::AttachedDiskInitializeParams::new()
                .set_source_image("projects/debian-cloud/global/images/family/debian-7"),
        )])
        .set_network_interfaces([
            model::NetworkInterface::new().set_network("global/networks/default")
        ]);
    let response = client
        .instances()
        .insert()
        .set_project("p")
        .set_zone("us-central1-a")
        .set_body(instance)
        .send()
        .await?;
    assert_eq!(response.body().status.as_deref(), Some("RUNNING"));
    Ok(())
}

#[tokio::test]
async fn attach_disk_posts_to_custom_verb() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/projects/p/zones/z/instances/vm-1/attachDisk"),
            request::body(json_decoded(eq(json!({
                "deviceName": "data",
                "source": "zones/z/disks/data-disk"
            })))),
        ])
        .respond_with(json_encoded(json!({"name": "operation-1", "status": "PENDING"}))),
    );

    let client = test_client(&server).await?;
    client
        .instances()
        .attach_disk()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .set_body(
            model::AttachedDisk::new()
                .set_device_name("data")
                .set_source("zones/z/disks/data-disk"),
        )
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn detach_disk_requires_device_name() -> Result<()> {
    // The required query parameter must be rejected locally when unset.
    let client = Client::builder()
        .with_endpoint("http://127.0.0.1:1")
        .build()
        .await?;
    let response = client
        .instances()
        .detach_disk()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .send()
        .await;
    let err = response.expect_err("an unset deviceName must fail locally");
    assert!(err.is_binding(), "{err:?}");
    assert!(err.to_string().contains("deviceName"), "{err}");
    Ok(())
}

#[tokio::test]
async fn detach_disk_sends_device_name() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/projects/p/zones/z/instances/vm-1/detachDisk"),
            request::query(url_decoded(contains(("deviceName", "data")))),
        ])
        .respond_with(json_encoded(json!({"name": "operation-2"}))),
    );

    let client = test_client(&server).await?;
    client
        .instances()
        .detach_disk()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .set_device_name("data")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn set_tags_posts_fingerprinted_tags() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/projects/p/zones/z/instances/vm-1/setTags"),
            request::body(json_decoded(eq(json!({
                "fingerprint": "42WmSpB8rSM=",
                "items": ["http-server", "https-server"]
            })))),
        ])
        .respond_with(json_encoded(json!({"name": "operation-3"}))),
    );

    let client = test_client(&server).await?;
    client
        .instances()
        .set_tags()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .set_body(
            model::Tags::new()
                .set_fingerprint("42WmSpB8rSM=")
                .set_items(["http-server", "https-server"]),
        )
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn get_serial_port_output() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/projects/p/zones/z/instances/vm-1/serialPort",
        ))
        .respond_with(json_encoded(json!({
            "kind": "compute#serialPortOutput",
            "contents": "[    0.000000] Linux version ..."
        }))),
    );

    let client = test_client(&server).await?;
    let response = client
        .instances()
        .get_serial_port_output()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .send()
        .await?;
    assert!(
        response
            .body()
            .contents
            .as_deref()
            .unwrap()
            .contains("Linux version")
    );
    Ok(())
}

#[tokio::test]
async fn stop_posts_without_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            "/projects/p/zones/z/instances/vm-1/stop",
        ))
        .respond_with(json_encoded(json!({"name": "operation-4", "status": "RUNNING"}))),
    );

    let client = test_client(&server).await?;
    client
        .instances()
        .stop()
        .set_project("p")
        .set_zone("z")
        .set_instance("vm-1")
        .send()
        .await?;
    Ok(())
}
