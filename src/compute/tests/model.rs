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

//! Wire-format tests for the resource messages.

use gce_compute_v1::model;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn unset_fields_are_omitted_from_request_bodies() -> Result<()> {
    let instance = model::Instance::new()
        .set_name("vm-1")
        .set_machine_type("zones/z/machineTypes/n1-standard-1");
    let got = serde_json::to_value(&instance)?;
    assert_eq!(
        got,
        json!({
            "name": "vm-1",
            "machineType": "zones/z/machineTypes/n1-standard-1"
        })
    );
    Ok(())
}

#[test]
fn empty_collections_are_omitted() -> Result<()> {
    let firewall = model::Firewall::new().set_name("allow-ssh");
    let got = serde_json::to_value(&firewall)?;
    assert_eq!(got, json!({"name": "allow-ssh"}));
    Ok(())
}

#[test]
fn sixty_four_bit_ids_decode_from_strings() -> Result<()> {
    let payload = json!({
        "id": "18446744073709551615",
        "name": "d",
        "sizeGb": "500"
    });
    let disk = serde_json::from_value::<model::Disk>(payload)?;
    assert_eq!(disk.id, Some(u64::MAX));
    assert_eq!(disk.size_gb, Some(500));
    Ok(())
}

#[test]
fn sixty_four_bit_ids_encode_as_strings() -> Result<()> {
    let disk = model::Disk::new().set_id(u64::MAX).set_size_gb(500);
    let got = serde_json::to_value(&disk)?;
    assert_eq!(
        got,
        json!({"id": "18446744073709551615", "sizeGb": "500"})
    );
    Ok(())
}

#[test]
fn irregular_wire_names_round_trip() -> Result<()> {
    let firewall = model::Firewall::new().set_allowed([model::firewall::Allowed::new()
        .set_ip_protocol("tcp")
        .set_ports(["22"])]);
    let got = serde_json::to_value(&firewall)?;
    assert_eq!(
        got,
        json!({"allowed": [{"IPProtocol": "tcp", "ports": ["22"]}]})
    );

    let network = model::Network::new()
        .set_ipv4_range("10.0.0.0/8")
        .set_gateway_ipv4("10.0.0.1");
    let got = serde_json::to_value(&network)?;
    assert_eq!(
        got,
        json!({"IPv4Range": "10.0.0.0/8", "gatewayIPv4": "10.0.0.1"})
    );

    let config = model::AccessConfig::new()
        .set_type("ONE_TO_ONE_NAT")
        .set_nat_ip("8.8.8.8");
    let got = serde_json::to_value(&config)?;
    assert_eq!(got, json!({"type": "ONE_TO_ONE_NAT", "natIP": "8.8.8.8"}));

    let interface = model::NetworkInterface::new().set_network_ip("10.240.0.2");
    let got = serde_json::to_value(&interface)?;
    assert_eq!(got, json!({"networkIP": "10.240.0.2"}));
    Ok(())
}

#[test]
fn operation_decodes_including_error_details() -> Result<()> {
    let payload = json!({
        "kind": "compute#operation",
        "id": "8741097437397382421",
        "name": "operation-1410",
        "operationType": "insert",
        "status": "DONE",
        "progress": 100,
        "httpErrorStatusCode": 409,
        "httpErrorMessage": "CONFLICT",
        "error": {
            "errors": [{
                "code": "RESOURCE_ALREADY_EXISTS",
                "message": "The resource 'vm-1' already exists"
            }]
        }
    });
    let operation = serde_json::from_value::<model::Operation>(payload)?;
    assert_eq!(operation.id, Some(8741097437397382421_u64));
    assert_eq!(operation.progress, Some(100));

    let err = operation.to_result().expect_err("the operation failed");
    assert_eq!(err.status_code, Some(409));
    assert_eq!(err.message.as_deref(), Some("CONFLICT"));
    let details = err.details.unwrap();
    assert_eq!(
        details.errors[0].code.as_deref(),
        Some("RESOURCE_ALREADY_EXISTS")
    );
    Ok(())
}

#[test]
fn unknown_fields_are_ignored() -> Result<()> {
    // Older clients must tolerate fields added by the service.
    let payload = json!({
        "name": "zone-1",
        "status": "UP",
        "availableCpuPlatforms": ["Intel Skylake"]
    });
    let zone = serde_json::from_value::<model::Zone>(payload)?;
    assert_eq!(zone.name.as_deref(), Some("zone-1"));
    assert_eq!(zone.status.as_deref(), Some("UP"));
    Ok(())
}

#[test]
fn metadata_round_trips() -> Result<()> {
    let metadata = model::Metadata::new()
        .set_fingerprint("fp-1")
        .set_items([model::metadata::Items::new()
            .set_key("startup-script")
            .set_value("#! /bin/bash\necho done")]);
    let encoded = serde_json::to_value(&metadata)?;
    assert_eq!(
        encoded,
        json!({
            "fingerprint": "fp-1",
            "items": [{"key": "startup-script", "value": "#! /bin/bash\necho done"}]
        })
    );
    let decoded = serde_json::from_value::<model::Metadata>(encoded)?;
    assert_eq!(decoded, metadata);
    Ok(())
}
