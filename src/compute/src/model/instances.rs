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

use super::{AttachedDisk, Metadata, Tags};
use gax::int64::U64;
use gax::paginator::PageableResponse;
use std::collections::HashMap;

/// A virtual machine instance.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Instance {
    /// Whether the instance is allowed to send and receive packets with
    /// non-matching source or destination IPs.
    pub can_ip_forward: Option<bool>,

    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    /// The disks attached to the instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<AttachedDisk>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    /// URL of the machine type resource describing which machine type to
    /// use, e.g. `zones/us-central1-a/machineTypes/n1-standard-1`.
    pub machine_type: Option<String>,

    /// Metadata key/value pairs assigned to this instance, consumable from
    /// within the instance.
    pub metadata: Option<Metadata>,

    pub name: Option<String>,

    /// The network interfaces of the instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,

    pub scheduling: Option<Scheduling>,

    pub self_link: Option<String>,

    /// Service accounts, with their specified scopes, authorized for this
    /// instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_accounts: Vec<ServiceAccount>,

    /// The status of the instance: `PROVISIONING`, `STAGING`, `RUNNING`,
    /// `STOPPING`, `STOPPED` or `TERMINATED`.
    pub status: Option<String>,

    /// A human-readable explanation of the status.
    pub status_message: Option<String>,

    /// Tags used to identify valid sources or targets for network firewalls.
    pub tags: Option<Tags>,

    /// URL of the zone where the instance resides.
    pub zone: Option<String>,
}

impl Instance {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_can_ip_forward(mut self, v: bool) -> Self {
        self.can_ip_forward = Some(v);
        self
    }

    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttachedDisk>,
    {
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_id(mut self, v: u64) -> Self {
        self.id = Some(v);
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    pub fn set_metadata<T: Into<Metadata>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_network_interfaces<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NetworkInterface>,
    {
        self.network_interfaces = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_scheduling<T: Into<Scheduling>>(mut self, v: T) -> Self {
        self.scheduling = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ServiceAccount>,
    {
        self.service_accounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = Some(v.into());
        self
    }

    pub fn set_tags<T: Into<Tags>>(mut self, v: T) -> Self {
        self.tags = Some(v.into());
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }
}

/// A network interface of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkInterface {
    /// Configurations for externally reachable access. Currently only one
    /// access config of type `ONE_TO_ONE_NAT` is supported per instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_configs: Vec<AccessConfig>,

    /// The name of the interface, generated by the server. Output only.
    pub name: Option<String>,

    /// URL of the network this interface applies to.
    pub network: Option<String>,

    /// The internal IP address assigned to the instance. Output only.
    #[serde(rename = "networkIP")]
    pub network_ip: Option<String>,
}

impl NetworkInterface {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_access_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AccessConfig>,
    {
        self.access_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    pub fn set_network_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.network_ip = Some(v.into());
        self
    }
}

/// An access configuration attached to a network interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AccessConfig {
    pub kind: Option<String>,

    /// Name of this access configuration.
    pub name: Option<String>,

    /// The external IP associated with the instance; if unset on creation an
    /// ephemeral IP is assigned.
    #[serde(rename = "natIP")]
    pub nat_ip: Option<String>,

    /// The type of configuration, currently only `ONE_TO_ONE_NAT`.
    pub r#type: Option<String>,
}

impl AccessConfig {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_nat_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.nat_ip = Some(v.into());
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Scheduling options for an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Scheduling {
    /// Whether the instance is automatically restarted when it is terminated
    /// by Compute Engine (not terminated by a user).
    pub automatic_restart: Option<bool>,

    /// How the instance behaves when the host machine undergoes maintenance:
    /// `MIGRATE` or `TERMINATE`.
    pub on_host_maintenance: Option<String>,
}

impl Scheduling {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_automatic_restart(mut self, v: bool) -> Self {
        self.automatic_restart = Some(v);
        self
    }

    pub fn set_on_host_maintenance<T: Into<String>>(mut self, v: T) -> Self {
        self.on_host_maintenance = Some(v.into());
        self
    }
}

/// A service account authorized for an instance, with its scopes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceAccount {
    /// Email address of the service account.
    pub email: Option<String>,

    /// The list of scopes to be made available to the instance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

impl ServiceAccount {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    pub fn set_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The contents of an instance's serial port.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SerialPortOutput {
    /// The contents of the console output.
    pub contents: Option<String>,

    pub kind: Option<String>,

    pub self_link: Option<String>,
}

impl SerialPortOutput {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_contents<T: Into<String>>(mut self, v: T) -> Self {
        self.contents = Some(v.into());
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }
}

/// A reference to an instance, used in target pool mutation requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceReference {
    /// URL of the instance.
    pub instance: Option<String>,
}

impl InstanceReference {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = Some(v.into());
        self
    }
}

/// A page of instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Instance>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl InstanceList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Instance>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }
}

impl PageableResponse for InstanceList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Instances grouped by the zone they reside in.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceAggregatedList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub items: HashMap<String, InstancesScopedList>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl InstanceAggregatedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<InstancesScopedList>,
    {
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }
}

impl PageableResponse for InstanceAggregatedList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The instances of one scope in an aggregated listing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancesScopedList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<Instance>,

    pub warning: Option<super::Warning>,
}

impl InstancesScopedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Instance>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_warning<T: Into<super::Warning>>(mut self, v: T) -> Self {
        self.warning = Some(v.into());
        self
    }
}
