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

use super::InstanceReference;
use gax::int64::U64;
use gax::paginator::PageableResponse;

/// A pool of instances receiving forwarded traffic.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPool {
    /// URL of a backup target pool receiving traffic when the healthy ratio
    /// of this pool falls below `failover_ratio`.
    pub backup_pool: Option<String>,

    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    /// The ratio of healthy instances below which traffic fails over to the
    /// backup pool, between 0 and 1.
    pub failover_ratio: Option<f64>,

    /// URLs of the health checks used to decide instance health.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_checks: Vec<String>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    /// URLs of the instances serving this pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<String>,

    pub kind: Option<String>,

    pub name: Option<String>,

    /// URL of the region where the target pool resides.
    pub region: Option<String>,

    pub self_link: Option<String>,

    /// The session affinity option: `NONE`, `CLIENT_IP` or
    /// `CLIENT_IP_PROTO`.
    pub session_affinity: Option<String>,
}

impl TargetPool {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_backup_pool<T: Into<String>>(mut self, v: T) -> Self {
        self.backup_pool = Some(v.into());
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

    pub fn set_failover_ratio(mut self, v: f64) -> Self {
        self.failover_ratio = Some(v);
        self
    }

    pub fn set_health_checks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.health_checks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_id(mut self, v: u64) -> Self {
        self.id = Some(v);
        self
    }

    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_session_affinity<T: Into<String>>(mut self, v: T) -> Self {
        self.session_affinity = Some(v.into());
        self
    }
}

/// A page of target pools.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TargetPool>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl TargetPoolList {
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
        V: Into<TargetPool>,
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

impl PageableResponse for TargetPoolList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request body of [TargetPools::add_instance][crate::client::TargetPools::add_instance].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolsAddInstanceRequest {
    /// The instances to add to the pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<InstanceReference>,
}

impl TargetPoolsAddInstanceRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InstanceReference>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request body of [TargetPools::remove_instance][crate::client::TargetPools::remove_instance].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolsRemoveInstanceRequest {
    /// The instances to remove from the pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<InstanceReference>,
}

impl TargetPoolsRemoveInstanceRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InstanceReference>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
