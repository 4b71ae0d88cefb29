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

use gax::int64::{I64, U64};
use gax::paginator::PageableResponse;
use std::collections::HashMap;

/// A machine type determining the virtualized hardware of an instance.
///
/// Machine types are curated by the service; the client only reads them.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineType {
    pub creation_timestamp: Option<String>,

    /// The deprecation status associated with this machine type.
    pub deprecated: Option<super::DeprecationStatus>,

    pub description: Option<String>,

    /// The number of virtual CPUs.
    pub guest_cpus: Option<i32>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub image_space_gb: Option<i32>,

    pub kind: Option<String>,

    /// Maximum number of persistent disks allowed.
    pub maximum_persistent_disks: Option<i32>,

    /// Maximum total persistent disk size allowed, in GB.
    #[serde_as(as = "Option<I64>")]
    pub maximum_persistent_disks_size_gb: Option<i64>,

    /// The amount of physical memory available, in MB.
    pub memory_mb: Option<i32>,

    pub name: Option<String>,

    /// The extended scratch disks available to the machine type.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scratch_disks: Vec<machine_type::ScratchDisks>,

    pub self_link: Option<String>,

    /// URL of the zone where the machine type resides.
    pub zone: Option<String>,
}

impl MachineType {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    pub fn set_deprecated<T: Into<super::DeprecationStatus>>(mut self, v: T) -> Self {
        self.deprecated = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_guest_cpus(mut self, v: i32) -> Self {
        self.guest_cpus = Some(v);
        self
    }

    pub fn set_id(mut self, v: u64) -> Self {
        self.id = Some(v);
        self
    }

    pub fn set_image_space_gb(mut self, v: i32) -> Self {
        self.image_space_gb = Some(v);
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_maximum_persistent_disks(mut self, v: i32) -> Self {
        self.maximum_persistent_disks = Some(v);
        self
    }

    pub fn set_maximum_persistent_disks_size_gb(mut self, v: i64) -> Self {
        self.maximum_persistent_disks_size_gb = Some(v);
        self
    }

    pub fn set_memory_mb(mut self, v: i32) -> Self {
        self.memory_mb = Some(v);
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_scratch_disks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<machine_type::ScratchDisks>,
    {
        self.scratch_disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }
}

/// Defines additional types related to [MachineType].
pub mod machine_type {
    /// One ephemeral scratch disk of a machine type.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ScratchDisks {
        /// Size of the scratch disk, in GB.
        pub disk_gb: Option<i32>,
    }

    impl ScratchDisks {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_disk_gb(mut self, v: i32) -> Self {
            self.disk_gb = Some(v);
            self
        }
    }
}

/// A page of machine types.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypeList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MachineType>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl MachineTypeList {
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
        V: Into<MachineType>,
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

impl PageableResponse for MachineTypeList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Machine types grouped by the zone they are offered in.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypeAggregatedList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub items: HashMap<String, MachineTypesScopedList>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl MachineTypeAggregatedList {
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
        V: Into<MachineTypesScopedList>,
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

impl PageableResponse for MachineTypeAggregatedList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The machine types of one scope in an aggregated listing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypesScopedList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub machine_types: Vec<MachineType>,

    pub warning: Option<super::Warning>,
}

impl MachineTypesScopedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_machine_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<MachineType>,
    {
        self.machine_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_warning<T: Into<super::Warning>>(mut self, v: T) -> Self {
        self.warning = Some(v.into());
        self
    }
}
