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

/// A persistent disk resource.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Disk {
    /// Creation timestamp in RFC3339 text format. Output only.
    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    /// Unique identifier for the resource, defined by the server.
    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    pub last_attach_timestamp: Option<String>,

    pub last_detach_timestamp: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    /// Name of the resource; provided by the client when the resource is
    /// created.
    pub name: Option<String>,

    pub options: Option<String>,

    pub self_link: Option<String>,

    /// Size of the persistent disk, in GB.
    #[serde_as(as = "Option<I64>")]
    pub size_gb: Option<i64>,

    /// The source image used to create this disk.
    pub source_image: Option<String>,

    /// The ID value of the image used to create this disk.
    pub source_image_id: Option<String>,

    pub source_snapshot: Option<String>,

    pub source_snapshot_id: Option<String>,

    /// The status of disk creation: `CREATING`, `FAILED`, `READY` or
    /// `RESTORING`.
    pub status: Option<String>,

    /// URL of the disk type resource describing which disk type to use.
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,

    /// URL of the zone where the disk resides.
    pub zone: Option<String>,
}

impl Disk {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
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

    pub fn set_last_attach_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.last_attach_timestamp = Some(v.into());
        self
    }

    pub fn set_last_detach_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.last_detach_timestamp = Some(v.into());
        self
    }

    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_options<T: Into<String>>(mut self, v: T) -> Self {
        self.options = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_size_gb(mut self, v: i64) -> Self {
        self.size_gb = Some(v);
        self
    }

    pub fn set_source_image<T: Into<String>>(mut self, v: T) -> Self {
        self.source_image = Some(v.into());
        self
    }

    pub fn set_source_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_image_id = Some(v.into());
        self
    }

    pub fn set_source_snapshot<T: Into<String>>(mut self, v: T) -> Self {
        self.source_snapshot = Some(v.into());
        self
    }

    pub fn set_source_snapshot_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_snapshot_id = Some(v.into());
        self
    }

    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    pub fn set_users<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.users = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }
}

/// A page of disks.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiskList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Disk>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl DiskList {
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
        V: Into<Disk>,
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

impl PageableResponse for DiskList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Disks grouped by the zone they reside in.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiskAggregatedList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub items: HashMap<String, DisksScopedList>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl DiskAggregatedList {
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
        V: Into<DisksScopedList>,
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

impl PageableResponse for DiskAggregatedList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The disks of one scope in an aggregated listing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisksScopedList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<Disk>,

    pub warning: Option<super::Warning>,
}

impl DisksScopedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Disk>,
    {
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_warning<T: Into<super::Warning>>(mut self, v: T) -> Self {
        self.warning = Some(v.into());
        self
    }
}

/// A disk attached (or to be attached) to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDisk {
    /// Whether the disk is deleted when the instance is deleted.
    pub auto_delete: Option<bool>,

    /// Whether this is a boot disk.
    pub boot: Option<bool>,

    /// The name under which the disk appears in `/dev/disk/by-id/` inside
    /// the instance.
    pub device_name: Option<String>,

    /// A zero-based index to assign to this disk. Output only.
    pub index: Option<i32>,

    /// Parameters for a new disk created alongside the instance. Mutually
    /// exclusive with `source`.
    pub initialize_params: Option<AttachedDiskInitializeParams>,

    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    /// The mode of attachment: `READ_WRITE` or `READ_ONLY`.
    pub mode: Option<String>,

    /// URL of the persistent disk to attach.
    pub source: Option<String>,

    /// The disk type: `SCRATCH` or `PERSISTENT`.
    pub r#type: Option<String>,
}

impl AttachedDisk {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_auto_delete(mut self, v: bool) -> Self {
        self.auto_delete = Some(v);
        self
    }

    pub fn set_boot(mut self, v: bool) -> Self {
        self.boot = Some(v);
        self
    }

    pub fn set_device_name<T: Into<String>>(mut self, v: T) -> Self {
        self.device_name = Some(v.into());
        self
    }

    pub fn set_index(mut self, v: i32) -> Self {
        self.index = Some(v);
        self
    }

    pub fn set_initialize_params<T: Into<AttachedDiskInitializeParams>>(mut self, v: T) -> Self {
        self.initialize_params = Some(v.into());
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.mode = Some(v.into());
        self
    }

    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Parameters for a new disk created alongside an instance.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDiskInitializeParams {
    /// Name of the new disk.
    pub disk_name: Option<String>,

    /// Size of the new disk, in GB.
    #[serde_as(as = "Option<I64>")]
    pub disk_size_gb: Option<i64>,

    /// URL of the disk type describing which disk type to use.
    pub disk_type: Option<String>,

    /// The source image used to create the disk.
    pub source_image: Option<String>,
}

impl AttachedDiskInitializeParams {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_disk_name<T: Into<String>>(mut self, v: T) -> Self {
        self.disk_name = Some(v.into());
        self
    }

    pub fn set_disk_size_gb(mut self, v: i64) -> Self {
        self.disk_size_gb = Some(v);
        self
    }

    pub fn set_disk_type<T: Into<String>>(mut self, v: T) -> Self {
        self.disk_type = Some(v.into());
        self
    }

    pub fn set_source_image<T: Into<String>>(mut self, v: T) -> Self {
        self.source_image = Some(v.into());
        self
    }
}
