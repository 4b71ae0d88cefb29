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

/// A snapshot of a persistent disk.
///
/// Snapshots are created through [Disks::create_snapshot][crate::client::Disks::create_snapshot];
/// this collection only reads and deletes them.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Snapshot {
    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    /// Size of the source disk, in GB.
    #[serde_as(as = "Option<I64>")]
    pub disk_size_gb: Option<i64>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    pub name: Option<String>,

    pub self_link: Option<String>,

    /// URL of the source disk used to create this snapshot.
    pub source_disk: Option<String>,

    /// The ID value of the disk used to create this snapshot.
    pub source_disk_id: Option<String>,

    /// The status of the snapshot: `CREATING`, `UPLOADING`, `READY`,
    /// `FAILED` or `DELETING`.
    pub status: Option<String>,

    /// A size of the storage used by the snapshot.
    #[serde_as(as = "Option<I64>")]
    pub storage_bytes: Option<i64>,

    /// Whether `storage_bytes` is in a stable state or is being adjusted as
    /// a result of shared storage reallocation: `UPDATING` or `UP_TO_DATE`.
    pub storage_bytes_status: Option<String>,
}

impl Snapshot {
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

    pub fn set_disk_size_gb(mut self, v: i64) -> Self {
        self.disk_size_gb = Some(v);
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

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_source_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.source_disk = Some(v.into());
        self
    }

    pub fn set_source_disk_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_disk_id = Some(v.into());
        self
    }

    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_storage_bytes(mut self, v: i64) -> Self {
        self.storage_bytes = Some(v);
        self
    }

    pub fn set_storage_bytes_status<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_bytes_status = Some(v.into());
        self
    }
}

/// A page of snapshots.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SnapshotList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Snapshot>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl SnapshotList {
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
        V: Into<Snapshot>,
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

impl PageableResponse for SnapshotList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
