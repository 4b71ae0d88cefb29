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

/// A disk image used to create boot disks.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    /// Size of the image archive stored in Google Cloud Storage, in bytes.
    #[serde_as(as = "Option<I64>")]
    pub archive_size_bytes: Option<i64>,

    pub creation_timestamp: Option<String>,

    /// The deprecation status associated with this image.
    pub deprecated: Option<super::DeprecationStatus>,

    pub description: Option<String>,

    /// Size of the image when restored onto a persistent disk, in GB.
    #[serde_as(as = "Option<I64>")]
    pub disk_size_gb: Option<i64>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    pub name: Option<String>,

    /// Parameters of the raw disk image.
    pub raw_disk: Option<image::RawDisk>,

    pub self_link: Option<String>,

    /// URL of the source disk used to create this image.
    pub source_disk: Option<String>,

    pub source_disk_id: Option<String>,

    /// The type of the image used to create this disk, currently `RAW`.
    pub source_type: Option<String>,

    /// The status of the image: `PENDING`, `READY` or `FAILED`.
    pub status: Option<String>,
}

impl Image {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_archive_size_bytes(mut self, v: i64) -> Self {
        self.archive_size_bytes = Some(v);
        self
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

    pub fn set_raw_disk<T: Into<image::RawDisk>>(mut self, v: T) -> Self {
        self.raw_disk = Some(v.into());
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

    pub fn set_source_type<T: Into<String>>(mut self, v: T) -> Self {
        self.source_type = Some(v.into());
        self
    }

    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// Defines additional types related to [Image].
pub mod image {
    /// The parameters of the raw disk image.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct RawDisk {
        /// The format used to encode and transmit the block device, currently
        /// `TAR`.
        pub container_type: Option<String>,

        /// An optional SHA1 checksum of the disk image before unpacking.
        pub sha1_checksum: Option<String>,

        /// The full Google Cloud Storage URL where the disk image is stored.
        pub source: Option<String>,
    }

    impl RawDisk {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_container_type<T: Into<String>>(mut self, v: T) -> Self {
            self.container_type = Some(v.into());
            self
        }

        pub fn set_sha1_checksum<T: Into<String>>(mut self, v: T) -> Self {
            self.sha1_checksum = Some(v.into());
            self
        }

        pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
            self.source = Some(v.into());
            self
        }
    }
}

/// A page of images.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Image>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl ImageList {
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
        V: Into<Image>,
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

impl PageableResponse for ImageList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
