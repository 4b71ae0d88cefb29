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

//! The resource messages exchanged with the service.
//!
//! Every type in this module is a passive record mirroring the service's
//! JSON representation. The client enforces no invariants locally: name
//! patterns, numeric ranges, and referential integrity are all validated by
//! the service. References between resources (an instance's machine type,
//! a disk's source image) are opaque URL strings.
//!
//! Field conventions:
//! - optional scalars are `Option<T>`, omitted from request bodies when
//!   unset;
//! - repeated and map fields are `Vec<T>`/`HashMap<K, V>`, omitted when
//!   empty;
//! - 64-bit integers (`id`, sizes, byte counts) are transported as JSON
//!   strings, because JSON numbers lose precision beyond 2^53;
//! - every type offers `new()` and fluent `set_*` setters.

mod addresses;
mod disks;
mod firewalls;
mod images;
mod instances;
mod machine_types;
mod networks;
mod operations;
mod projects;
mod regions_zones;
mod routes;
mod snapshots;
mod target_pools;
mod url_maps;

pub use addresses::{Address, AddressAggregatedList, AddressList, AddressesScopedList};
pub use disks::{
    AttachedDisk, AttachedDiskInitializeParams, Disk, DiskAggregatedList, DiskList,
    DisksScopedList,
};
pub use firewalls::{Firewall, FirewallList, firewall};
pub use images::{Image, ImageList, image};
pub use instances::{
    AccessConfig, Instance, InstanceAggregatedList, InstanceList, InstanceReference,
    InstancesScopedList, NetworkInterface, Scheduling, SerialPortOutput, ServiceAccount,
};
pub use machine_types::{
    MachineType, MachineTypeAggregatedList, MachineTypeList, MachineTypesScopedList, machine_type,
};
pub use networks::{Network, NetworkList};
pub use operations::{
    Operation, OperationAggregatedList, OperationList, OperationsScopedList, operation,
};
pub use projects::Project;
pub use regions_zones::{Region, RegionList, Zone, ZoneList, zone};
pub use routes::{Route, RouteList};
pub use snapshots::{Snapshot, SnapshotList};
pub use target_pools::{
    TargetPool, TargetPoolList, TargetPoolsAddInstanceRequest, TargetPoolsRemoveInstanceRequest,
};
pub use url_maps::{
    HostRule, PathMatcher, PathRule, UrlMap, UrlMapList, UrlMapTest, UrlMapValidationResult,
    UrlMapsValidateRequest, UrlMapsValidateResponse,
};

/// A generic empty message, the response of RPCs with nothing to return.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Empty {}

impl Empty {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An informational warning attached to a response.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Warning {
    /// The warning type identifier, e.g. `NO_RESULTS_ON_PAGE`.
    pub code: Option<String>,

    /// A human-readable description of the warning code.
    pub message: Option<String>,

    /// Metadata for this warning.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<warning::Data>,
}

impl Warning {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    pub fn set_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<warning::Data>,
    {
        self.data = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Defines additional types related to [Warning].
pub mod warning {
    /// One key/value pair of warning metadata.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Data {
        pub key: Option<String>,
        pub value: Option<String>,
    }

    impl Data {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
            self.key = Some(v.into());
            self
        }

        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.value = Some(v.into());
            self
        }
    }
}

/// Deprecation status for a resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeprecationStatus {
    /// An optional RFC3339 timestamp on or after which this resource is
    /// planned to be deleted.
    pub deleted: Option<String>,
    pub deprecated: Option<String>,
    pub obsolete: Option<String>,

    /// A URL of the suggested replacement for the deprecated resource.
    pub replacement: Option<String>,

    /// The deprecation state: `DEPRECATED`, `OBSOLETE` or `DELETED`.
    pub state: Option<String>,
}

impl DeprecationStatus {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_deleted<T: Into<String>>(mut self, v: T) -> Self {
        self.deleted = Some(v.into());
        self
    }

    pub fn set_deprecated<T: Into<String>>(mut self, v: T) -> Self {
        self.deprecated = Some(v.into());
        self
    }

    pub fn set_obsolete<T: Into<String>>(mut self, v: T) -> Self {
        self.obsolete = Some(v.into());
        self
    }

    pub fn set_replacement<T: Into<String>>(mut self, v: T) -> Self {
        self.replacement = Some(v.into());
        self
    }

    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// A metadata key/value collection attached to an instance or project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Metadata {
    /// An opaque fingerprint, used for optimistic locking when updating the
    /// metadata.
    pub fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<metadata::Items>,

    pub kind: Option<String>,
}

impl Metadata {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.fingerprint = Some(v.into());
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<metadata::Items>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// Defines additional types related to [Metadata].
pub mod metadata {
    /// One metadata entry.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Items {
        /// The key, unique within the collection. Keys must match
        /// `[a-zA-Z0-9-_]+` and be at most 128 bytes; the service enforces
        /// the pattern.
        pub key: Option<String>,

        /// The value, at most 32768 bytes.
        pub value: Option<String>,
    }

    impl Items {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
            self.key = Some(v.into());
            self
        }

        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.value = Some(v.into());
            self
        }
    }
}

/// A set of network tags attached to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tags {
    /// An opaque fingerprint, used for optimistic locking when updating the
    /// tags.
    pub fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl Tags {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.fingerprint = Some(v.into());
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single quota bucket of a project or region.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Quota {
    pub limit: Option<f64>,

    /// The quota metric, e.g. `CPUS` or `SNAPSHOTS`.
    pub metric: Option<String>,

    pub usage: Option<f64>,
}

impl Quota {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_limit(mut self, v: f64) -> Self {
        self.limit = Some(v);
        self
    }

    pub fn set_metric<T: Into<String>>(mut self, v: T) -> Self {
        self.metric = Some(v.into());
        self
    }

    pub fn set_usage(mut self, v: f64) -> Self {
        self.usage = Some(v);
        self
    }
}
