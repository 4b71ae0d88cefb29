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

//! The request builders, one per RPC.
//!
//! A builder accumulates the path parameters, the optional query parameters,
//! and (for mutating RPCs) the request body, then performs exactly one HTTP
//! round trip on `send()`. Builders are created through the collection
//! clients in [crate::client]; they are cheap to clone and single-use.
//!
//! Required path parameters are validated at `send()` time: an unset
//! parameter fails locally with a binding error before any I/O. Optional
//! query parameters appear in the request URL iff they were set.
//!
//! All builders implement
//! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder] to override
//! per-request options such as the timeout.

/// The request builders for [Addresses][crate::client::Addresses].
pub mod addresses;

/// The request builders for [Disks][crate::client::Disks].
pub mod disks;

/// The request builders for [Firewalls][crate::client::Firewalls].
pub mod firewalls;

/// The request builders for [GlobalOperations][crate::client::GlobalOperations].
pub mod global_operations;

/// The request builders for [Images][crate::client::Images].
pub mod images;

/// The request builders for [Instances][crate::client::Instances].
pub mod instances;

/// The request builders for [MachineTypes][crate::client::MachineTypes].
pub mod machine_types;

/// The request builders for [Networks][crate::client::Networks].
pub mod networks;

/// The request builders for [Projects][crate::client::Projects].
pub mod projects;

/// The request builders for [RegionOperations][crate::client::RegionOperations].
pub mod region_operations;

/// The request builders for [Regions][crate::client::Regions].
pub mod regions;

/// The request builders for [Routes][crate::client::Routes].
pub mod routes;

/// The request builders for [Snapshots][crate::client::Snapshots].
pub mod snapshots;

/// The request builders for [TargetPools][crate::client::TargetPools].
pub mod target_pools;

/// The request builders for [UrlMaps][crate::client::UrlMaps].
pub mod url_maps;

/// The request builders for [ZoneOperations][crate::client::ZoneOperations].
pub mod zone_operations;

/// The request builders for [Zones][crate::client::Zones].
pub mod zones;
