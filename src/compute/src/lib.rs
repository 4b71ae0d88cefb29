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

//! A client library for the Google Compute Engine v1 API.
//!
//! Compute Engine lets you create and run virtual machines on Google
//! infrastructure. This crate provides typed access to the v1 REST API:
//! resource messages in [model], one [client::Client] with per-collection
//! accessors, and one request builder per RPC in [builder].
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use gce_compute_v1::client::Client;
//!
//! let client = Client::builder().build().await?;
//! let disk = client
//!     .disks()
//!     .get()
//!     .set_project("my-project")
//!     .set_zone("us-central1-a")
//!     .set_disk("my-disk")
//!     .send()
//!     .await?;
//! println!("disk = {:?}", disk.body());
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```
//!
//! Mutating RPCs resolve to an [Operation][model::Operation], the service's
//! asynchronous mutation envelope. The caller decides whether and how to wait
//! for the operation; a completed operation converts into a result via
//! [Operation::to_result][model::Operation::to_result].
//!
//! The client performs exactly one HTTP request per `send()`. There is no
//! retry loop and no error classification: transport and service errors are
//! returned to the caller unchanged, see [gce_gax::error::Error].
//!
//! # Authentication
//!
//! Most RPCs require OAuth2 credentials with one of the scopes in [scope].
//! Token acquisition is left to the application; see
//! [gce_gax::credentials] for the seam to plug a token source into the
//! client.

/// The request builders, one per RPC.
pub mod builder;

/// The service client and the per-collection clients.
pub mod client;

/// Conversion of failed [Operation][model::Operation] resources into errors.
pub mod errors;

/// The resource messages exchanged with the service.
pub mod model;

/// The OAuth2 scopes used by this API.
///
/// Enforcement is entirely on the service side; the constants exist so
/// applications can request correctly-scoped tokens from their credential
/// layer.
pub mod scope {
    /// View and manage your data across Google Cloud Platform services.
    pub const CLOUD_PLATFORM: &str = "https://www.googleapis.com/auth/cloud-platform";

    /// View and manage your Google Compute Engine resources.
    pub const COMPUTE: &str = "https://www.googleapis.com/auth/compute";

    /// View your Google Compute Engine resources.
    pub const COMPUTE_READONLY: &str = "https://www.googleapis.com/auth/compute.readonly";

    /// Manage your data and permissions in Google Cloud Storage.
    pub const DEVSTORAGE_FULL_CONTROL: &str =
        "https://www.googleapis.com/auth/devstorage.full_control";

    /// View your data in Google Cloud Storage.
    pub const DEVSTORAGE_READ_ONLY: &str =
        "https://www.googleapis.com/auth/devstorage.read_only";

    /// Manage your data in Google Cloud Storage.
    pub const DEVSTORAGE_READ_WRITE: &str =
        "https://www.googleapis.com/auth/devstorage.read_write";
}

/// The default endpoint for the service.
pub(crate) const DEFAULT_HOST: &str = "https://www.googleapis.com/compute/v1";
