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

//! Generic client helpers for the Compute Engine client library.
//!
//! This crate contains the types and functions shared by the typed API
//! surface in [gce-compute-v1](https://crates.io/crates/gce-compute-v1): the
//! error model, the client builder, the credentials seam, and the REST
//! transport. Every RPC in the typed surface funnels into
//! [http_client::RestClient], a single request executor parameterized by HTTP
//! verb, request path, request body type, and response body type.
//!
//! Applications rarely need to use this crate directly, except to name the
//! [Result] and [error::Error] types, or to plug in their own
//! [credentials::CredentialsProvider].

/// An alias of [std::result::Result] where the error is always [error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, error::Error>;

/// The core error type and the service error payload.
pub mod error;

/// Client construction: the generic builder and its configuration.
pub mod client_builder;

/// The credentials seam: a trait producing authentication headers.
///
/// Token acquisition and refresh are outside the scope of this library; the
/// shipped providers cover anonymous access (emulators, tests) and a static
/// bearer token supplied by the application.
pub mod credentials;

/// The REST transport shared by all typed clients.
pub mod http_client;

/// Serde codecs for 64-bit integers transported as JSON strings.
pub mod int64;

/// Per-request options and the sealed options builder trait.
pub mod options;

/// Converts list RPCs into a [futures::Stream] of pages.
pub mod paginator;

/// Helpers to validate and encode request path parameters.
pub mod path_parameter;

/// Helpers to encode optional query parameters.
pub mod query_parameter;

/// The response envelope returned by all RPCs.
pub mod response;
