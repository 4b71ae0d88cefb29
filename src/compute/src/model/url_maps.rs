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

use gax::int64::U64;
use gax::paginator::PageableResponse;

/// The mapping of URLs to backend services.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMap {
    pub creation_timestamp: Option<String>,

    /// URL of the backend service to use when none of the host rules match.
    pub default_service: Option<String>,

    pub description: Option<String>,

    /// An opaque fingerprint, used for optimistic locking when updating the
    /// map.
    pub fingerprint: Option<String>,

    /// The list of host rules to use against the URL.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_rules: Vec<HostRule>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    pub name: Option<String>,

    /// The list of named path matchers referenced by the host rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_matchers: Vec<PathMatcher>,

    pub self_link: Option<String>,

    /// Expectations verified when the map is updated; the update fails if
    /// any test fails.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<UrlMapTest>,
}

impl UrlMap {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    pub fn set_default_service<T: Into<String>>(mut self, v: T) -> Self {
        self.default_service = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.fingerprint = Some(v.into());
        self
    }

    pub fn set_host_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<HostRule>,
    {
        self.host_rules = v.into_iter().map(|i| i.into()).collect();
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

    pub fn set_path_matchers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PathMatcher>,
    {
        self.path_matchers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_tests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UrlMapTest>,
    {
        self.tests = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The mapping of a set of hosts to a path matcher.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostRule {
    pub description: Option<String>,

    /// Host patterns to match, e.g. `*.example.com`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    /// The name of the [PathMatcher] to use when the host matches.
    pub path_matcher: Option<String>,
}

impl HostRule {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_path_matcher<T: Into<String>>(mut self, v: T) -> Self {
        self.path_matcher = Some(v.into());
        self
    }
}

/// A named mapping of URL paths to backend services.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PathMatcher {
    /// URL of the backend service to use when none of the path rules match.
    pub default_service: Option<String>,

    pub description: Option<String>,

    /// The name referenced by [HostRule::path_matcher].
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_rules: Vec<PathRule>,
}

impl PathMatcher {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_service<T: Into<String>>(mut self, v: T) -> Self {
        self.default_service = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_path_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PathRule>,
    {
        self.path_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The mapping of a set of path patterns to a backend service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PathRule {
    /// Path patterns to match, e.g. `/images/*`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// URL of the backend service to use when a path matches.
    pub service: Option<String>,
}

impl PathRule {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }
}

/// One expectation about how a [UrlMap] routes a URL.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapTest {
    pub description: Option<String>,

    pub host: Option<String>,

    pub path: Option<String>,

    /// URL of the backend service the URL is expected to map to.
    pub service: Option<String>,
}

impl UrlMapTest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_host<T: Into<String>>(mut self, v: T) -> Self {
        self.host = Some(v.into());
        self
    }

    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = Some(v.into());
        self
    }

    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }
}

/// A page of URL maps.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<UrlMap>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl UrlMapList {
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
        V: Into<UrlMap>,
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

impl PageableResponse for UrlMapList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request body of [UrlMaps::validate][crate::client::UrlMaps::validate].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapsValidateRequest {
    /// The map to validate; the stored copy is not modified.
    pub resource: Option<UrlMap>,
}

impl UrlMapsValidateRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resource<T: Into<UrlMap>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }
}

/// The response of [UrlMaps::validate][crate::client::UrlMaps::validate].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapsValidateResponse {
    pub result: Option<UrlMapValidationResult>,
}

impl UrlMapsValidateResponse {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_result<T: Into<UrlMapValidationResult>>(mut self, v: T) -> Self {
        self.result = Some(v.into());
        self
    }
}

/// The outcome of validating a [UrlMap].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapValidationResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load_errors: Vec<String>,

    /// Whether the map loaded successfully; if false, `load_errors`
    /// indicates the reasons.
    pub load_succeeded: Option<bool>,

    /// Whether all the map's tests passed.
    pub test_passed: Option<bool>,
}

impl UrlMapValidationResult {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_load_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.load_errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_load_succeeded(mut self, v: bool) -> Self {
        self.load_succeeded = Some(v);
        self
    }

    pub fn set_test_passed(mut self, v: bool) -> Self {
        self.test_passed = Some(v);
        self
    }
}
