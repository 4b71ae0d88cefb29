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

use super::{Metadata, Quota};
use gax::int64::U64;

/// A project resource.
///
/// Projects are created and administered outside this API; the compute
/// surface exposes only the compute-related project attributes.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Project {
    /// Metadata key/value pairs available to all instances in the project.
    pub common_instance_metadata: Option<Metadata>,

    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    /// The project ID, e.g. `my-project`.
    pub name: Option<String>,

    /// The compute quotas assigned to this project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quotas: Vec<Quota>,

    pub self_link: Option<String>,
}

impl Project {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_common_instance_metadata<T: Into<Metadata>>(mut self, v: T) -> Self {
        self.common_instance_metadata = Some(v.into());
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

    pub fn set_quotas<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Quota>,
    {
        self.quotas = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }
}
