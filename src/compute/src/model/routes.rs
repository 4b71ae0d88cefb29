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

/// A rule directing packets leaving an instance to a next hop.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Route {
    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    /// The destination range of outgoing packets the route applies to, in
    /// CIDR format.
    pub dest_range: Option<String>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    pub name: Option<String>,

    /// URL of the network the route applies to.
    pub network: Option<String>,

    /// URL of a gateway handling matching packets. Exactly one next hop
    /// field must be set.
    pub next_hop_gateway: Option<String>,

    /// URL of an instance handling matching packets.
    pub next_hop_instance: Option<String>,

    /// IP address of an instance handling matching packets.
    pub next_hop_ip: Option<String>,

    /// URL of a network handling matching packets.
    pub next_hop_network: Option<String>,

    /// Breaks ties between routes with equally specific destinations; lower
    /// values win.
    pub priority: Option<u32>,

    pub self_link: Option<String>,

    /// Instance tags the route applies to; empty means all instances on the
    /// network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Informational warnings, e.g. when the route's next hop instance no
    /// longer exists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<super::Warning>,
}

impl Route {
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

    pub fn set_dest_range<T: Into<String>>(mut self, v: T) -> Self {
        self.dest_range = Some(v.into());
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

    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    pub fn set_next_hop_gateway<T: Into<String>>(mut self, v: T) -> Self {
        self.next_hop_gateway = Some(v.into());
        self
    }

    pub fn set_next_hop_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.next_hop_instance = Some(v.into());
        self
    }

    pub fn set_next_hop_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.next_hop_ip = Some(v.into());
        self
    }

    pub fn set_next_hop_network<T: Into<String>>(mut self, v: T) -> Self {
        self.next_hop_network = Some(v.into());
        self
    }

    pub fn set_priority(mut self, v: u32) -> Self {
        self.priority = Some(v);
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_warnings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<super::Warning>,
    {
        self.warnings = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of routes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RouteList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Route>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl RouteList {
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
        V: Into<Route>,
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

impl PageableResponse for RouteList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
