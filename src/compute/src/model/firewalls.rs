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

/// A firewall rule controlling traffic to instances on a network.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Firewall {
    /// The protocols and ports this rule permits.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<firewall::Allowed>,

    pub creation_timestamp: Option<String>,

    pub description: Option<String>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    pub kind: Option<String>,

    pub name: Option<String>,

    /// URL of the network to which this rule applies.
    pub network: Option<String>,

    pub self_link: Option<String>,

    /// The IP address blocks this rule applies to, in CIDR format.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_ranges: Vec<String>,

    /// Instance tags the rule applies to; traffic from instances with these
    /// tags is allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_tags: Vec<String>,

    /// Instance tags the rule applies traffic *to*; unset means all
    /// instances on the network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_tags: Vec<String>,
}

impl Firewall {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allowed<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<firewall::Allowed>,
    {
        self.allowed = v.into_iter().map(|i| i.into()).collect();
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

    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_source_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.source_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_source_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.source_tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_target_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.target_tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Defines additional types related to [Firewall].
pub mod firewall {
    /// One protocol/port combination permitted by a firewall rule.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Allowed {
        /// The IP protocol: `tcp`, `udp`, `icmp`, or a protocol number.
        #[serde(rename = "IPProtocol")]
        pub ip_protocol: Option<String>,

        /// Port names or ranges, e.g. `22` or `12345-12349`. Only applicable
        /// to UDP and TCP.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub ports: Vec<String>,
    }

    impl Allowed {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_ip_protocol<T: Into<String>>(mut self, v: T) -> Self {
            self.ip_protocol = Some(v.into());
            self
        }

        pub fn set_ports<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.ports = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }
}

/// A page of firewall rules.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Firewall>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl FirewallList {
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
        V: Into<Firewall>,
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

impl PageableResponse for FirewallList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
