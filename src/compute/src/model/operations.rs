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
use std::collections::HashMap;

/// The envelope of an asynchronous mutation.
///
/// Every mutating RPC returns an `Operation` tracking the mutation in the
/// service. The client does not poll operations; the caller reads the
/// operation's `status` and, for a `DONE` operation, converts it into a
/// result with [Operation::to_result][crate::model::Operation::to_result].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// An optional identifier specified by the client when the mutation was
    /// initiated.
    pub client_operation_id: Option<String>,

    pub creation_timestamp: Option<String>,

    pub end_time: Option<String>,

    /// If errors occurred during processing of this operation, this field is
    /// set.
    pub error: Option<operation::Error>,

    /// If the operation failed, the HTTP error message returned, e.g. `NOT
    /// FOUND`.
    pub http_error_message: Option<String>,

    /// If the operation failed, the HTTP error status code returned, e.g.
    /// `404`.
    pub http_error_status_code: Option<i32>,

    #[serde_as(as = "Option<U64>")]
    pub id: Option<u64>,

    /// The time this operation was requested, in RFC3339 text format.
    pub insert_time: Option<String>,

    pub kind: Option<String>,

    pub name: Option<String>,

    /// The type of operation, e.g. `insert` or `delete`.
    pub operation_type: Option<String>,

    /// An optional progress indicator between 0 and 100. There is no
    /// requirement that this be linear or support any granularity.
    pub progress: Option<i32>,

    /// URL of the region where the operation resides, for regional
    /// operations.
    pub region: Option<String>,

    pub self_link: Option<String>,

    pub start_time: Option<String>,

    /// The status of the operation: `PENDING`, `RUNNING` or `DONE`.
    pub status: Option<String>,

    /// An optional textual description of the current status.
    pub status_message: Option<String>,

    /// Unique target id identifying the target of the operation.
    #[serde_as(as = "Option<U64>")]
    pub target_id: Option<u64>,

    /// URL of the resource the operation mutates.
    pub target_link: Option<String>,

    /// The user who requested the operation.
    pub user: Option<String>,

    /// Warnings generated during processing of the operation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<super::Warning>,

    /// URL of the zone where the operation resides, for zonal operations.
    pub zone: Option<String>,
}

impl Operation {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_client_operation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.client_operation_id = Some(v.into());
        self
    }

    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    pub fn set_error<T: Into<operation::Error>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    pub fn set_http_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.http_error_message = Some(v.into());
        self
    }

    pub fn set_http_error_status_code(mut self, v: i32) -> Self {
        self.http_error_status_code = Some(v);
        self
    }

    pub fn set_id(mut self, v: u64) -> Self {
        self.id = Some(v);
        self
    }

    pub fn set_insert_time<T: Into<String>>(mut self, v: T) -> Self {
        self.insert_time = Some(v.into());
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

    pub fn set_operation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_type = Some(v.into());
        self
    }

    pub fn set_progress(mut self, v: i32) -> Self {
        self.progress = Some(v);
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = Some(v.into());
        self
    }

    pub fn set_target_id(mut self, v: u64) -> Self {
        self.target_id = Some(v);
        self
    }

    pub fn set_target_link<T: Into<String>>(mut self, v: T) -> Self {
        self.target_link = Some(v.into());
        self
    }

    pub fn set_user<T: Into<String>>(mut self, v: T) -> Self {
        self.user = Some(v.into());
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

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    /// The errors generated while processing an operation.
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Error {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub errors: Vec<error::Errors>,
    }

    impl Error {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_errors<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<error::Errors>,
        {
            self.errors = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// Defines additional types related to [Error].
    pub mod error {
        /// One error generated while processing an operation.
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Errors {
            /// The error type identifier, e.g. `RESOURCE_NOT_FOUND`.
            pub code: Option<String>,

            /// The field in the request that caused the error, if applicable.
            pub location: Option<String>,

            /// An optional, human-readable error message.
            pub message: Option<String>,
        }

        impl Errors {
            /// Create a new instance.
            pub fn new() -> Self {
                Self::default()
            }

            pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
                self.code = Some(v.into());
                self
            }

            pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
                self.location = Some(v.into());
                self
            }

            pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
                self.message = Some(v.into());
                self
            }
        }
    }
}

/// A page of operations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Operation>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl OperationList {
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
        V: Into<Operation>,
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

impl PageableResponse for OperationList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Operations grouped by the scope they were issued in.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationAggregatedList {
    pub id: Option<String>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub items: HashMap<String, OperationsScopedList>,

    pub kind: Option<String>,

    pub next_page_token: Option<String>,

    pub self_link: Option<String>,
}

impl OperationAggregatedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OperationsScopedList>,
    {
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
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

impl PageableResponse for OperationAggregatedList {
    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The operations of one scope in an aggregated listing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationsScopedList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,

    pub warning: Option<super::Warning>,
}

impl OperationsScopedList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Operation>,
    {
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_warning<T: Into<super::Warning>>(mut self, v: T) -> Self {
        self.warning = Some(v.into());
        self
    }
}
