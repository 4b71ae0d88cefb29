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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The structured error payload returned by the service.
///
/// Failed requests carry a JSON body of the form:
///
/// ```json
/// {
///   "error": {
///     "code": 404,
///     "message": "The resource 'projects/p/zones/z/disks/d' was not found",
///     "errors": [
///       {"domain": "global", "reason": "notFound", "message": "..."}
///     ]
///   }
/// }
/// ```
///
/// Each [Status] contains the HTTP status code, a developer-facing message,
/// and a list of [ErrorItem] with more detail about each failing input.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The HTTP status code reported in the error body.
    pub code: i32,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// The individual errors that caused the request to fail.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

impl Status {
    /// Sets the value of [code][Status::code].
    pub fn set_code(mut self, v: i32) -> Self {
        self.code = v;
        self
    }

    /// Sets the value of [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [errors][Status::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorItem>,
    {
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single error detail within a [Status].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorItem {
    /// The scope of the error, typically `global` or `usageLimits`.
    pub domain: Option<String>,

    /// The short name of the failure, e.g. `notFound` or `invalid`.
    pub reason: Option<String>,

    /// A description of this specific error.
    pub message: Option<String>,

    /// The location of the failing input, interpreted per `location_type`.
    pub location: Option<String>,

    /// How to interpret `location`, e.g. `parameter`.
    pub location_type: Option<String>,
}

impl ErrorItem {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [domain][ErrorItem::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [reason][ErrorItem::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    /// Sets the value of [message][ErrorItem::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [location][ErrorItem::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [location_type][ErrorItem::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }
}

/// A helper to deserialize wrapped [Status] messages.
#[derive(Clone, Debug, Deserialize, Serialize)]
struct ErrorWrapper {
    error: Status,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn deserialize_full() -> TestResult {
        let payload = json!({
            "error": {
                "code": 404,
                "message": "The resource 'projects/p/zones/z/disks/d' was not found",
                "errors": [{
                    "domain": "global",
                    "reason": "notFound",
                    "message": "The resource 'projects/p/zones/z/disks/d' was not found"
                }]
            }
        });
        let body = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&body)?;
        let want = Status::default()
            .set_code(404)
            .set_message("The resource 'projects/p/zones/z/disks/d' was not found")
            .set_errors([ErrorItem::new()
                .set_domain("global")
                .set_reason("notFound")
                .set_message("The resource 'projects/p/zones/z/disks/d' was not found")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_ignores_unknown_fields() -> TestResult {
        let payload = json!({
            "error": {
                "code": 403,
                "message": "quota exceeded",
                "status": "PERMISSION_DENIED",
                "details": []
            }
        });
        let body = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&body)?;
        assert_eq!(got.code, 403);
        assert_eq!(got.message, "quota exceeded");
        assert!(got.errors.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn deserialize_not_a_status() {
        let body = bytes::Bytes::from_static(b"service exploded, sorry");
        let got = Status::try_from(&body);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn serialize_skips_empty_errors() -> TestResult {
        let status = Status::default().set_code(400).set_message("bad request");
        let got = serde_json::to_value(&status)?;
        assert_eq!(got, json!({"code": 400, "message": "bad request"}));
        Ok(())
    }
}
