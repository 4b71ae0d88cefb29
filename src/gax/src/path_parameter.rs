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

//! Handling of request path parameters.
//!
//! Parameters used to build the request path are required, but in the
//! builders they start out unset. The request must fail locally, before any
//! I/O, when a path parameter is missing: substituting an empty string would
//! silently produce a different (and wrong) URL.
//!
//! The service validates the *format* of resource names and identifiers
//! itself; the client only refuses values that cannot form a URL path
//! segment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped when a parameter is placed in a path segment. The
/// unreserved set from RFC 3986.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Checks a required path parameter, rejecting unset values.
///
/// # Example
/// ```
/// # use gce_gax::path_parameter;
/// let p = path_parameter::require("my-project", "project");
/// assert_eq!(p.unwrap(), "my-project");
/// let p = path_parameter::require("", "project");
/// assert!(p.is_err());
/// ```
pub fn require<'a>(value: &'a str, name: &str) -> crate::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

/// Percent-encodes one path segment.
///
/// Resource names are restricted by the service, but nothing stops an
/// application from passing `instances/../disks` as a name. Escaping keeps
/// each parameter confined to a single path segment.
pub fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("my-project", Some("my-project"))]
    #[test_case("p", Some("p"))]
    #[test_case("", None)]
    fn require(input: &str, expected: Option<&str>) {
        let got = super::require(input, "project");
        assert_eq!(got.ok(), expected);
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test_case("simple", "simple")]
    #[test_case("with-dash_and.dot~", "with-dash_and.dot~")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a b", "a%20b")]
    #[test_case("a?b=c", "a%3Fb%3Dc")]
    fn segment(input: &str, expected: &str) {
        assert_eq!(super::segment(input), expected);
    }
}
