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

//! Response types.
//!
//! A response from the service consists of a body (the decoded resource) and
//! some metadata, currently just the response headers. Typically you get a
//! response as the result of calling `send()` on a request builder; tests may
//! also create responses directly.

/// Represents a service response.
///
/// # Example
/// ```
/// # use gce_gax::response::Response;
/// #[derive(Clone, Default)]
/// pub struct Resource {
///   // ...
/// }
///
/// let response = Response::from(Resource::default());
/// let resource = response.body();
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from just a body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from a body and the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The headers returned with the response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// A reference to the body of the response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Consumes the response, returning the parts and body separately.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }
}

/// The metadata of a service response.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The headers returned with the response.
    pub headers: http::HeaderMap,
}

impl Parts {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn set_headers<T: Into<http::HeaderMap>>(mut self, v: T) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn from_body() {
        let response = Response::from("test-body".to_string());
        assert!(response.headers().is_empty(), "{response:?}");
        assert_eq!(response.body(), "test-body");
        assert_eq!(response.into_body(), "test-body");
    }

    #[test]
    fn from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("value"));
        let parts = Parts::new().set_headers(headers.clone());
        let response = Response::from_parts(parts, 42);
        assert_eq!(response.headers(), &headers);
        let (parts, body) = response.into_parts();
        assert_eq!(parts.headers, headers);
        assert_eq!(body, 42);
    }
}
