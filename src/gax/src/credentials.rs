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

//! The credentials seam used by the REST transport.
//!
//! The service requires OAuth2 access tokens on most requests, but token
//! acquisition and refresh are the job of whatever credential layer the
//! application already uses. This module only defines the seam: a provider of
//! request headers, queried once per outgoing request.
//!
//! Two providers ship with the library: [anonymous] credentials, which
//! produce no headers and are useful against emulators and local test
//! servers, and [static_token] credentials which attach a fixed bearer token
//! supplied by the application.

use crate::error::CredentialsError;
use http::HeaderMap;
use std::sync::Arc;

/// The result type used by credentials providers.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Produces the authentication headers for one outgoing request.
///
/// Implement this trait to plug an external token source into a client:
///
/// ```
/// use gce_gax::credentials::{Credentials, CredentialsProvider};
/// use gce_gax::error::CredentialsError;
/// use http::HeaderMap;
///
/// #[derive(Debug)]
/// struct MyTokenSource;
///
/// #[async_trait::async_trait]
/// impl CredentialsProvider for MyTokenSource {
///     async fn headers(&self) -> gce_gax::credentials::Result<HeaderMap> {
///         // fetch or refresh a token here
///         Ok(HeaderMap::new())
///     }
/// }
///
/// let credentials = Credentials::from(MyTokenSource);
/// ```
#[async_trait::async_trait]
pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
    /// Returns the headers to attach to a request.
    ///
    /// The transport calls this once per request; providers that cache
    /// tokens are expected to handle refresh internally.
    async fn headers(&self) -> Result<HeaderMap>;
}

/// A handle to a [CredentialsProvider], cheap to clone and share.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn CredentialsProvider>,
}

impl Credentials {
    /// Returns the headers to attach to a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

/// Credentials that produce no headers.
pub mod anonymous {
    use super::*;

    /// Creates anonymous credentials.
    ///
    /// Useful against emulators and test servers where the service does not
    /// check authentication.
    ///
    /// # Example
    /// ```
    /// # use gce_gax::credentials::anonymous;
    /// let credentials = anonymous::Builder::new().build();
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct Builder;

    impl Builder {
        pub fn new() -> Self {
            Self
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousCredentials)
        }
    }

    #[derive(Debug)]
    struct AnonymousCredentials;

    #[async_trait::async_trait]
    impl CredentialsProvider for AnonymousCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }
}

/// Credentials that attach a fixed bearer token.
pub mod static_token {
    use super::*;
    use http::header::{AUTHORIZATION, HeaderValue};

    /// Creates credentials from a token the application already holds.
    ///
    /// The token is attached verbatim as `Authorization: Bearer <token>`;
    /// the library never inspects or refreshes it.
    ///
    /// # Example
    /// ```
    /// # use gce_gax::credentials::static_token;
    /// let credentials = static_token::Builder::new("ya29.test-token").build();
    /// ```
    #[derive(Clone, Debug)]
    pub struct Builder {
        token: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(StaticTokenCredentials { token: self.token })
        }
    }

    struct StaticTokenCredentials {
        token: String,
    }

    impl std::fmt::Debug for StaticTokenCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            // The token value must not leak into logs.
            f.debug_struct("StaticTokenCredentials")
                .field("token", &"[censored]")
                .finish()
        }
    }

    #[async_trait::async_trait]
    impl CredentialsProvider for StaticTokenCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| CredentialsError::from_source(false, e))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            Ok(headers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_headers_empty() {
        let credentials = anonymous::Builder::new().build();
        let headers = credentials.headers().await.unwrap();
        assert!(headers.is_empty(), "{headers:?}");
    }

    #[tokio::test]
    async fn static_token_headers() {
        let credentials = static_token::Builder::new("test-token").build();
        let headers = credentials.headers().await.unwrap();
        let got = headers.get(http::header::AUTHORIZATION).unwrap();
        assert_eq!(got.to_str().unwrap(), "Bearer test-token");
        assert!(got.is_sensitive());
    }

    #[tokio::test]
    async fn static_token_invalid() {
        let credentials = static_token::Builder::new("bad\ntoken").build();
        let got = credentials.headers().await;
        assert!(got.is_err(), "{got:?}");
        assert!(!got.unwrap_err().is_transient());
    }

    #[test]
    fn static_token_debug_censors() {
        let credentials = static_token::Builder::new("super-secret").build();
        let got = format!("{credentials:?}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(got.contains("censored"), "{got}");
    }
}
