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

//! Per-request options.
//!
//! Applications sometimes need to customize a single call made via a client,
//! for example to set a deadline or to prepend an application identifier to
//! the `User-Agent` header. The request builders returned by each client
//! method implement the [RequestOptionsBuilder] trait, where these defaults
//! can be overridden.
//!
//! Note that the client performs exactly one request per call: there are no
//! retry or backoff knobs, and a timeout simply fails the one attempt.

/// A set of options configuring a single request.
///
/// Applications only use this type directly in tests; all other code uses it
/// indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The library does not retry: when the timeout expires the call fails
    /// with a timeout error and the request may or may not have taken effect
    /// in the service.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The library provides a builder for each RPC. These builders set the
/// request parameters, e.g. the name of the resource targeted by the RPC, as
/// well as any options affecting the request, such as headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header prefix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

pub mod internal {
    //! Implementation details shared with the typed client crate.
    use super::RequestOptions;

    /// Grants the [super::RequestOptionsBuilder] implementation access to the
    /// options stored inside each request builder.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );
        assert_eq!(builder.request_options().attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));
    }
}
