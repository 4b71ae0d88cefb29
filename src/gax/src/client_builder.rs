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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration,
//! for example to override the endpoint or the authentication credentials.
//! The library uses a generic builder type to provide such functionality.
//!
//! Applications should not create builders directly, instead the client type
//! defines a `builder()` function to obtain the correct type of builder.

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize its credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Creates a credentials initialization error.
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Creates a transport initialization error.
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not initialize the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// A "client" represents a connection to the service. Clients are
/// initialized with a `ClientBuilder`, obtained via the `builder()` method
/// on the client type. The builder offers several methods to configure the
/// client, and a `build()` method to construct it.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Useful to direct the client at a test server or a private endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without this option the client uses anonymous credentials: no
    /// authentication headers are attached, and the service rejects any
    /// request that requires them.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client can be dynamically instrumented with the Tokio [tracing]
    /// framework. Setting this flag enables `debug!` events for each request
    /// dispatch and each error response.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

pub mod internal {
    //! Implementation details shared with the typed client crate.
    use super::*;

    /// Constructs the concrete client type from a [ClientConfig].
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    /// Creates a builder from the client's factory.
    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration should work for most applications, but some
    /// need to override the endpoint or the credentials.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    // A placeholder client, the tests only exercise the builder plumbing.
    #[derive(Debug)]
    struct Client(internal::ClientConfig<String>);

    impl Client {
        fn builder() -> ClientBuilder<Factory, String> {
            internal::new_builder(Factory)
        }
    }

    struct Factory;
    impl internal::ClientFactory for Factory {
        type Client = Client;
        type Credentials = String;
        async fn build(self, config: internal::ClientConfig<String>) -> Result<Client> {
            Ok(Client(config))
        }
    }

    #[derive(thiserror::Error, Debug)]
    #[error("test-source-error")]
    struct TestSource;

    #[tokio::test]
    async fn build_default() {
        let client = Client::builder().build().await.unwrap();
        let config = client.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
    }

    #[tokio::test]
    async fn endpoint() {
        let client = Client::builder()
            .with_endpoint("http://example.com")
            .build()
            .await
            .unwrap();
        assert_eq!(client.0.endpoint.as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn credentials() {
        let client = Client::builder()
            .with_credentials("test-credentials")
            .build()
            .await
            .unwrap();
        assert_eq!(client.0.cred.as_deref(), Some("test-credentials"));
    }

    #[tokio::test]
    async fn tracing() {
        let client = Client::builder().with_tracing().build().await.unwrap();
        assert!(client.0.tracing);
    }

    #[test]
    fn error_credentials() {
        let error = Error::cred(TestSource);
        assert!(error.is_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("credentials"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn error_transport() {
        let error = Error::transport(TestSource);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert!(got.is_some(), "{error:?}");
    }
}
