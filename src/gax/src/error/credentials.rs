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

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Represents an error creating or using [Credentials][crate::credentials::Credentials].
///
/// A credentials provider may fail before any request is sent, for example
/// when a token source is misconfigured, or when a token refresh fails. The
/// transient flag indicates whether the same operation might succeed if
/// attempted again; the client library itself never acts on the flag, it only
/// preserves it for the application.
///
/// # Example
/// ```
/// # use gce_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while creating the auth headers");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    source: Inner,
}

#[derive(Clone, Debug)]
enum Inner {
    Message(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping another error.
    ///
    /// # Arguments
    /// * `is_transient` - whether the operation might succeed on a new attempt.
    /// * `source` - the underlying error that caused the failure.
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            source: Inner::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message string.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError {
            is_transient,
            source: Inner::Message(message.into()),
        }
    }

    /// Returns `true` if the same operation might succeed on a new attempt.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Inner::Message(_) => None,
            Inner::Source(source) => Some(source.as_ref()),
        }
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Inner::Message(m) => write!(f, "{m}"),
            Inner::Source(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("inner-error")]
    struct InnerError;

    #[test]
    fn from_msg() {
        let err = CredentialsError::from_msg(true, "test-message");
        assert!(err.is_transient(), "{err:?}");
        assert!(err.source().is_none(), "{err:?}");
        assert_eq!(err.to_string(), "test-message");

        let err = CredentialsError::from_msg(false, "test-message");
        assert!(!err.is_transient(), "{err:?}");
    }

    #[test]
    fn from_source() {
        let err = CredentialsError::from_source(false, InnerError);
        assert!(!err.is_transient(), "{err:?}");
        let got = err.source().and_then(|e| e.downcast_ref::<InnerError>());
        assert!(got.is_some(), "{err:?}");
        assert_eq!(err.to_string(), "inner-error");
    }
}
