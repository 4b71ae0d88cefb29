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

impl crate::model::Operation {
    /// Converts a finished operation into a result.
    ///
    /// The service reports the outcome of an asynchronous mutation inside
    /// the [Operation][crate::model::Operation] resource itself: a failed
    /// operation carries an `error` and/or the HTTP error fields. This
    /// helper converts the failure fields into a proper error value.
    ///
    /// # Example
    /// ```
    /// # use gce_compute_v1::model::Operation;
    /// let operation = Operation::new()
    ///     .set_status("DONE")
    ///     .set_http_error_status_code(404)
    ///     .set_http_error_message("NOT FOUND");
    /// let result = operation.to_result();
    /// assert!(result.is_err());
    /// ```
    pub fn to_result(self) -> std::result::Result<Self, OperationError> {
        if self.error.is_some()
            || self.http_error_status_code.is_some()
            || self.http_error_message.is_some()
        {
            let error = OperationError::new();
            let error = self.error.into_iter().fold(error, |e, v| e.set_details(v));
            let error = self
                .http_error_status_code
                .into_iter()
                .fold(error, |e, v| e.set_status_code(v));
            let error = self
                .http_error_message
                .into_iter()
                .fold(error, |e, v| e.set_message(v));
            return Err(error);
        }
        Ok(self)
    }
}

/// Details about a failed operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OperationError {
    /// The HTTP error message.
    pub message: Option<String>,

    /// The HTTP error status code.
    pub status_code: Option<i32>,

    /// The errors generated while processing the operation.
    pub details: Option<crate::model::operation::Error>,
}

impl OperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [message][Self::message] field.
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Set the [status_code][Self::status_code] field.
    pub fn set_status_code(mut self, v: i32) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the [details][Self::details] field.
    pub fn set_details<V: Into<crate::model::operation::Error>>(mut self, v: V) -> Self {
        self.details = Some(v.into());
        self
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the operation failed with {self:?}")
    }
}

impl std::error::Error for OperationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operation;
    use crate::model::operation::{Error, error::Errors};

    #[test]
    fn to_result() {
        let operation = Operation::new().set_client_operation_id("abc");
        let got = operation.clone().to_result();
        assert!(matches!(got, Ok(ref o) if o == &operation), "{got:?}");

        let operation = Operation::new().set_http_error_message("uh-oh");
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(ref e) if e == &OperationError::new().set_message("uh-oh")),
            "{got:?}"
        );

        let operation = Operation::new().set_http_error_status_code(503);
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(ref e) if e == &OperationError::new().set_status_code(503)),
            "{got:?}"
        );

        let operation = Operation::new().set_error(Error::new());
        let got = operation.clone().to_result();
        assert!(
            matches!(got, Err(ref e) if e == &OperationError::new().set_details(Error::new())),
            "{got:?}"
        );
    }

    #[test]
    fn to_result_combines_fields() {
        let details = Error::new().set_errors([Errors::new()
            .set_code("RESOURCE_NOT_FOUND")
            .set_location("disk")
            .set_message("the disk is gone")]);
        let operation = Operation::new()
            .set_http_error_status_code(404)
            .set_http_error_message("NOT FOUND")
            .set_error(details.clone());
        let got = operation.to_result().unwrap_err();
        assert_eq!(got.status_code, Some(404));
        assert_eq!(got.message.as_deref(), Some("NOT FOUND"));
        assert_eq!(got.details, Some(details));
    }

    #[test]
    fn display() {
        let input = OperationError::new().set_message("test-message");
        let got = input.to_string();
        assert!(got.contains("test-message"), "{input:?} => {got}");

        let input = OperationError::new().set_details(
            Error::new().set_errors([Errors::new()
                .set_code("QUOTA_EXCEEDED")
                .set_message("too many disks")]),
        );
        let got = input.to_string();
        assert!(got.contains("QUOTA_EXCEEDED"), "{input:?} => {got}");
        assert!(got.contains("too many disks"), "{input:?} => {got}");
    }

    #[test]
    fn setters() {
        let got = OperationError::new().set_message("abc");
        assert_eq!(got.message.as_deref(), Some("abc"));

        let got = OperationError::new().set_status_code(123);
        assert_eq!(got.status_code, Some(123));

        let details = Error::new().set_errors([Errors::new().set_code("uh-oh")]);
        let got = OperationError::new().set_details(details.clone());
        assert_eq!(got.details, Some(details));
    }
}
