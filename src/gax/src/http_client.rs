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

//! The REST transport shared by all typed clients.
//!
//! Every RPC in the typed API surface reduces to the same sequence: format a
//! request path, add query parameters, maybe serialize a JSON body, perform
//! one HTTP round trip, and decode the JSON response or the error payload.
//! [RestClient] implements that sequence exactly once; the per-RPC request
//! builders only differ in the path they format and the types they carry.
//!
//! The transport performs exactly one attempt per call. Errors, including
//! transient transport failures, are returned to the caller unchanged; any
//! retry decision belongs to the application.

use crate::Result;
use crate::client_builder::Error as BuilderError;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::error::status::Status;
use crate::options::RequestOptions;
use crate::response::{Parts, Response};

/// The generic typed request executor.
///
/// Holds the `reqwest` client, the resolved endpoint, and the credentials.
/// Cloning is cheap and clones share the underlying connection pool. The
/// client imposes no ordering or rate limiting of its own; callers are free
/// to issue concurrent requests.
#[derive(Clone, Debug)]
pub struct RestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl RestClient {
    pub async fn new(
        config: crate::client_builder::internal::ClientConfig<Credentials>,
        default_endpoint: &str,
    ) -> crate::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let cred = config
            .cred
            .unwrap_or_else(|| crate::credentials::anonymous::Builder::new().build());
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing: config.tracing,
        })
    }

    /// Starts a request for `{endpoint}{path}`.
    ///
    /// All requests ask for JSON response bodies via `alt=json`.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
            .query(&[("alt", "json")])
    }

    /// Executes one request and decodes the response.
    ///
    /// Performs exactly one round trip: there is no retry loop and no error
    /// classification beyond the transport/service split. A non-success
    /// status always produces an error, never a decoded body.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let request = builder.build().map_err(Error::ser)?;
        if self.tracing {
            tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            if self.tracing {
                tracing::debug!(status = %response.status(), "request failed");
            }
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// A placeholder body type for requests without one.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let error = match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body and throws an EOF error if we try to parse
    // it with serde_json.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let body = match body {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response::from_parts(
        Parts::new().set_headers(headers),
        body,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
    struct Empty {}

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::BAD_REQUEST, "bad request")?;
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = http::HeaderMap::new();
        want.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("bad request")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use crate::error::status::ErrorItem;
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The thing is not there",
            "errors": [{
                "domain": "global",
                "reason": "notFound",
                "message": "The thing is not there",
            }]
        }});
        let response = resp_from_code_content(reqwest::StatusCode::NOT_FOUND, &body.to_string())?;
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        let want_status = Status::default()
            .set_code(404)
            .set_message("The thing is not there")
            .set_errors([ErrorItem::new()
                .set_domain("global")
                .set_reason("notFound")
                .set_message("The thing is not there")]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        Ok(())
    }

    #[tokio::test]
    async fn client_empty_content() -> TestResult {
        for (code, content) in [
            (reqwest::StatusCode::OK, "{}"),
            (reqwest::StatusCode::NO_CONTENT, "{}"),
            (reqwest::StatusCode::NO_CONTENT, ""),
        ] {
            let response = resp_from_code_content(code, content)?;
            assert!(response.status().is_success());
            let response = super::to_http_response::<Empty>(response).await;
            assert!(response.is_ok(), "{code} {content}");
            let body = response.unwrap().into_body();
            assert_eq!(body, Empty::default());
        }
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_empty_content() -> TestResult {
        // A 200 with an empty body is a malformed response, not a default
        // value.
        let response = resp_from_code_content(reqwest::StatusCode::OK, "")?;
        assert!(response.status().is_success());
        let response = super::to_http_response::<Empty>(response).await;
        assert!(response.is_err());
        assert!(response.err().unwrap().is_deserialization());
        Ok(())
    }
}
