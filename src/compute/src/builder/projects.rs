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

use crate::model;
use gax::Result;
use gax::http_client::{NoBody, RestClient};
use gax::options::RequestOptions;
use gax::path_parameter::{missing, require, segment};
use gax::response::Response;
use reqwest::Method;

/// The request builder for [Projects::get][crate::client::Projects::get].
#[derive(Clone, Debug)]
pub struct Get {
    inner: RestClient,
    options: RequestOptions,
    project: String,
}

impl Get {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Project>> {
        let path = format!("/projects/{}", segment(require(&self.project, "project")?));
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute::<NoBody, model::Project>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Get {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Projects::set_common_instance_metadata][crate::client::Projects::set_common_instance_metadata].
#[derive(Clone, Debug)]
pub struct SetCommonInstanceMetadata {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    body: Option<model::Metadata>,
}

impl SetCommonInstanceMetadata {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            body: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sets the replacement metadata, including the current fingerprint.
    pub fn set_body<T: Into<model::Metadata>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/setCommonInstanceMetadata",
            segment(require(&self.project, "project")?),
        );
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Metadata, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for SetCommonInstanceMetadata {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
