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
use gax::paginator::Paginator;
use gax::path_parameter::{require, segment};
use gax::query_parameter;
use gax::response::Response;
use reqwest::Method;

/// The request builder for [Disks::aggregated_list][crate::client::Disks::aggregated_list].
#[derive(Clone, Debug)]
pub struct AggregatedList {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    filter: Option<String>,
    max_results: Option<u32>,
    page_token: Option<String>,
}

impl AggregatedList {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            filter: None,
            max_results: None,
            page_token: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::DiskAggregatedList>> {
        let path = format!(
            "/projects/{}/aggregated/disks",
            segment(require(&self.project, "project")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::DiskAggregatedList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::DiskAggregatedList, gax::error::Error> {
        let token = self.page_token.clone().unwrap_or_default();
        let builder = self;
        let execute = move |token: String| {
            let mut builder = builder.clone();
            builder.page_token = if token.is_empty() { None } else { Some(token) };
            async move { builder.send().await.map(|r| r.into_body()) }
        };
        Paginator::new(token, execute)
    }
}

impl gax::options::internal::RequestBuilder for AggregatedList {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Disks::create_snapshot][crate::client::Disks::create_snapshot].
#[derive(Clone, Debug)]
pub struct CreateSnapshot {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    disk: String,
    body: Option<model::Snapshot>,
}

impl CreateSnapshot {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            disk: String::new(),
            body: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    pub fn set_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.disk = v.into();
        self
    }

    /// Sets the snapshot resource to create.
    pub fn set_body<T: Into<model::Snapshot>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/disks/{}/createSnapshot",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.disk, "disk")?),
        );
        let body = self
            .body
            .ok_or_else(|| gax::path_parameter::missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Snapshot, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for CreateSnapshot {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Disks::delete][crate::client::Disks::delete].
#[derive(Clone, Debug)]
pub struct Delete {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    disk: String,
}

impl Delete {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            disk: String::new(),
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    pub fn set_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.disk = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/disks/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.disk, "disk")?),
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Delete {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Disks::get][crate::client::Disks::get].
#[derive(Clone, Debug)]
pub struct Get {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    disk: String,
}

impl Get {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            disk: String::new(),
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    pub fn set_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.disk = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Disk>> {
        let path = format!(
            "/projects/{}/zones/{}/disks/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.disk, "disk")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute::<NoBody, model::Disk>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Get {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Disks::insert][crate::client::Disks::insert].
#[derive(Clone, Debug)]
pub struct Insert {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    source_image: Option<String>,
    body: Option<model::Disk>,
}

impl Insert {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            source_image: None,
            body: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the source image to restore the disk from.
    pub fn set_source_image<T: Into<String>>(mut self, v: T) -> Self {
        self.source_image = Some(v.into());
        self
    }

    /// Sets the disk resource to create.
    pub fn set_body<T: Into<model::Disk>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/disks",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
        );
        let body = self
            .body
            .ok_or_else(|| gax::path_parameter::missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = query_parameter::optional(builder, "sourceImage", &self.source_image);
        self.inner
            .execute::<model::Disk, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Insert {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Disks::list][crate::client::Disks::list].
#[derive(Clone, Debug)]
pub struct List {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    filter: Option<String>,
    max_results: Option<u32>,
    page_token: Option<String>,
}

impl List {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            filter: None,
            max_results: None,
            page_token: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::DiskList>> {
        let path = format!(
            "/projects/{}/zones/{}/disks",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::DiskList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::DiskList, gax::error::Error> {
        let token = self.page_token.clone().unwrap_or_default();
        let builder = self;
        let execute = move |token: String| {
            let mut builder = builder.clone();
            builder.page_token = if token.is_empty() { None } else { Some(token) };
            async move { builder.send().await.map(|r| r.into_body()) }
        };
        Paginator::new(token, execute)
    }
}

impl gax::options::internal::RequestBuilder for List {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
