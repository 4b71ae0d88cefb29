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

/// The request builder for [Addresses::aggregated_list][crate::client::Addresses::aggregated_list].
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

    /// Restricts the listing with a filter expression, e.g.
    /// `name eq my-address`.
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
    pub async fn send(self) -> Result<Response<model::AddressAggregatedList>> {
        let path = format!(
            "/projects/{}/aggregated/addresses",
            segment(require(&self.project, "project")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::AddressAggregatedList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::AddressAggregatedList, gax::error::Error> {
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

/// The request builder for [Addresses::delete][crate::client::Addresses::delete].
#[derive(Clone, Debug)]
pub struct Delete {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    region: String,
    address: String,
}

impl Delete {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            region: String::new(),
            address: String::new(),
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    pub fn set_address<T: Into<String>>(mut self, v: T) -> Self {
        self.address = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/regions/{}/addresses/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.region, "region")?),
            segment(require(&self.address, "address")?),
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

/// The request builder for [Addresses::get][crate::client::Addresses::get].
#[derive(Clone, Debug)]
pub struct Get {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    region: String,
    address: String,
}

impl Get {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            region: String::new(),
            address: String::new(),
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    pub fn set_address<T: Into<String>>(mut self, v: T) -> Self {
        self.address = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Address>> {
        let path = format!(
            "/projects/{}/regions/{}/addresses/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.region, "region")?),
            segment(require(&self.address, "address")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute::<NoBody, model::Address>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Get {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Addresses::insert][crate::client::Addresses::insert].
#[derive(Clone, Debug)]
pub struct Insert {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    region: String,
    body: Option<model::Address>,
}

impl Insert {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            region: String::new(),
            body: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the address resource to create.
    pub fn set_body<T: Into<model::Address>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/regions/{}/addresses",
            segment(require(&self.project, "project")?),
            segment(require(&self.region, "region")?),
        );
        let body = self
            .body
            .ok_or_else(|| gax::path_parameter::missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Address, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Insert {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Addresses::list][crate::client::Addresses::list].
#[derive(Clone, Debug)]
pub struct List {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    region: String,
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
            region: String::new(),
            filter: None,
            max_results: None,
            page_token: None,
        }
    }

    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
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
    pub async fn send(self) -> Result<Response<model::AddressList>> {
        let path = format!(
            "/projects/{}/regions/{}/addresses",
            segment(require(&self.project, "project")?),
            segment(require(&self.region, "region")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::AddressList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::AddressList, gax::error::Error> {
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
