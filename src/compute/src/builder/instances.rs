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
use gax::path_parameter::{missing, require, segment};
use gax::query_parameter;
use gax::response::Response;
use reqwest::Method;

/// The request builder for [Instances::add_access_config][crate::client::Instances::add_access_config].
#[derive(Clone, Debug)]
pub struct AddAccessConfig {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    network_interface: String,
    body: Option<model::AccessConfig>,
}

impl AddAccessConfig {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
            network_interface: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the name of the network interface to add the config to.
    pub fn set_network_interface<T: Into<String>>(mut self, v: T) -> Self {
        self.network_interface = v.into();
        self
    }

    /// Sets the access config to add.
    pub fn set_body<T: Into<model::AccessConfig>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/addAccessConfig",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        require(&self.network_interface, "networkInterface")?;
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        let builder =
            query_parameter::required(builder, "networkInterface", &self.network_interface);
        self.inner
            .execute::<model::AccessConfig, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for AddAccessConfig {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::aggregated_list][crate::client::Instances::aggregated_list].
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
    pub async fn send(self) -> Result<Response<model::InstanceAggregatedList>> {
        let path = format!(
            "/projects/{}/aggregated/instances",
            segment(require(&self.project, "project")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::InstanceAggregatedList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::InstanceAggregatedList, gax::error::Error> {
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

/// The request builder for [Instances::attach_disk][crate::client::Instances::attach_disk].
#[derive(Clone, Debug)]
pub struct AttachDisk {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    body: Option<model::AttachedDisk>,
}

impl AttachDisk {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the disk to attach.
    pub fn set_body<T: Into<model::AttachedDisk>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/attachDisk",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::AttachedDisk, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for AttachDisk {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::delete][crate::client::Instances::delete].
#[derive(Clone, Debug)]
pub struct Delete {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl Delete {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
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

/// The request builder for [Instances::delete_access_config][crate::client::Instances::delete_access_config].
#[derive(Clone, Debug)]
pub struct DeleteAccessConfig {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    access_config: String,
    network_interface: String,
}

impl DeleteAccessConfig {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
            access_config: String::new(),
            network_interface: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the name of the access config to delete.
    pub fn set_access_config<T: Into<String>>(mut self, v: T) -> Self {
        self.access_config = v.into();
        self
    }

    /// Sets the name of the network interface holding the config.
    pub fn set_network_interface<T: Into<String>>(mut self, v: T) -> Self {
        self.network_interface = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/deleteAccessConfig",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        require(&self.access_config, "accessConfig")?;
        require(&self.network_interface, "networkInterface")?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = query_parameter::required(builder, "accessConfig", &self.access_config);
        let builder =
            query_parameter::required(builder, "networkInterface", &self.network_interface);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for DeleteAccessConfig {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::detach_disk][crate::client::Instances::detach_disk].
#[derive(Clone, Debug)]
pub struct DetachDisk {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    device_name: String,
}

impl DetachDisk {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
            device_name: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the device name of the disk to detach.
    pub fn set_device_name<T: Into<String>>(mut self, v: T) -> Self {
        self.device_name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/detachDisk",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        require(&self.device_name, "deviceName")?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = query_parameter::required(builder, "deviceName", &self.device_name);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for DetachDisk {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::get][crate::client::Instances::get].
#[derive(Clone, Debug)]
pub struct Get {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl Get {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Instance>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute::<NoBody, model::Instance>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Get {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::get_serial_port_output][crate::client::Instances::get_serial_port_output].
#[derive(Clone, Debug)]
pub struct GetSerialPortOutput {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl GetSerialPortOutput {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::SerialPortOutput>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/serialPort",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute::<NoBody, model::SerialPortOutput>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for GetSerialPortOutput {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::insert][crate::client::Instances::insert].
#[derive(Clone, Debug)]
pub struct Insert {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    body: Option<model::Instance>,
}

impl Insert {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
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

    /// Sets the instance resource to create.
    pub fn set_body<T: Into<model::Instance>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
        );
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Instance, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Insert {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::list][crate::client::Instances::list].
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
    pub async fn send(self) -> Result<Response<model::InstanceList>> {
        let path = format!(
            "/projects/{}/zones/{}/instances",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = query_parameter::optional(builder, "filter", &self.filter);
        let builder = query_parameter::optional(builder, "maxResults", &self.max_results);
        let builder = query_parameter::optional(builder, "pageToken", &self.page_token);
        self.inner
            .execute::<NoBody, model::InstanceList>(builder, None, self.options)
            .await
    }

    /// Streams the pages of the response.
    pub fn by_page(self) -> Paginator<model::InstanceList, gax::error::Error> {
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

/// The request builder for [Instances::reset][crate::client::Instances::reset].
#[derive(Clone, Debug)]
pub struct Reset {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl Reset {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/reset",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Reset {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::set_metadata][crate::client::Instances::set_metadata].
#[derive(Clone, Debug)]
pub struct SetMetadata {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    body: Option<model::Metadata>,
}

impl SetMetadata {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
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
            "/projects/{}/zones/{}/instances/{}/setMetadata",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Metadata, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for SetMetadata {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::set_tags][crate::client::Instances::set_tags].
#[derive(Clone, Debug)]
pub struct SetTags {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
    body: Option<model::Tags>,
}

impl SetTags {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the replacement tags, including the current fingerprint.
    pub fn set_body<T: Into<model::Tags>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/setTags",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let body = self.body.ok_or_else(|| missing("body"))?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<model::Tags, model::Operation>(builder, Some(body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for SetTags {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::start][crate::client::Instances::start].
#[derive(Clone, Debug)]
pub struct Start {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl Start {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/start",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Start {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Instances::stop][crate::client::Instances::stop].
#[derive(Clone, Debug)]
pub struct Stop {
    inner: RestClient,
    options: RequestOptions,
    project: String,
    zone: String,
    instance: String,
}

impl Stop {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
            project: String::new(),
            zone: String::new(),
            instance: String::new(),
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

    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<model::Operation>> {
        let path = format!(
            "/projects/{}/zones/{}/instances/{}/stop",
            segment(require(&self.project, "project")?),
            segment(require(&self.zone, "zone")?),
            segment(require(&self.instance, "instance")?),
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute::<NoBody, model::Operation>(builder, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for Stop {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
