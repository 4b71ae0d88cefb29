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

//! The service client and the per-collection clients.
//!
//! One [Client] holds the connection: the HTTP client, the resolved
//! endpoint, and the credentials. The per-collection clients returned by its
//! accessors are lightweight views sharing that connection; creating them is
//! free and they may be used concurrently.

use crate::builder;
use gax::credentials::Credentials;
use gax::http_client::RestClient;

/// A client for the Compute Engine v1 API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use gce_compute_v1::client::Client;
/// let client = Client::builder().build().await?;
/// let zones = client.zones().list().set_project("my-project").send().await?;
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: RestClient,
}

impl Client {
    /// Returns a builder to configure and create the client.
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    async fn new(
        config: gax::client_builder::internal::ClientConfig<Credentials>,
    ) -> gax::client_builder::Result<Self> {
        let inner = RestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    /// The addresses collection.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            inner: self.inner.clone(),
        }
    }

    /// The disks collection.
    pub fn disks(&self) -> Disks {
        Disks {
            inner: self.inner.clone(),
        }
    }

    /// The firewalls collection.
    pub fn firewalls(&self) -> Firewalls {
        Firewalls {
            inner: self.inner.clone(),
        }
    }

    /// The project-wide operations collection.
    pub fn global_operations(&self) -> GlobalOperations {
        GlobalOperations {
            inner: self.inner.clone(),
        }
    }

    /// The images collection.
    pub fn images(&self) -> Images {
        Images {
            inner: self.inner.clone(),
        }
    }

    /// The instances collection.
    pub fn instances(&self) -> Instances {
        Instances {
            inner: self.inner.clone(),
        }
    }

    /// The machine types collection.
    pub fn machine_types(&self) -> MachineTypes {
        MachineTypes {
            inner: self.inner.clone(),
        }
    }

    /// The networks collection.
    pub fn networks(&self) -> Networks {
        Networks {
            inner: self.inner.clone(),
        }
    }

    /// The projects collection.
    pub fn projects(&self) -> Projects {
        Projects {
            inner: self.inner.clone(),
        }
    }

    /// The per-region operations collection.
    pub fn region_operations(&self) -> RegionOperations {
        RegionOperations {
            inner: self.inner.clone(),
        }
    }

    /// The regions collection.
    pub fn regions(&self) -> Regions {
        Regions {
            inner: self.inner.clone(),
        }
    }

    /// The routes collection.
    pub fn routes(&self) -> Routes {
        Routes {
            inner: self.inner.clone(),
        }
    }

    /// The snapshots collection.
    pub fn snapshots(&self) -> Snapshots {
        Snapshots {
            inner: self.inner.clone(),
        }
    }

    /// The target pools collection.
    pub fn target_pools(&self) -> TargetPools {
        TargetPools {
            inner: self.inner.clone(),
        }
    }

    /// The URL maps collection.
    pub fn url_maps(&self) -> UrlMaps {
        UrlMaps {
            inner: self.inner.clone(),
        }
    }

    /// The per-zone operations collection.
    pub fn zone_operations(&self) -> ZoneOperations {
        ZoneOperations {
            inner: self.inner.clone(),
        }
    }

    /// The zones collection.
    pub fn zones(&self) -> Zones {
        Zones {
            inner: self.inner.clone(),
        }
    }
}

/// The builder type for [Client].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, Credentials>;

#[doc(hidden)]
pub mod client_builder {
    use super::Client;
    use gax::client_builder::internal::{ClientConfig, ClientFactory};
    use gax::credentials::Credentials;

    pub struct Factory;

    impl ClientFactory for Factory {
        type Client = Client;
        type Credentials = Credentials;
        async fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> gax::client_builder::Result<Self::Client> {
            Client::new(config).await
        }
    }
}

/// Works with reserved IP addresses.
#[derive(Clone, Debug)]
pub struct Addresses {
    pub(crate) inner: RestClient,
}

impl Addresses {
    /// Lists addresses grouped by region.
    pub fn aggregated_list(&self) -> builder::addresses::AggregatedList {
        builder::addresses::AggregatedList::new(self.inner.clone())
    }

    /// Deletes an address.
    pub fn delete(&self) -> builder::addresses::Delete {
        builder::addresses::Delete::new(self.inner.clone())
    }

    /// Returns one address.
    pub fn get(&self) -> builder::addresses::Get {
        builder::addresses::Get::new(self.inner.clone())
    }

    /// Reserves a new address.
    pub fn insert(&self) -> builder::addresses::Insert {
        builder::addresses::Insert::new(self.inner.clone())
    }

    /// Lists the addresses of one region.
    pub fn list(&self) -> builder::addresses::List {
        builder::addresses::List::new(self.inner.clone())
    }
}

/// Works with persistent disks.
#[derive(Clone, Debug)]
pub struct Disks {
    pub(crate) inner: RestClient,
}

impl Disks {
    /// Lists disks grouped by zone.
    pub fn aggregated_list(&self) -> builder::disks::AggregatedList {
        builder::disks::AggregatedList::new(self.inner.clone())
    }

    /// Creates a snapshot of a disk.
    pub fn create_snapshot(&self) -> builder::disks::CreateSnapshot {
        builder::disks::CreateSnapshot::new(self.inner.clone())
    }

    /// Deletes a disk.
    pub fn delete(&self) -> builder::disks::Delete {
        builder::disks::Delete::new(self.inner.clone())
    }

    /// Returns one disk.
    pub fn get(&self) -> builder::disks::Get {
        builder::disks::Get::new(self.inner.clone())
    }

    /// Creates a disk, optionally from a source image.
    pub fn insert(&self) -> builder::disks::Insert {
        builder::disks::Insert::new(self.inner.clone())
    }

    /// Lists the disks of one zone.
    pub fn list(&self) -> builder::disks::List {
        builder::disks::List::new(self.inner.clone())
    }
}

/// Works with firewall rules.
#[derive(Clone, Debug)]
pub struct Firewalls {
    pub(crate) inner: RestClient,
}

impl Firewalls {
    /// Deletes a firewall rule.
    pub fn delete(&self) -> builder::firewalls::Delete {
        builder::firewalls::Delete::new(self.inner.clone())
    }

    /// Returns one firewall rule.
    pub fn get(&self) -> builder::firewalls::Get {
        builder::firewalls::Get::new(self.inner.clone())
    }

    /// Creates a firewall rule.
    pub fn insert(&self) -> builder::firewalls::Insert {
        builder::firewalls::Insert::new(self.inner.clone())
    }

    /// Lists the firewall rules of a project.
    pub fn list(&self) -> builder::firewalls::List {
        builder::firewalls::List::new(self.inner.clone())
    }

    /// Updates a firewall rule; unset fields keep their current value.
    pub fn patch(&self) -> builder::firewalls::Patch {
        builder::firewalls::Patch::new(self.inner.clone())
    }

    /// Replaces a firewall rule.
    pub fn update(&self) -> builder::firewalls::Update {
        builder::firewalls::Update::new(self.inner.clone())
    }
}

/// Works with project-wide operations.
#[derive(Clone, Debug)]
pub struct GlobalOperations {
    pub(crate) inner: RestClient,
}

impl GlobalOperations {
    /// Lists operations grouped by scope.
    pub fn aggregated_list(&self) -> builder::global_operations::AggregatedList {
        builder::global_operations::AggregatedList::new(self.inner.clone())
    }

    /// Deletes an operation resource.
    pub fn delete(&self) -> builder::global_operations::Delete {
        builder::global_operations::Delete::new(self.inner.clone())
    }

    /// Returns one operation.
    pub fn get(&self) -> builder::global_operations::Get {
        builder::global_operations::Get::new(self.inner.clone())
    }

    /// Lists the project-wide operations.
    pub fn list(&self) -> builder::global_operations::List {
        builder::global_operations::List::new(self.inner.clone())
    }
}

/// Works with disk images.
#[derive(Clone, Debug)]
pub struct Images {
    pub(crate) inner: RestClient,
}

impl Images {
    /// Deletes an image.
    pub fn delete(&self) -> builder::images::Delete {
        builder::images::Delete::new(self.inner.clone())
    }

    /// Sets the deprecation status of an image.
    pub fn deprecate(&self) -> builder::images::Deprecate {
        builder::images::Deprecate::new(self.inner.clone())
    }

    /// Returns one image.
    pub fn get(&self) -> builder::images::Get {
        builder::images::Get::new(self.inner.clone())
    }

    /// Creates an image.
    pub fn insert(&self) -> builder::images::Insert {
        builder::images::Insert::new(self.inner.clone())
    }

    /// Lists the images of a project.
    pub fn list(&self) -> builder::images::List {
        builder::images::List::new(self.inner.clone())
    }
}

/// Works with virtual machine instances.
#[derive(Clone, Debug)]
pub struct Instances {
    pub(crate) inner: RestClient,
}

impl Instances {
    /// Adds an access config to an instance's network interface.
    pub fn add_access_config(&self) -> builder::instances::AddAccessConfig {
        builder::instances::AddAccessConfig::new(self.inner.clone())
    }

    /// Lists instances grouped by zone.
    pub fn aggregated_list(&self) -> builder::instances::AggregatedList {
        builder::instances::AggregatedList::new(self.inner.clone())
    }

    /// Attaches an existing disk to an instance.
    ///
    /// Requires [scope::COMPUTE][crate::scope::COMPUTE] or broader.
    pub fn attach_disk(&self) -> builder::instances::AttachDisk {
        builder::instances::AttachDisk::new(self.inner.clone())
    }

    /// Deletes an instance.
    pub fn delete(&self) -> builder::instances::Delete {
        builder::instances::Delete::new(self.inner.clone())
    }

    /// Removes an access config from an instance's network interface.
    pub fn delete_access_config(&self) -> builder::instances::DeleteAccessConfig {
        builder::instances::DeleteAccessConfig::new(self.inner.clone())
    }

    /// Detaches a disk from an instance.
    pub fn detach_disk(&self) -> builder::instances::DetachDisk {
        builder::instances::DetachDisk::new(self.inner.clone())
    }

    /// Returns one instance.
    pub fn get(&self) -> builder::instances::Get {
        builder::instances::Get::new(self.inner.clone())
    }

    /// Returns the instance's serial port output.
    pub fn get_serial_port_output(&self) -> builder::instances::GetSerialPortOutput {
        builder::instances::GetSerialPortOutput::new(self.inner.clone())
    }

    /// Creates an instance.
    pub fn insert(&self) -> builder::instances::Insert {
        builder::instances::Insert::new(self.inner.clone())
    }

    /// Lists the instances of one zone.
    pub fn list(&self) -> builder::instances::List {
        builder::instances::List::new(self.inner.clone())
    }

    /// Performs a hard reset on the instance.
    pub fn reset(&self) -> builder::instances::Reset {
        builder::instances::Reset::new(self.inner.clone())
    }

    /// Replaces the instance's metadata.
    pub fn set_metadata(&self) -> builder::instances::SetMetadata {
        builder::instances::SetMetadata::new(self.inner.clone())
    }

    /// Replaces the instance's network tags.
    pub fn set_tags(&self) -> builder::instances::SetTags {
        builder::instances::SetTags::new(self.inner.clone())
    }

    /// Starts a stopped instance.
    pub fn start(&self) -> builder::instances::Start {
        builder::instances::Start::new(self.inner.clone())
    }

    /// Stops a running instance.
    pub fn stop(&self) -> builder::instances::Stop {
        builder::instances::Stop::new(self.inner.clone())
    }
}

/// Reads the catalog of machine types.
#[derive(Clone, Debug)]
pub struct MachineTypes {
    pub(crate) inner: RestClient,
}

impl MachineTypes {
    /// Lists machine types grouped by zone.
    pub fn aggregated_list(&self) -> builder::machine_types::AggregatedList {
        builder::machine_types::AggregatedList::new(self.inner.clone())
    }

    /// Returns one machine type.
    pub fn get(&self) -> builder::machine_types::Get {
        builder::machine_types::Get::new(self.inner.clone())
    }

    /// Lists the machine types of one zone.
    pub fn list(&self) -> builder::machine_types::List {
        builder::machine_types::List::new(self.inner.clone())
    }
}

/// Works with networks.
#[derive(Clone, Debug)]
pub struct Networks {
    pub(crate) inner: RestClient,
}

impl Networks {
    /// Deletes a network.
    pub fn delete(&self) -> builder::networks::Delete {
        builder::networks::Delete::new(self.inner.clone())
    }

    /// Returns one network.
    pub fn get(&self) -> builder::networks::Get {
        builder::networks::Get::new(self.inner.clone())
    }

    /// Creates a network.
    pub fn insert(&self) -> builder::networks::Insert {
        builder::networks::Insert::new(self.inner.clone())
    }

    /// Lists the networks of a project.
    pub fn list(&self) -> builder::networks::List {
        builder::networks::List::new(self.inner.clone())
    }
}

/// Reads and updates project-level compute settings.
#[derive(Clone, Debug)]
pub struct Projects {
    pub(crate) inner: RestClient,
}

impl Projects {
    /// Returns the project resource.
    pub fn get(&self) -> builder::projects::Get {
        builder::projects::Get::new(self.inner.clone())
    }

    /// Replaces the metadata common to all instances of the project.
    pub fn set_common_instance_metadata(&self) -> builder::projects::SetCommonInstanceMetadata {
        builder::projects::SetCommonInstanceMetadata::new(self.inner.clone())
    }
}

/// Works with per-region operations.
#[derive(Clone, Debug)]
pub struct RegionOperations {
    pub(crate) inner: RestClient,
}

impl RegionOperations {
    /// Deletes an operation resource.
    pub fn delete(&self) -> builder::region_operations::Delete {
        builder::region_operations::Delete::new(self.inner.clone())
    }

    /// Returns one operation.
    pub fn get(&self) -> builder::region_operations::Get {
        builder::region_operations::Get::new(self.inner.clone())
    }

    /// Lists the operations of one region.
    pub fn list(&self) -> builder::region_operations::List {
        builder::region_operations::List::new(self.inner.clone())
    }
}

/// Reads the catalog of regions.
#[derive(Clone, Debug)]
pub struct Regions {
    pub(crate) inner: RestClient,
}

impl Regions {
    /// Returns one region.
    pub fn get(&self) -> builder::regions::Get {
        builder::regions::Get::new(self.inner.clone())
    }

    /// Lists the regions available to a project.
    pub fn list(&self) -> builder::regions::List {
        builder::regions::List::new(self.inner.clone())
    }
}

/// Works with routes.
#[derive(Clone, Debug)]
pub struct Routes {
    pub(crate) inner: RestClient,
}

impl Routes {
    /// Deletes a route.
    pub fn delete(&self) -> builder::routes::Delete {
        builder::routes::Delete::new(self.inner.clone())
    }

    /// Returns one route.
    pub fn get(&self) -> builder::routes::Get {
        builder::routes::Get::new(self.inner.clone())
    }

    /// Creates a route.
    pub fn insert(&self) -> builder::routes::Insert {
        builder::routes::Insert::new(self.inner.clone())
    }

    /// Lists the routes of a project.
    pub fn list(&self) -> builder::routes::List {
        builder::routes::List::new(self.inner.clone())
    }
}

/// Works with disk snapshots.
#[derive(Clone, Debug)]
pub struct Snapshots {
    pub(crate) inner: RestClient,
}

impl Snapshots {
    /// Deletes a snapshot.
    pub fn delete(&self) -> builder::snapshots::Delete {
        builder::snapshots::Delete::new(self.inner.clone())
    }

    /// Returns one snapshot.
    pub fn get(&self) -> builder::snapshots::Get {
        builder::snapshots::Get::new(self.inner.clone())
    }

    /// Lists the snapshots of a project.
    pub fn list(&self) -> builder::snapshots::List {
        builder::snapshots::List::new(self.inner.clone())
    }
}

/// Works with target pools.
#[derive(Clone, Debug)]
pub struct TargetPools {
    pub(crate) inner: RestClient,
}

impl TargetPools {
    /// Adds instances to a target pool.
    pub fn add_instance(&self) -> builder::target_pools::AddInstance {
        builder::target_pools::AddInstance::new(self.inner.clone())
    }

    /// Deletes a target pool.
    pub fn delete(&self) -> builder::target_pools::Delete {
        builder::target_pools::Delete::new(self.inner.clone())
    }

    /// Returns one target pool.
    pub fn get(&self) -> builder::target_pools::Get {
        builder::target_pools::Get::new(self.inner.clone())
    }

    /// Creates a target pool.
    pub fn insert(&self) -> builder::target_pools::Insert {
        builder::target_pools::Insert::new(self.inner.clone())
    }

    /// Lists the target pools of one region.
    pub fn list(&self) -> builder::target_pools::List {
        builder::target_pools::List::new(self.inner.clone())
    }

    /// Removes instances from a target pool.
    pub fn remove_instance(&self) -> builder::target_pools::RemoveInstance {
        builder::target_pools::RemoveInstance::new(self.inner.clone())
    }
}

/// Works with URL maps.
#[derive(Clone, Debug)]
pub struct UrlMaps {
    pub(crate) inner: RestClient,
}

impl UrlMaps {
    /// Deletes a URL map.
    pub fn delete(&self) -> builder::url_maps::Delete {
        builder::url_maps::Delete::new(self.inner.clone())
    }

    /// Returns one URL map.
    pub fn get(&self) -> builder::url_maps::Get {
        builder::url_maps::Get::new(self.inner.clone())
    }

    /// Creates a URL map.
    pub fn insert(&self) -> builder::url_maps::Insert {
        builder::url_maps::Insert::new(self.inner.clone())
    }

    /// Lists the URL maps of a project.
    pub fn list(&self) -> builder::url_maps::List {
        builder::url_maps::List::new(self.inner.clone())
    }

    /// Updates a URL map; unset fields keep their current value.
    pub fn patch(&self) -> builder::url_maps::Patch {
        builder::url_maps::Patch::new(self.inner.clone())
    }

    /// Replaces a URL map.
    pub fn update(&self) -> builder::url_maps::Update {
        builder::url_maps::Update::new(self.inner.clone())
    }

    /// Validates a URL map without storing it.
    pub fn validate(&self) -> builder::url_maps::Validate {
        builder::url_maps::Validate::new(self.inner.clone())
    }
}

/// Works with per-zone operations.
#[derive(Clone, Debug)]
pub struct ZoneOperations {
    pub(crate) inner: RestClient,
}

impl ZoneOperations {
    /// Deletes an operation resource.
    pub fn delete(&self) -> builder::zone_operations::Delete {
        builder::zone_operations::Delete::new(self.inner.clone())
    }

    /// Returns one operation.
    pub fn get(&self) -> builder::zone_operations::Get {
        builder::zone_operations::Get::new(self.inner.clone())
    }

    /// Lists the operations of one zone.
    pub fn list(&self) -> builder::zone_operations::List {
        builder::zone_operations::List::new(self.inner.clone())
    }
}

/// Reads the catalog of zones.
#[derive(Clone, Debug)]
pub struct Zones {
    pub(crate) inner: RestClient,
}

impl Zones {
    /// Returns one zone.
    pub fn get(&self) -> builder::zones::Get {
        builder::zones::Get::new(self.inner.clone())
    }

    /// Lists the zones available to a project.
    pub fn list(&self) -> builder::zones::List {
        builder::zones::List::new(self.inner.clone())
    }
}
