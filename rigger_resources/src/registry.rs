//! Static mapping from kind names to resource templates.

use ::std::{collections::BTreeMap, marker::PhantomData};

use ::rigger_common::{
    anyhow::anyhow,
    error::{Result, RiggerError},
};

use crate::{
    client::ClusterClient,
    definition::ResourceDefinition,
    report::SimpleReporter,
    resource::{Existing, Managed, RemoteObject},
};

/// Stateless prototype that manufactures bound resources of one kind.
pub trait ResourceTemplate: Send + Sync {
    /// Kind name this template is registered under.
    fn kind(&self) -> &'static str;

    /// True iff the definition carries this template's kind.
    fn matches(&self, def: &ResourceDefinition) -> bool;

    /// Manufacture a managed resource bound to the definition.
    fn new_resource(
        &self,
        def: ResourceDefinition,
        client: &ClusterClient,
    ) -> Result<SimpleReporter>;

    /// Manufacture an observed-only resource bound by name.
    fn new_existing(&self, name: &str, client: &ClusterClient) -> SimpleReporter;
}

/// The template for kind `K`.
pub struct Template<K: RemoteObject>(PhantomData<K>);

impl<K: RemoteObject> Template<K> {
    pub fn boxed() -> Box<dyn ResourceTemplate> {
        Box::new(Self(PhantomData))
    }
}

impl<K: RemoteObject> ResourceTemplate for Template<K> {
    fn kind(&self) -> &'static str {
        K::KIND
    }

    fn matches(&self, def: &ResourceDefinition) -> bool {
        K::from_payload(&def.payload).is_some()
    }

    fn new_resource(
        &self,
        def: ResourceDefinition,
        client: &ClusterClient,
    ) -> Result<SimpleReporter> {
        Ok(SimpleReporter::new(Managed::<K>::from_definition(
            def, client,
        )?))
    }

    fn new_existing(&self, name: &str, client: &ClusterClient) -> SimpleReporter {
        SimpleReporter::new(Existing::<K>::new(name, client))
    }
}

/// Registry of resource kinds. Registration is complete before any lookup
/// happens; kinds are never replaced at runtime.
pub struct Registry {
    templates: BTreeMap<&'static str, Box<dyn ResourceTemplate>>,
}

impl Registry {
    /// Empty registry; use [`Registry::builtin`] for the standard kinds.
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registry holding a template for every kind this crate knows about.
    pub fn builtin() -> Self {
        use ::k8s_openapi::api::{
            apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet},
            batch::v1::Job,
            core::v1::{ConfigMap, PersistentVolumeClaim, Pod, Secret, Service},
        };

        let mut registry = Self::new();
        registry.add::<DaemonSet>();
        registry.add::<Job>();
        registry.add::<StatefulSet>();
        registry.add::<Pod>();
        registry.add::<ReplicaSet>();
        registry.add::<Service>();
        registry.add::<ConfigMap>();
        registry.add::<Secret>();
        registry.add::<Deployment>();
        registry.add::<PersistentVolumeClaim>();
        registry
    }

    /// Register a template under a kind name.
    pub fn register(&mut self, kind: &'static str, template: Box<dyn ResourceTemplate>) {
        self.templates.insert(kind, template);
    }

    fn add<K: RemoteObject>(&mut self) {
        self.register(K::KIND, Template::<K>::boxed());
    }

    /// Look up the template registered under `kind`.
    ///
    /// # Errors
    /// `NotFound` for a kind no template was registered under. Callers are
    /// expected to reject definitions of unknown kinds before construction.
    pub fn lookup(&self, kind: &str) -> Result<&dyn ResourceTemplate> {
        self.templates
            .get(kind)
            .map(|template| template.as_ref())
            .ok_or_else(|| RiggerError::not_found(anyhow!("unknown resource kind {:?}", kind)))
    }

    /// Names of every registered kind.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
