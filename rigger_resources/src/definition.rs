//! Declarative definitions of the resources to manage.

use ::std::collections::BTreeMap;

use ::k8s_openapi::api::{
    apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet},
    batch::v1::Job,
    core::v1::{ConfigMap, PersistentVolumeClaim, Pod, Secret, Service},
};
use ::rigger_common::serde::{Deserialize, Serialize};

use crate::resource::RemoteObject;

/// Free-form per-resource metadata: a flat string-to-string map that
/// kind-specific readiness predicates consult for behavioral hints such as
/// readiness thresholds. Kept untyped on purpose; each kind interprets its
/// own subset of keys.
pub type Metadata = BTreeMap<String, String>;

/// The payload of a resource definition, keyed by the kind name in its
/// serialized form. Exactly one kind per definition, by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rigger_common::serde")]
#[serde(rename_all = "lowercase")]
pub enum ResourcePayload {
    Pod(Pod),
    Job(Job),
    Deployment(Deployment),
    ReplicaSet(ReplicaSet),
    DaemonSet(DaemonSet),
    StatefulSet(StatefulSet),
    Service(Service),
    ConfigMap(ConfigMap),
    Secret(Secret),
    PersistentVolumeClaim(PersistentVolumeClaim),
}

impl ResourcePayload {
    /// Kind name the payload's template is registered under.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pod(_) => <Pod as RemoteObject>::KIND,
            Self::Job(_) => <Job as RemoteObject>::KIND,
            Self::Deployment(_) => <Deployment as RemoteObject>::KIND,
            Self::ReplicaSet(_) => <ReplicaSet as RemoteObject>::KIND,
            Self::DaemonSet(_) => <DaemonSet as RemoteObject>::KIND,
            Self::StatefulSet(_) => <StatefulSet as RemoteObject>::KIND,
            Self::Service(_) => <Service as RemoteObject>::KIND,
            Self::ConfigMap(_) => <ConfigMap as RemoteObject>::KIND,
            Self::Secret(_) => <Secret as RemoteObject>::KIND,
            Self::PersistentVolumeClaim(_) => <PersistentVolumeClaim as RemoteObject>::KIND,
        }
    }

    /// Name carried by the payload's object metadata.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Pod(p) => p.metadata.name.as_deref(),
            Self::Job(j) => j.metadata.name.as_deref(),
            Self::Deployment(d) => d.metadata.name.as_deref(),
            Self::ReplicaSet(r) => r.metadata.name.as_deref(),
            Self::DaemonSet(d) => d.metadata.name.as_deref(),
            Self::StatefulSet(s) => s.metadata.name.as_deref(),
            Self::Service(s) => s.metadata.name.as_deref(),
            Self::ConfigMap(c) => c.metadata.name.as_deref(),
            Self::Secret(s) => s.metadata.name.as_deref(),
            Self::PersistentVolumeClaim(p) => p.metadata.name.as_deref(),
        }
    }
}

/// One resource to be created, tagged with its kind, plus optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "rigger_common::serde")]
pub struct ResourceDefinition {
    #[serde(flatten)]
    pub payload: ResourcePayload,
    pub meta: Option<Metadata>,
}

impl ResourceDefinition {
    pub fn new(payload: ResourcePayload) -> Self {
        Self {
            payload,
            meta: None,
        }
    }

    pub fn with_meta(payload: ResourcePayload, meta: Metadata) -> Self {
        Self {
            payload,
            meta: Some(meta),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    pub fn name(&self) -> Option<&str> {
        self.payload.name()
    }
}
