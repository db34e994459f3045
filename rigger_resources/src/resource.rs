//! The polymorphic capability contract implemented by every resource kind.

use ::std::fmt::Debug;

use ::async_trait::async_trait;
use ::k8s_openapi::NamespaceResourceScope;
use ::kube::{api::PostParams, Api, Resource as KubeResource};
use ::rigger_common::{
    anyhow::anyhow,
    error::{Result, RiggerError},
    serde::{de::DeserializeOwned, Serialize},
    tracing::{debug, info},
};

use crate::{
    client::ClusterClient,
    definition::{Metadata, ResourceDefinition, ResourcePayload},
    readiness::Readiness,
};

/// Binds a Kubernetes object type to the lifecycle contract: the kind name
/// it is registered under, payload extraction from definitions, and the
/// kind-specific readiness predicate.
pub trait RemoteObject:
    KubeResource<Scope = NamespaceResourceScope, DynamicType = ()>
    + Clone
    + Debug
    + DeserializeOwned
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// Kind name used for registry lookup and resource keys.
    const KIND: &'static str;

    /// The payload of this kind carried by the definition, if any.
    fn from_payload(payload: &ResourcePayload) -> Option<&Self>;

    /// Take the payload of this kind out of the definition, if any.
    fn take_payload(payload: ResourcePayload) -> Option<Self>;

    /// Kind-specific readiness predicate over the freshly observed object.
    fn readiness(&self, meta: Option<&Metadata>) -> Result<Readiness>;
}

/// Capability contract shared by every managed or merely observed resource.
///
/// Implementations never hold remote state: `status` re-reads the remote
/// object on every call, and nothing is mutated locally afterwards.
// TODO: drop async_trait once async fns in dyn-compatible traits are supported
#[async_trait]
pub trait Resource: Send + Sync {
    /// Stable identity of the bound remote object, `"<kind>/<name>"`.
    fn key(&self) -> String;

    /// Create the remote object unless it already exists.
    ///
    /// The existence check turns a re-driven creation into a no-op instead
    /// of a duplicate-object error. Another actor can still create the
    /// object between the check and the create call; the remote system
    /// adjudicates that race.
    async fn create(&mut self) -> Result<()>;

    /// Delete the remote object unconditionally.
    /// Deleting an already absent object is the remote system's concern.
    async fn delete(&self) -> Result<()>;

    /// Re-read the remote object by name and evaluate its readiness.
    ///
    /// # Return
    /// - `Ok(Readiness::Ready)` if the object satisfies its kind's predicate.
    /// - `Ok(Readiness::NotReady)` if the object exists but does not yet.
    /// - `Err(e)` with `e.is_not_found()` if the object does not exist,
    ///   which is a legitimate state before `create` has run.
    /// - `Err(_)` if the remote read itself fails.
    async fn status(&self, meta: Option<&Metadata>) -> Result<Readiness>;

    /// True iff `def` carries this resource's kind and its payload names
    /// the object called `name`.
    fn name_matches(&self, def: &ResourceDefinition, name: &str) -> bool;
}

pub(crate) fn resource_key(kind: &str, name: &str) -> String {
    format!("{}/{}", kind, name)
}

fn payload_names<K: RemoteObject>(def: &ResourceDefinition, name: &str) -> bool {
    K::from_payload(&def.payload).is_some_and(|object| object.meta().name.as_deref() == Some(name))
}

/// Fetch the remote object by name, mapping absence to a `NotFound` error.
async fn read_remote<K: RemoteObject>(api: &Api<K>, name: &str) -> Result<K> {
    api.get_opt(name)
        .await
        .map_err(RiggerError::remote_call)?
        .ok_or_else(|| {
            RiggerError::not_found(anyhow!("{} does not exist", resource_key(K::KIND, name)))
        })
}

/// A resource owned by the orchestration: holds the declarative payload and
/// creates, deletes and observes the remote object bound to it.
pub struct Managed<K: RemoteObject> {
    object: K,
    name: String,
    meta: Option<Metadata>,
    api: Api<K>,
}

impl<K: RemoteObject> Managed<K> {
    /// Bind the definition's payload of kind `K` to the cluster.
    ///
    /// # Errors
    /// `NotAllowed` if the definition holds no payload of kind `K`,
    /// or the payload does not name its object.
    pub fn from_definition(def: ResourceDefinition, client: &ClusterClient) -> Result<Self> {
        let ResourceDefinition { payload, meta } = def;
        let object = K::take_payload(payload).ok_or_else(|| {
            RiggerError::not_allowed(anyhow!("definition does not hold a {} payload", K::KIND))
        })?;
        Self::new(object, meta, client)
    }

    /// Bind an already built payload to the cluster.
    pub fn new(object: K, meta: Option<Metadata>, client: &ClusterClient) -> Result<Self> {
        let name = object.meta().name.clone().ok_or_else(|| {
            RiggerError::not_allowed(anyhow!("{} definition must name its object", K::KIND))
        })?;
        Ok(Self {
            object,
            name,
            meta,
            api: client.api(),
        })
    }
}

#[async_trait]
impl<K: RemoteObject> Resource for Managed<K> {
    fn key(&self) -> String {
        resource_key(K::KIND, &self.name)
    }

    async fn create(&mut self) -> Result<()> {
        let existing = self
            .api
            .get_opt(&self.name)
            .await
            .map_err(RiggerError::remote_call)?;
        match existing {
            Some(_) => {
                debug!("{} already exists, skipping creation", self.key());
                Ok(())
            }
            None => {
                info!("Creating {}", self.key());
                // keep the server-returned representation so that fields
                // assigned on creation are visible to later callers
                self.object = self
                    .api
                    .create(&PostParams::default(), &self.object)
                    .await
                    .map_err(RiggerError::remote_call)?;
                Ok(())
            }
        }
    }

    async fn delete(&self) -> Result<()> {
        debug!("Deleting {}", self.key());
        self.api
            .delete(&self.name, &Default::default())
            .await
            .map_err(RiggerError::remote_call)?;
        Ok(())
    }

    async fn status(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        let observed = read_remote(&self.api, &self.name).await?;
        observed.readiness(meta.or(self.meta.as_ref()))
    }

    fn name_matches(&self, def: &ResourceDefinition, name: &str) -> bool {
        payload_names::<K>(def, name)
    }
}

/// A resource the orchestration depends on but does not own. Creation
/// degenerates to an existence check: a missing object is a configuration
/// error, never a request to create it.
pub struct Existing<K: RemoteObject> {
    name: String,
    api: Api<K>,
}

impl<K: RemoteObject> Existing<K> {
    pub fn new(name: impl Into<String>, client: &ClusterClient) -> Self {
        Self {
            name: name.into(),
            api: client.api(),
        }
    }
}

#[async_trait]
impl<K: RemoteObject> Resource for Existing<K> {
    fn key(&self) -> String {
        resource_key(K::KIND, &self.name)
    }

    async fn create(&mut self) -> Result<()> {
        debug!("Looking for {}", self.key());
        match self
            .api
            .get_opt(&self.name)
            .await
            .map_err(RiggerError::remote_call)?
        {
            Some(_) => {
                debug!("Found {}", self.key());
                Ok(())
            }
            None => Err(RiggerError::missing_existing(anyhow!(
                "{} was expected to pre-exist",
                self.key()
            ))),
        }
    }

    async fn delete(&self) -> Result<()> {
        debug!("Deleting {}", self.key());
        self.api
            .delete(&self.name, &Default::default())
            .await
            .map_err(RiggerError::remote_call)?;
        Ok(())
    }

    async fn status(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        let observed = read_remote(&self.api, &self.name).await?;
        observed.readiness(meta)
    }

    fn name_matches(&self, def: &ResourceDefinition, name: &str) -> bool {
        payload_names::<K>(def, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_kind_slash_name() {
        assert_eq!(resource_key("pod", "web"), "pod/web");
        assert_eq!(
            resource_key("persistentvolumeclaim", "data"),
            "persistentvolumeclaim/data"
        );
    }
}
