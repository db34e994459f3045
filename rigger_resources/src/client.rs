//! Handle to the Kubernetes cluster the resources live in.

use ::kube::{Api, Client};
use ::rigger_common::{
    error::{Result, RiggerError},
    serde::Deserialize,
};

use crate::resource::RemoteObject;

/// Configuration for connecting to the target cluster.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(crate = "rigger_common::serde")]
pub struct ClusterConfig {
    /// Namespace that all managed resources are scoped to.
    pub namespace: String,
}

/// Client to interact with the Kubernetes cluster.
/// Per-kind sub-interfaces are derived from it on demand; nothing is cached.
#[derive(Clone)]
pub struct ClusterClient {
    client: Client,
    namespace: String,
}

impl ClusterClient {
    /// Connect using the ambient kubeconfig or in-cluster environment.
    pub async fn new(namespace: impl Into<String>) -> Result<Self> {
        let client = Client::try_default()
            .await
            .map_err(RiggerError::remote_call)?;
        Ok(Self::from_client(client, namespace))
    }

    pub async fn from_config(config: &ClusterConfig) -> Result<Self> {
        Self::new(config.namespace.clone()).await
    }

    /// Wrap an already constructed client, e.g. one built by the caller
    /// with its own authentication.
    pub fn from_client(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The sub-interface acting on one resource kind within the configured
    /// namespace.
    pub fn api<K: RemoteObject>(&self) -> Api<K> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rigger_common::serde_json::{from_value, json};

    #[test]
    fn missing_field_namespace() {
        let result = from_value::<ClusterConfig>(json!({}));
        assert_eq!(
            result.unwrap_err().to_string(),
            "missing field `namespace`"
        );
    }

    #[test]
    fn deny_unknown_fields() {
        let config = json!({
            "namespace": "default",
            "unknown_field": "unknown"
        });
        let result = from_value::<ClusterConfig>(config);
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown field `unknown_field`, expected `namespace`"
        );
    }

    #[test]
    fn deserialize_cluster_config() {
        let config = from_value::<ClusterConfig>(json!({ "namespace": "staging" })).unwrap();
        assert_eq!(
            config,
            ClusterConfig {
                namespace: "staging".to_string()
            }
        );
    }
}
