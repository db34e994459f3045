use ::k8s_openapi::api::core::v1::ConfigMap;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for ConfigMap {
    const KIND: &'static str = "configmap";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::ConfigMap(config_map) => Some(config_map),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::ConfigMap(config_map) => Some(config_map),
            _ => None,
        }
    }

    /// Configuration objects have no rollout to wait on; existing is ready.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        Ok(Readiness::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rigger_common::serde_json::{from_value, json};

    #[test]
    fn existing_config_map_is_ready() {
        let config_map: ConfigMap =
            from_value(json!({ "metadata": { "name": "settings" } })).unwrap();
        assert_eq!(config_map.readiness(None).unwrap(), Readiness::Ready);
    }
}
