use ::k8s_openapi::api::apps::v1::ReplicaSet;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::{meets_percentage, resolve_percentage, Readiness, SUCCESS_FACTOR},
    resource::RemoteObject,
};

impl RemoteObject for ReplicaSet {
    const KIND: &'static str = "replicaset";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::ReplicaSet(replica_set) => Some(replica_set),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::ReplicaSet(replica_set) => Some(replica_set),
            _ => None,
        }
    }

    /// Ready once at least the `successFactor` percentage of the desired
    /// replicas report ready.
    fn readiness(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        let percentage = resolve_percentage(SUCCESS_FACTOR, meta)?;
        let desired = self.spec.as_ref().and_then(|spec| spec.replicas).unwrap_or(1);
        let ready = self
            .status
            .as_ref()
            .and_then(|status| status.ready_replicas)
            .unwrap_or(0);
        Ok(if meets_percentage(ready, desired, percentage) {
            Readiness::Ready
        } else {
            Readiness::NotReady
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rigger_common::serde_json::{from_value, json};
    use ::std::collections::BTreeMap;

    fn replica_set(desired: i32, ready: i32) -> ReplicaSet {
        from_value(json!({
            "metadata": { "name": "web" },
            "spec": {
                "replicas": desired,
                "selector": {}
            },
            "status": { "readyReplicas": ready, "replicas": ready }
        }))
        .unwrap()
    }

    #[test]
    fn fully_ready_replica_set_is_ready() {
        assert_eq!(
            replica_set(3, 3).readiness(None).unwrap(),
            Readiness::Ready
        );
    }

    #[test]
    fn scaled_down_readiness_with_success_factor() {
        let meta = BTreeMap::from([(SUCCESS_FACTOR.to_string(), "60".to_string())]);
        assert_eq!(
            replica_set(5, 3).readiness(Some(&meta)).unwrap(),
            Readiness::Ready
        );
        assert_eq!(
            replica_set(5, 2).readiness(Some(&meta)).unwrap(),
            Readiness::NotReady
        );
    }
}
