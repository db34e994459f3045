use ::k8s_openapi::api::apps::v1::StatefulSet;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::{meets_percentage, resolve_percentage, Readiness, SUCCESS_FACTOR},
    resource::RemoteObject,
};

impl RemoteObject for StatefulSet {
    const KIND: &'static str = "statefulset";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::StatefulSet(stateful_set) => Some(stateful_set),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::StatefulSet(stateful_set) => Some(stateful_set),
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
