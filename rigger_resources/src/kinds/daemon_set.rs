use ::k8s_openapi::api::apps::v1::DaemonSet;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::{meets_percentage, resolve_percentage, Readiness, SUCCESS_FACTOR},
    resource::RemoteObject,
};

impl RemoteObject for DaemonSet {
    const KIND: &'static str = "daemonset";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::DaemonSet(daemon_set) => Some(daemon_set),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::DaemonSet(daemon_set) => Some(daemon_set),
            _ => None,
        }
    }

    /// Ready once at least the `successFactor` percentage of the nodes the
    /// daemon set should run on report a ready pod.
    fn readiness(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        let percentage = resolve_percentage(SUCCESS_FACTOR, meta)?;
        let status = match self.status.as_ref() {
            Some(status) => status,
            None => return Ok(Readiness::NotReady),
        };
        Ok(
            if meets_percentage(
                status.number_ready,
                status.desired_number_scheduled,
                percentage,
            ) {
                Readiness::Ready
            } else {
                Readiness::NotReady
            },
        )
    }
}
