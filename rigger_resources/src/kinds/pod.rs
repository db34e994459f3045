use ::k8s_openapi::api::core::v1::Pod;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for Pod {
    const KIND: &'static str = "pod";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::Pod(pod) => Some(pod),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::Pod(pod) => Some(pod),
            _ => None,
        }
    }

    /// A pod is ready once it reports the `Running` phase.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        let phase = self.status.as_ref().and_then(|status| status.phase.as_deref());
        Ok(match phase {
            Some("Running") => Readiness::Ready,
            _ => Readiness::NotReady,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rigger_common::serde_json::{from_value, json};

    fn pod_in_phase(phase: &str) -> Pod {
        from_value(json!({
            "metadata": { "name": "web" },
            "status": { "phase": phase }
        }))
        .unwrap()
    }

    #[test]
    fn running_pod_is_ready() {
        let pod = pod_in_phase("Running");
        assert_eq!(pod.readiness(None).unwrap(), Readiness::Ready);
    }

    #[test]
    fn pending_pod_is_not_ready() {
        let pod = pod_in_phase("Pending");
        assert_eq!(pod.readiness(None).unwrap(), Readiness::NotReady);
    }

    #[test]
    fn pod_without_status_is_not_ready() {
        let pod: Pod = from_value(json!({ "metadata": { "name": "web" } })).unwrap();
        assert_eq!(pod.readiness(None).unwrap(), Readiness::NotReady);
    }
}
