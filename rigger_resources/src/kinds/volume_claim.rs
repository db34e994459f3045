use ::k8s_openapi::api::core::v1::PersistentVolumeClaim;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for PersistentVolumeClaim {
    const KIND: &'static str = "persistentvolumeclaim";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::PersistentVolumeClaim(claim) => Some(claim),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::PersistentVolumeClaim(claim) => Some(claim),
            _ => None,
        }
    }

    /// A claim is ready once it is bound to a volume.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        let phase = self.status.as_ref().and_then(|status| status.phase.as_deref());
        Ok(match phase {
            Some("Bound") => Readiness::Ready,
            _ => Readiness::NotReady,
        })
    }
}
