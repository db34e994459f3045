use ::k8s_openapi::api::core::v1::Secret;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for Secret {
    const KIND: &'static str = "secret";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::Secret(secret) => Some(secret),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::Secret(secret) => Some(secret),
            _ => None,
        }
    }

    /// Configuration objects have no rollout to wait on; existing is ready.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        Ok(Readiness::Ready)
    }
}
