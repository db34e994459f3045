use ::k8s_openapi::api::core::v1::Service;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for Service {
    const KIND: &'static str = "service";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::Service(service) => Some(service),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::Service(service) => Some(service),
            _ => None,
        }
    }

    /// A service is ready as soon as it exists; routing readiness belongs to
    /// the workloads behind it.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        Ok(Readiness::Ready)
    }
}
