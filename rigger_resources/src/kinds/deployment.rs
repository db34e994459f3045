use ::k8s_openapi::api::apps::v1::Deployment;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::{meets_percentage, resolve_percentage, Readiness, SUCCESS_FACTOR},
    resource::RemoteObject,
};

impl RemoteObject for Deployment {
    const KIND: &'static str = "deployment";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::Deployment(deployment) => Some(deployment),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::Deployment(deployment) => Some(deployment),
            _ => None,
        }
    }

    /// A deployment is ready once enough of its desired replicas are
    /// available: at least the `successFactor` percentage of them, all of
    /// them by default.
    fn readiness(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        let percentage = resolve_percentage(SUCCESS_FACTOR, meta)?;
        let desired = self.spec.as_ref().and_then(|spec| spec.replicas).unwrap_or(1);
        let available = self
            .status
            .as_ref()
            .and_then(|status| status.available_replicas)
            .unwrap_or(0);
        Ok(if meets_percentage(available, desired, percentage) {
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

    fn deployment(desired: i32, available: i32) -> Deployment {
        from_value(json!({
            "metadata": { "name": "web" },
            "spec": {
                "replicas": desired,
                "selector": {},
                "template": {}
            },
            "status": { "availableReplicas": available }
        }))
        .unwrap()
    }

    fn success_factor(value: &str) -> Metadata {
        BTreeMap::from([(SUCCESS_FACTOR.to_string(), value.to_string())])
    }

    #[test]
    fn fully_available_deployment_is_ready() {
        assert_eq!(
            deployment(4, 4).readiness(None).unwrap(),
            Readiness::Ready
        );
    }

    #[test]
    fn partially_available_deployment_is_not_ready_by_default() {
        assert_eq!(
            deployment(4, 2).readiness(None).unwrap(),
            Readiness::NotReady
        );
    }

    #[test]
    fn success_factor_lowers_the_bar() {
        let meta = success_factor("50");
        assert_eq!(
            deployment(4, 2).readiness(Some(&meta)).unwrap(),
            Readiness::Ready
        );
        assert_eq!(
            deployment(4, 1).readiness(Some(&meta)).unwrap(),
            Readiness::NotReady
        );
    }

    #[test]
    fn malformed_success_factor_propagates() {
        let result = deployment(4, 4).readiness(Some(&success_factor("abc")));
        assert!(result.is_err_and(|e| e.to_string().starts_with("Invalid threshold:")));

        let result = deployment(4, 4).readiness(Some(&success_factor("150")));
        assert!(result.is_err_and(|e| e.to_string().starts_with("Threshold out of range:")));
    }
}
