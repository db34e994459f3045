use ::k8s_openapi::api::batch::v1::Job;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourcePayload},
    readiness::Readiness,
    resource::RemoteObject,
};

impl RemoteObject for Job {
    const KIND: &'static str = "job";

    fn from_payload(payload: &ResourcePayload) -> Option<&Self> {
        match payload {
            ResourcePayload::Job(job) => Some(job),
            _ => None,
        }
    }

    fn take_payload(payload: ResourcePayload) -> Option<Self> {
        match payload {
            ResourcePayload::Job(job) => Some(job),
            _ => None,
        }
    }

    /// A job is ready once it has as many successful completions as it asks
    /// for. A job that does not specify completions asks for one.
    fn readiness(&self, _meta: Option<&Metadata>) -> Result<Readiness> {
        let completions = self
            .spec
            .as_ref()
            .and_then(|spec| spec.completions)
            .unwrap_or(1);
        let succeeded = self
            .status
            .as_ref()
            .and_then(|status| status.succeeded)
            .unwrap_or(0);
        Ok(if succeeded >= completions {
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

    fn job(completions: Option<i32>, succeeded: i32) -> Job {
        let mut spec = json!({ "template": {} });
        if let Some(completions) = completions {
            spec["completions"] = json!(completions);
        }
        from_value(json!({
            "metadata": { "name": "migrate" },
            "spec": spec,
            "status": { "succeeded": succeeded }
        }))
        .unwrap()
    }

    #[test]
    fn completed_job_is_ready() {
        assert_eq!(job(Some(3), 3).readiness(None).unwrap(), Readiness::Ready);
    }

    #[test]
    fn partially_completed_job_is_not_ready() {
        assert_eq!(
            job(Some(3), 2).readiness(None).unwrap(),
            Readiness::NotReady
        );
    }

    #[test]
    fn default_completions_is_one() {
        assert_eq!(job(None, 1).readiness(None).unwrap(), Readiness::Ready);
        assert_eq!(job(None, 0).readiness(None).unwrap(), Readiness::NotReady);
    }
}
