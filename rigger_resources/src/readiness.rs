//! Group readiness aggregation and percentage thresholds.

use ::core::fmt::Display;

use ::rigger_common::{
    anyhow::anyhow,
    error::{Result, RiggerError},
    tracing::debug,
};

use crate::{definition::Metadata, resource::Resource};

/// Readiness of a single resource as observed on the remote system.
/// Never cached; recomputed on every status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady,
}

impl Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::NotReady => write!(f, "not ready"),
        }
    }
}

/// Metadata key under which the scalable kinds carry their readiness
/// threshold.
pub const SUCCESS_FACTOR: &str = "successFactor";

/// Resolve a percentage threshold from resource metadata.
/// Absent metadata or an absent key mean full readiness is required.
///
/// # Errors
/// - `ThresholdParse` if the value is not a base-10 integer.
/// - `ThresholdOutOfRange` if it parses to a value outside `[0, 100]`.
pub fn resolve_percentage(factor_name: &str, meta: Option<&Metadata>) -> Result<i32> {
    let factor = match meta.and_then(|meta| meta.get(factor_name)) {
        Some(factor) => factor,
        None => return Ok(100),
    };
    let percentage = factor.parse::<i32>().map_err(|e| {
        RiggerError::threshold_parse(anyhow!("{} factor {:?}: {}", factor_name, factor, e))
    })?;
    if !(0..=100).contains(&percentage) {
        return Err(RiggerError::threshold_out_of_range(anyhow!(
            "{} factor must be between 0 and 100, got {}",
            factor_name,
            percentage
        )));
    }
    Ok(percentage)
}

/// True when `observed` covers at least `percentage` percent of `desired`.
pub(crate) fn meets_percentage(observed: i32, desired: i32, percentage: i32) -> bool {
    i64::from(observed) * 100 >= i64::from(desired) * i64::from(percentage)
}

/// Collective readiness of a group of resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupReadiness {
    Ready,
    /// Key of the first resource found not ready, in input order.
    NotReady { blocker: String },
}

impl GroupReadiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Evaluate the readiness of every resource sequentially in input order,
/// failing fast.
///
/// The first status error aborts the evaluation and is returned tagged with
/// the offending resource's key; the first resource that reports not ready
/// decides the group verdict without the resources after it being queried.
/// An empty group is ready.
///
/// No timeout or backoff is imposed here; the polling caller owns deadlines.
pub async fn group_readiness<R: Resource>(resources: &[R]) -> Result<GroupReadiness> {
    for resource in resources {
        let key = resource.key();
        debug!("Checking status for resource {}", key);
        match resource.status(None).await {
            Ok(Readiness::Ready) => {}
            Ok(Readiness::NotReady) => return Ok(GroupReadiness::NotReady { blocker: key }),
            Err(e) => return Err(e.with_resource(&key)),
        }
    }
    Ok(GroupReadiness::Ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::std::collections::BTreeMap;

    fn meta(key: &str, value: &str) -> Metadata {
        BTreeMap::from([(key.to_string(), value.to_string())])
    }

    #[test]
    fn percentage_from_metadata() -> Result<()> {
        let meta = meta("scale", "50");
        assert_eq!(resolve_percentage("scale", Some(&meta))?, 50);
        Ok(())
    }

    #[test]
    fn absent_metadata_requires_full_readiness() -> Result<()> {
        assert_eq!(resolve_percentage("scale", None)?, 100);
        assert_eq!(resolve_percentage("scale", Some(&Metadata::new()))?, 100);
        Ok(())
    }

    #[test]
    fn boundary_values_are_valid() -> Result<()> {
        assert_eq!(resolve_percentage("scale", Some(&meta("scale", "0")))?, 0);
        assert_eq!(
            resolve_percentage("scale", Some(&meta("scale", "100")))?,
            100
        );
        Ok(())
    }

    #[test]
    fn out_of_range_percentage_is_a_configuration_error() {
        let result = resolve_percentage("scale", Some(&meta("scale", "150")));
        assert!(result.is_err_and(|e| e
            .to_string()
            .starts_with("Threshold out of range: scale factor must be between 0 and 100")));

        let result = resolve_percentage("scale", Some(&meta("scale", "-1")));
        assert!(result
            .is_err_and(|e| e.to_string().starts_with("Threshold out of range:")));
    }

    #[test]
    fn unparsable_percentage_is_an_error() {
        let result = resolve_percentage("scale", Some(&meta("scale", "abc")));
        assert!(result.is_err_and(|e| e.to_string().starts_with("Invalid threshold:")));
    }

    #[test]
    fn readiness_displays_as_status_strings() {
        assert_eq!(Readiness::Ready.to_string(), "ready");
        assert_eq!(Readiness::NotReady.to_string(), "not ready");
    }

    #[test]
    fn group_verdict_queries() {
        assert!(GroupReadiness::Ready.is_ready());
        assert!(!GroupReadiness::NotReady {
            blocker: "pod/web".to_string()
        }
        .is_ready());
    }

    #[test]
    fn scaled_comparison() {
        assert!(meets_percentage(2, 4, 50));
        assert!(!meets_percentage(1, 4, 50));
        assert!(meets_percentage(4, 4, 100));
        assert!(meets_percentage(0, 0, 100));
        assert!(meets_percentage(0, 4, 0));
    }
}
