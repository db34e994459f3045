//! Normalized readiness reporting.

use ::core::fmt::Display;

use ::async_trait::async_trait;
use ::rigger_common::error::Result;

use crate::{
    definition::{Metadata, ResourceDefinition},
    readiness::Readiness,
    resource::Resource,
};

/// Status of a resource with the query failure folded into a value
/// instead of an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedStatus {
    Ready,
    NotReady,
    /// The status query itself failed; the message carries the cause.
    Failed(String),
}

impl Display for ReportedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::NotReady => write!(f, "not ready"),
            Self::Failed(cause) => write!(f, "error: {}", cause),
        }
    }
}

/// Report on a single resource, keyed by its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub key: String,
    pub status: ReportedStatus,
}

/// Wraps a resource so that status-query failures become reportable values.
/// Every resource the registry templates produce is wrapped in one, so
/// callers report on mixed groups uniformly.
pub struct SimpleReporter {
    inner: Box<dyn Resource>,
}

impl SimpleReporter {
    pub fn new(inner: impl Resource + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// Query the wrapped resource and fold the outcome into a [`Report`].
    pub async fn report(&self) -> Report {
        let key = self.key();
        let status = match self.inner.status(None).await {
            Ok(Readiness::Ready) => ReportedStatus::Ready,
            Ok(Readiness::NotReady) => ReportedStatus::NotReady,
            Err(e) => ReportedStatus::Failed(e.to_string()),
        };
        Report { key, status }
    }
}

#[async_trait]
impl Resource for SimpleReporter {
    fn key(&self) -> String {
        self.inner.key()
    }

    async fn create(&mut self) -> Result<()> {
        self.inner.create().await
    }

    async fn delete(&self) -> Result<()> {
        self.inner.delete().await
    }

    async fn status(&self, meta: Option<&Metadata>) -> Result<Readiness> {
        self.inner.status(meta).await
    }

    fn name_matches(&self, def: &ResourceDefinition, name: &str) -> bool {
        self.inner.name_matches(def, name)
    }
}
