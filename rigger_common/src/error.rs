use ::core::fmt::Display;

pub type Result<T> = std::result::Result<T, RiggerError>;

/// Classification of [`RiggerError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    /// The remote object or the resource kind does not exist. For remote
    /// objects this is a legitimate state before creation, not a failure.
    NotFound,
    /// The call to the remote system failed.
    RemoteCall,
    /// The caller supplied a definition or argument that is not acceptable.
    NotAllowed,
    /// A readiness threshold in resource metadata is not an integer.
    ThresholdParse,
    /// A readiness threshold parsed but lies outside `[0, 100]`.
    ThresholdOutOfRange,
    /// A resource that was expected to pre-exist is absent.
    MissingExisting,
    Io,
    Deserialize,
}

impl ErrorKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::RemoteCall => "Remote call failed",
            Self::NotAllowed => "Not allowed",
            Self::ThresholdParse => "Invalid threshold",
            Self::ThresholdOutOfRange => "Threshold out of range",
            Self::MissingExisting => "Missing existing resource",
            Self::Io => "IO error",
            Self::Deserialize => "Deserialize error",
        }
    }
}

/// Error type shared by all Rigger crates: a classification plus the
/// underlying cause. Errors are always propagated to the caller, never
/// retried and never terminate the process.
#[derive(Debug)]
pub struct RiggerError {
    kind: ErrorKind,
    source: anyhow::Error,
}

macro_rules! error_constructor {
    ($name: ident, $kind: ident) => {
        pub fn $name<E: Into<anyhow::Error>>(source: E) -> Self {
            Self {
                kind: ErrorKind::$kind,
                source: source.into(),
            }
        }
    };
}

impl RiggerError {
    error_constructor!(not_found, NotFound);
    error_constructor!(remote_call, RemoteCall);
    error_constructor!(not_allowed, NotAllowed);
    error_constructor!(threshold_parse, ThresholdParse);
    error_constructor!(threshold_out_of_range, ThresholdOutOfRange);
    error_constructor!(missing_existing, MissingExisting);
    error_constructor!(io, Io);
    error_constructor!(deserialize, Deserialize);

    /// Whether the error reports a missing remote object.
    /// Callers use this to tell the pre-creation state apart from real failures.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Tag the error with the key of the resource it was observed on.
    pub fn with_resource(self, key: &str) -> Self {
        Self {
            kind: self.kind,
            source: self.source.context(format!("resource {}", key)),
        }
    }
}

impl Display for RiggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.kind.prefix(), self.source)
    }
}

impl std::error::Error for RiggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for RiggerError {
    fn from(value: std::io::Error) -> Self {
        Self::io(value)
    }
}

impl From<serde_json::Error> for RiggerError {
    fn from(value: serde_json::Error) -> Self {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::anyhow::anyhow;

    #[test]
    fn display_carries_kind_prefix_and_cause() {
        let error = RiggerError::remote_call(anyhow!("connection refused"));
        assert_eq!(error.to_string(), "Remote call failed: connection refused");
    }

    #[test]
    fn not_found_is_distinguishable() {
        assert!(RiggerError::not_found(anyhow!("pod/web does not exist")).is_not_found());
        assert!(!RiggerError::remote_call(anyhow!("timeout")).is_not_found());
    }

    #[test]
    fn with_resource_tags_the_cause() {
        let error = RiggerError::remote_call(anyhow!("timeout")).with_resource("pod/web");
        assert_eq!(
            error.to_string(),
            "Remote call failed: resource pod/web: timeout"
        );
    }

    #[test]
    fn io_error_converts() {
        let error: RiggerError = std::io::Error::other("disk gone").into();
        assert!(error.to_string().starts_with("IO error:"));
    }
}
