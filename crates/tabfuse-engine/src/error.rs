use tabfuse_common::{ConfigError, HostError, TabFuseError};

/// Why a consolidation did not run to completion.
#[derive(Debug, thiserror::Error)]
pub enum FuseError {
    #[error("no normal window available to consolidate into")]
    NoDestination,

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("a consolidation is already in progress")]
    AlreadyRunning,

    #[error(transparent)]
    Host(#[from] HostError),
}

impl From<FuseError> for TabFuseError {
    fn from(err: FuseError) -> Self {
        match err {
            FuseError::InvalidExcludePattern { .. } => {
                TabFuseError::Config(ConfigError::ValidationError(err.to_string()))
            }
            FuseError::Host(host) => TabFuseError::Host(host),
            other => TabFuseError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabfuse_common::TabId;

    fn bad_pattern() -> FuseError {
        let source = fancy_regex::Regex::new("(").unwrap_err();
        FuseError::InvalidExcludePattern {
            pattern: "(".into(),
            source,
        }
    }

    #[test]
    fn fuse_error_display() {
        assert_eq!(
            FuseError::NoDestination.to_string(),
            "no normal window available to consolidate into"
        );
        assert_eq!(
            FuseError::AlreadyRunning.to_string(),
            "a consolidation is already in progress"
        );
        assert!(bad_pattern().to_string().starts_with("invalid exclude pattern \"(\""));
    }

    #[test]
    fn invalid_pattern_surfaces_as_config_error() {
        let err: TabFuseError = bad_pattern().into();
        assert!(matches!(
            err,
            TabFuseError::Config(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn host_error_passes_through() {
        let err: TabFuseError = FuseError::Host(HostError::NoSuchTab(TabId(3))).into();
        assert!(matches!(err, TabFuseError::Host(HostError::NoSuchTab(TabId(3)))));
    }

    #[test]
    fn no_destination_becomes_other() {
        let err: TabFuseError = FuseError::NoDestination.into();
        assert!(matches!(err, TabFuseError::Other(_)));
    }
}
