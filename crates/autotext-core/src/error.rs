use crate::ViewId;

/// A required layout constraint was not wired before the first event that
/// needed it.
///
/// These are programmer errors: constraints may be assigned any time after
/// construction, but must exist by first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A content change altered the height but no height constraint is set.
    MissingHeightConstraint { view: ViewId },
    /// A keyboard event arrived, no bottom constraint was set and none could
    /// be discovered among the candidates.
    MissingBottomConstraint { view: ViewId },
}

impl ConfigurationError {
    pub fn view(&self) -> ViewId {
        match self {
            ConfigurationError::MissingHeightConstraint { view }
            | ConfigurationError::MissingBottomConstraint { view } => *view,
        }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingHeightConstraint { view } => {
                write!(f, "{view}: height constraint is not set")
            }
            ConfigurationError::MissingBottomConstraint { view } => write!(
                f,
                "{view}: bottom constraint to the bottom layout guide is not set \
                 and could not be determined"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}
