//! Launcher error types.

use thiserror::Error;

/// Errors detected while resolving launcher options.
///
/// Every variant is fatal to the resolution attempt; no partial
/// configuration is ever produced. Exit-code policy belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// Argument token that is not a recognized flag or flag cluster.
    #[error("Unknown option: {0}")]
    UnknownFlag(String),
    /// A value-taking flag with no value attached and no following token.
    #[error("Argument expected for the {0} option")]
    MissingFlagValue(&'static str),
    /// An environment variable that failed to parse.
    #[error("Invalid {name} value: {value}")]
    InvalidEnvironmentValue {
        name: &'static str,
        value: String,
    },
    /// More than one of `-c` / `-m` supplied.
    #[error("Multiple program sources given (-c and -m are mutually exclusive)")]
    ConflictingSourceSelection,
}
