use crate::domain::Version;
use std::fmt;

/// Non-fatal conditions met while preparing a tag.
/// These are reported to the user and the workflow carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Fetch failed; the catalog is built from local tags only
    FetchFailed { remote: String, reason: String },
    /// No stable release exists yet, so bumps start from the floor version
    NoStableRelease { floor: Version },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::NoStableRelease { floor } => {
                write!(f, "No stable release found, starting from {}", floor)
            }
        }
    }
}
