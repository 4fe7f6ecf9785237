//! Pre-release suffix of a version tag
//!
//! A pre-release is a `label.revision` pair such as `beta.2` or `dev.1`.
//! Labels are free-form (anything without a `.`) and are ordered as plain
//! strings, so `alpha < beta < dev < rc`.

use std::fmt;

/// Labelled, numbered iteration attached to a `major.minor.patch` root
///
/// Ordering compares the label first, then the revision number. Deriving
/// `Ord` gives exactly that because of the field order.
///
/// # Examples
/// - "beta.1" -> Prerelease { label: "beta", revision: 1 }
/// - "dev" -> Prerelease { label: "dev", revision: 0 }
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease {
    /// The pre-release label (e.g. "beta", "dev")
    pub label: String,
    /// Iteration number for this label on its root
    pub revision: u64,
}

impl Prerelease {
    /// Create a new pre-release suffix
    pub fn new(label: impl Into<String>, revision: u64) -> Self {
        Prerelease {
            label: label.into(),
            revision,
        }
    }

    /// Returns the next iteration of this label, or `None` when the
    /// revision is already `u64::MAX`
    pub fn increment(&self) -> Option<Self> {
        Some(Prerelease {
            label: self.label.clone(),
            revision: self.revision.checked_add(1)?,
        })
    }

    /// Check whether this suffix carries the given label
    pub fn has_label(&self, label: &str) -> bool {
        self.label == label
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.revision)
    }
}
