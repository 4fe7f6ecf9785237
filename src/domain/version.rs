use crate::domain::Prerelease;
use crate::error::{Result, YieldError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:-([^.]+)(?:\.(\d+))?)?$")
        .expect("tag pattern is a valid regex")
});

/// Version identifier derived from a tag: `major.minor.patch` plus an
/// optional `label.revision` suffix
///
/// A version without a suffix is stable. The stable version of a root
/// orders after every pre-release of that root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<Prerelease>,
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Create a pre-release version (e.g. `v0.1.0-beta.1`)
    pub fn prerelease(
        major: u64,
        minor: u64,
        patch: u64,
        label: impl Into<String>,
        revision: u64,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Some(Prerelease::new(label, revision)),
        }
    }

    /// Parse a tag string (e.g., "v1.2.3", "1.2.3-beta.4", "v0.2.0-alpha")
    ///
    /// The leading `v` is optional. A label given without a revision gets
    /// revision 0. Anything outside the grammar yields `None`, which callers
    /// treat as noise to filter out rather than as a failure.
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = TAG_PATTERN.captures(tag)?;

        let major = captures.get(1)?.as_str().parse().ok()?;
        let minor = captures.get(2)?.as_str().parse().ok()?;
        let patch = captures.get(3)?.as_str().parse().ok()?;

        let pre = match captures.get(4) {
            Some(label) => {
                let revision = match captures.get(5) {
                    Some(revision) => revision.as_str().parse().ok()?,
                    None => 0,
                };
                Some(Prerelease::new(label.as_str(), revision))
            }
            None => None,
        };

        Some(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    /// The pre-release label, if any
    pub fn label(&self) -> Option<&str> {
        self.pre.as_ref().map(|pre| pre.label.as_str())
    }

    /// The pre-release revision, if any
    pub fn revision(&self) -> Option<u64> {
        self.pre.as_ref().map(|pre| pre.revision)
    }

    /// True if the version carries no pre-release suffix
    pub fn is_stable(&self) -> bool {
        self.pre.is_none()
    }

    /// The stable `v{major}.{minor}.{patch}` this version belongs to
    pub fn root(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Check whether two versions share the same `major.minor.patch`
    pub fn same_root(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Bump version according to the bump mode
    ///
    /// - **Major**: (major+1, 0, 0), stable
    /// - **Minor**: (major, minor+1, 0), stable
    /// - **Patch**: (major, minor, patch+1), stable
    /// - **Revision**: same root; increments the revision when the version
    ///   already carries `label`, otherwise starts `label` at revision 1.
    ///   Without a (non-empty) label the version is returned unchanged.
    ///
    /// # Errors
    /// `VersionOverflow` when the bumped number is already `u64::MAX`.
    pub fn bump(&self, mode: BumpMode, label: Option<&str>) -> Result<Self> {
        let overflow = || YieldError::VersionOverflow {
            version: self.to_string(),
            mode: mode.to_string(),
        };

        let bumped = match mode {
            BumpMode::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpMode::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpMode::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
            BumpMode::Revision => match label.filter(|label| !label.is_empty()) {
                Some(label) => {
                    let pre = match &self.pre {
                        Some(pre) if pre.has_label(label) => {
                            pre.increment().ok_or_else(overflow)?
                        }
                        _ => Prerelease::new(label, 1),
                    };
                    Version {
                        pre: Some(pre),
                        ..self.root()
                    }
                }
                None => self.clone(),
            },
        };

        Ok(bumped)
    }
}

/// The floor first-release version, `v0.1.0`
impl Default for Version {
    fn default() -> Self {
        Version::new(0, 1, 0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(ours), Some(theirs)) => ours.cmp(theirs),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// Root component to advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpTarget {
    Major,
    Minor,
    Patch,
}

impl From<BumpTarget> for BumpMode {
    fn from(target: BumpTarget) -> Self {
        match target {
            BumpTarget::Major => BumpMode::Major,
            BumpTarget::Minor => BumpMode::Minor,
            BumpTarget::Patch => BumpMode::Patch,
        }
    }
}

impl fmt::Display for BumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        BumpMode::from(*self).fmt(f)
    }
}

/// Every way a single version can be bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMode {
    Major,
    Minor,
    Patch,
    Revision,
}

impl fmt::Display for BumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpMode::Major => "major",
            BumpMode::Minor => "minor",
            BumpMode::Patch => "patch",
            BumpMode::Revision => "revision",
        };
        f.write_str(name)
    }
}
