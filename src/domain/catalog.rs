use crate::domain::{BumpMode, Version};
use crate::error::Result;
use log::debug;

/// Sorted, in-memory snapshot of every version found among a set of tags
///
/// Entries are kept in strictly descending order (newest first), so every
/// "latest" query is the first match of a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionCatalog {
    versions: Vec<Version>,
}

impl VersionCatalog {
    /// Build a catalog from already parsed versions
    pub fn new(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort_by(|a, b| b.cmp(a));
        versions.dedup();
        VersionCatalog { versions }
    }

    /// Parse raw tag names, silently dropping the ones outside the tag grammar
    pub fn parse<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        VersionCatalog::new(tags.into_iter().filter_map(|tag| {
            let tag = tag.as_ref();
            let parsed = Version::parse(tag);
            if parsed.is_none() {
                debug!("Ignoring tag '{}': not a version tag", tag);
            }
            parsed
        }))
    }

    /// All versions, newest first
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of stable versions in the catalog
    ///
    /// Tells a catalog without releases apart from one whose latest stable
    /// happens to be the floor version, since both report `v0.1.0`.
    pub fn stable_count(&self) -> usize {
        self.versions.iter().filter(|v| v.is_stable()).count()
    }

    /// Newest stable version, if there is one
    pub fn find_latest_stable(&self) -> Option<&Version> {
        self.versions.iter().find(|v| v.is_stable())
    }

    /// Newest stable version, or the floor `v0.1.0` when none exists
    pub fn latest_stable(&self) -> Version {
        self.find_latest_stable().cloned().unwrap_or_default()
    }

    /// Root of the newest entry regardless of stability (the version bumps
    /// start from), or the floor `v0.1.0` for an empty catalog
    pub fn latest_baseline(&self) -> Version {
        self.versions
            .first()
            .map(Version::root)
            .unwrap_or_default()
    }

    /// Newest version carrying `label` on the current baseline root
    pub fn latest_revision(&self, label: &str) -> Option<&Version> {
        let baseline = self.latest_baseline();
        self.versions
            .iter()
            .find(|v| v.same_root(&baseline) && v.label() == Some(label))
    }

    /// Like [`latest_revision`](Self::latest_revision), but falls back to a
    /// placeholder at revision 0 on the baseline root when the label has no
    /// entry yet, so that one revision bump yields revision 1.
    pub fn latest_revision_or_placeholder(&self, label: &str) -> Version {
        match self.latest_revision(label) {
            Some(version) => version.clone(),
            None => {
                let baseline = self.latest_baseline();
                Version::prerelease(baseline.major, baseline.minor, baseline.patch, label, 0)
            }
        }
    }

    /// The revision that would follow the latest one for `label`
    pub fn next_revision(&self, label: &str) -> Result<Version> {
        self.latest_revision_or_placeholder(label)
            .bump(BumpMode::Revision, Some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_TAGS: [&str; 6] = [
        "v0.2.0",
        "something-else",
        "v0.1.0",
        "v0.1.0-beta.1",
        "v0.3.0-dev.1",
        "v0.3.0",
    ];

    fn catalog() -> VersionCatalog {
        VersionCatalog::parse(RAW_TAGS)
    }

    #[test]
    fn test_catalog_parse_sorts_descending() {
        let rendered: Vec<String> = catalog().versions().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["v0.3.0", "v0.3.0-dev.1", "v0.2.0", "v0.1.0", "v0.1.0-beta.1"]
        );
    }

    #[test]
    fn test_catalog_is_strictly_descending() {
        let catalog = VersionCatalog::parse(["v1.0.0", "1.0.0", "v0.9.0-rc.2", "v0.9.0", "v1.0.0"]);
        assert_eq!(catalog.len(), 3);
        for pair in catalog.versions().windows(2) {
            assert!(pair[0] > pair[1], "{} should be newer than {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_catalog_order_is_input_independent() {
        let mut reversed = RAW_TAGS;
        reversed.reverse();
        assert_eq!(VersionCatalog::parse(reversed), catalog());
    }

    #[test]
    fn test_catalog_latest_stable() {
        assert_eq!(catalog().latest_stable(), Version::new(0, 3, 0));
    }

    #[test]
    fn test_catalog_latest_stable_skips_prereleases() {
        let catalog = VersionCatalog::parse(["v0.4.0-beta.2", "v0.3.1"]);
        assert_eq!(catalog.latest_stable(), Version::new(0, 3, 1));
        assert_eq!(catalog.latest_baseline(), Version::new(0, 4, 0));
    }

    #[test]
    fn test_catalog_latest_revision() {
        let catalog = catalog();
        assert_eq!(
            catalog.latest_revision("dev"),
            Some(&Version::prerelease(0, 3, 0, "dev", 1))
        );
        assert_eq!(catalog.latest_revision("beta"), None);
    }

    #[test]
    fn test_catalog_latest_revision_picks_highest() {
        let catalog = VersionCatalog::parse(["v1.0.0-rc.1", "v1.0.0-rc.10", "v1.0.0-rc.2"]);
        assert_eq!(
            catalog.latest_revision("rc"),
            Some(&Version::prerelease(1, 0, 0, "rc", 10))
        );
    }

    #[test]
    fn test_catalog_placeholder_revision() {
        assert_eq!(
            catalog().latest_revision_or_placeholder("beta"),
            Version::prerelease(0, 3, 0, "beta", 0)
        );
    }

    #[test]
    fn test_catalog_next_revision() {
        let catalog = catalog();
        assert_eq!(
            catalog.next_revision("dev").unwrap(),
            Version::prerelease(0, 3, 0, "dev", 2)
        );
        assert_eq!(
            catalog.next_revision("beta").unwrap(),
            Version::prerelease(0, 3, 0, "beta", 1)
        );
    }

    #[test]
    fn test_catalog_next_revision_at_numeric_limit() {
        let catalog = VersionCatalog::parse(["v1.0.0-rc.18446744073709551615"]);
        assert!(matches!(
            catalog.next_revision("rc"),
            Err(crate::error::YieldError::VersionOverflow { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_defaults_to_floor() {
        let catalog = VersionCatalog::parse(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.latest_stable(), Version::new(0, 1, 0));
        assert_eq!(catalog.latest_baseline(), Version::new(0, 1, 0));
        assert_eq!(catalog.find_latest_stable(), None);
        assert_eq!(catalog.stable_count(), 0);
        assert_eq!(
            catalog.latest_revision_or_placeholder("beta"),
            Version::prerelease(0, 1, 0, "beta", 0)
        );
    }

    #[test]
    fn test_stable_count_distinguishes_floor_release() {
        let released = VersionCatalog::parse(["v0.1.0"]);
        let empty = VersionCatalog::default();
        assert_eq!(released.latest_stable(), empty.latest_stable());
        assert_eq!(released.stable_count(), 1);
        assert_eq!(empty.stable_count(), 0);
    }

    #[test]
    fn test_stable_count() {
        assert_eq!(catalog().stable_count(), 3);
    }
}
