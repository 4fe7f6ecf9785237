use crate::domain::{BumpMode, BumpTarget, Version, VersionCatalog};
use crate::error::{Result, YieldError};

/// What the user asked to bump: a root component, a pre-release label, or both
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BumpRequest {
    pub target: Option<BumpTarget>,
    pub label: Option<String>,
}

impl BumpRequest {
    pub fn new(target: Option<BumpTarget>, label: Option<String>) -> Self {
        BumpRequest { target, label }
    }

    /// Reject requests that cannot produce a tag
    ///
    /// At least one of target and label is required, and a label must be
    /// non-empty and free of `.` so the resulting tag parses back.
    pub fn validate(&self) -> Result<()> {
        if self.target.is_none() && self.label.is_none() {
            return Err(YieldError::invalid_request(
                "`target` and/or `label` must be specified",
            ));
        }

        if let Some(label) = &self.label {
            if label.is_empty() {
                return Err(YieldError::invalid_request("label must not be empty"));
            }
            if label.contains('.') {
                return Err(YieldError::invalid_request(format!(
                    "label '{}' must not contain '.'",
                    label
                )));
            }
        }

        Ok(())
    }
}

/// Computes the next version to tag from the state of a catalog
pub struct TagYielder<'a> {
    catalog: &'a VersionCatalog,
}

impl<'a> TagYielder<'a> {
    pub fn new(catalog: &'a VersionCatalog) -> Self {
        TagYielder { catalog }
    }

    /// Returns the version the request resolves to
    ///
    /// | target | label | result                                              |
    /// |--------|-------|-----------------------------------------------------|
    /// | -      | -     | `InvalidRequest`                                    |
    /// | -      | L     | next revision of L on the baseline root             |
    /// | T      | -     | baseline bumped by T                                |
    /// | T      | L     | baseline bumped by T, then L starting at revision 1 |
    pub fn yield_version(&self, request: &BumpRequest) -> Result<Version> {
        request.validate()?;

        match (request.target, request.label.as_deref()) {
            (None, None) => Err(YieldError::invalid_request(
                "`target` and/or `label` must be specified",
            )),
            (None, Some(label)) => self.catalog.next_revision(label),
            (Some(target), None) => self.yield_from_target(target),
            (Some(target), Some(label)) => self
                .yield_from_target(target)?
                .root()
                .bump(BumpMode::Revision, Some(label)),
        }
    }

    fn yield_from_target(&self, target: BumpTarget) -> Result<Version> {
        self.catalog.latest_baseline().bump(target.into(), None)
    }
}
