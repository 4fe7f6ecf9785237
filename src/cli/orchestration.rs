//! Main workflow orchestration logic
//!
//! Runs the yield flow against any [TagRepository] and [Prompt], keeping
//! CLI parsing in `main.rs` and the version rules in `domain`/`planner`.

use anyhow::Result;
use log::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpTarget, Version, VersionCatalog};
use crate::error::YieldError;
use crate::git::TagRepository;
use crate::planner::{BumpRequest, TagYielder};
use crate::ui::{self, Prompt};

/// Arguments for the yield workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YieldWorkflowArgs {
    /// Root component to bump
    pub target: Option<BumpTarget>,

    /// Pre-release label to bump
    pub label: Option<String>,

    /// Remote overriding the configured one
    pub remote: Option<String>,

    /// Skip confirmation prompts
    pub force: bool,

    /// Preview mode - don't create tags or push
    pub dry_run: bool,
}

/// Outcome of a yield workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The computed tag
    pub tag: String,

    /// Whether the tag exists locally once the workflow ends
    pub created: bool,

    /// Whether the tag was pushed to remote
    pub pushed: bool,
}

/// Main yield workflow
///
/// 1. Validate the bump request
/// 2. Check the working tree is clean
/// 3. Fetch tags from the remote (a failure only warns)
/// 4. Build the catalog and show the latest stable / revision
/// 5. Compute the next version
/// 6. Create the tag, then push it or roll it back (declined or failed push)
///
/// # Returns
/// The computed tag and what happened to it
pub fn run_yield_workflow<R, P>(
    repo: &R,
    prompt: &P,
    args: &YieldWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult>
where
    R: TagRepository,
    P: Prompt,
{
    let request = BumpRequest::new(args.target, args.label.clone());
    request.validate()?;

    if config.behavior.require_clean && !repo.is_clean()? {
        return Err(YieldError::environment(
            "You must commit or stash your work before proceeding.",
        )
        .into());
    }

    let remote = args.remote.as_deref().unwrap_or(config.remote.name.as_str());
    if config.remote.fetch {
        ui::display_status(&format!("Fetching tags from {} ...", remote));
        if let Err(e) = repo.fetch_tags(remote) {
            ui::display_boundary_warning(&BoundaryWarning::FetchFailed {
                remote: remote.to_string(),
                reason: e.to_string(),
            });
        }
    }

    let catalog = VersionCatalog::parse(repo.list_tags()?);
    info!(
        "Catalog holds {} versions ({} stable)",
        catalog.len(),
        catalog.stable_count()
    );

    let label = request.label.as_deref();
    ui::display_catalog_summary(
        catalog.find_latest_stable(),
        label.map(|label| (label, catalog.latest_revision(label))),
    );

    if catalog.stable_count() == 0 {
        ui::display_boundary_warning(&BoundaryWarning::NoStableRelease {
            floor: Version::default(),
        });
    }

    let version = TagYielder::new(&catalog).yield_version(&request)?;
    let tag = version.to_string();
    let latest_stable = catalog.find_latest_stable().map(ToString::to_string);
    ui::display_proposed_tag(latest_stable.as_deref(), &tag);

    if args.dry_run {
        ui::display_dry_run(&tag, remote);
        return Ok(WorkflowResult {
            tag,
            created: false,
            pushed: false,
        });
    }

    let force = args.force || config.behavior.skip_confirmation;

    if !force && !prompt.confirm(&format!("Do you want to create the tag {}?", tag), true)? {
        ui::display_status("Aborted!");
        return Ok(WorkflowResult {
            tag,
            created: false,
            pushed: false,
        });
    }

    repo.create_tag(&tag)?;
    ui::display_success(&format!("Created tag: {}", tag));

    let should_push = force
        || prompt.confirm(
            &format!("Do you want to push the tag {} into the upstream?", tag),
            true,
        )?;

    if should_push {
        if let Err(e) = repo.push_tag(remote, &tag) {
            repo.delete_tag(&tag)?;
            ui::display_status(&format!("Removed local tag {} after failed push", tag));
            return Err(e.into());
        }
        ui::display_success(&format!("Pushed tag {} to {}", tag, remote));
        ui::display_success("Done!");
        Ok(WorkflowResult {
            tag,
            created: true,
            pushed: true,
        })
    } else {
        repo.delete_tag(&tag)?;
        ui::display_status("Aborted!");
        Ok(WorkflowResult {
            tag,
            created: false,
            pushed: false,
        })
    }
}
