//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction. Message
//! builders return plain strings so they can be tested; the `display_*`
//! functions only add color and print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

/// Placeholder shown when a version does not exist
const NOT_AVAILABLE: &str = "N/A";

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render an optional version, yellow when present and magenta `N/A` otherwise.
fn styled_version(version: Option<&Version>) -> String {
    match version {
        Some(version) => style(version).yellow().to_string(),
        None => style(NOT_AVAILABLE).magenta().to_string(),
    }
}

/// Summary lines describing what the catalog currently holds.
///
/// The revision line is only produced when a label was requested.
///
/// # Arguments
/// * `latest_stable` - Newest stable version, if any
/// * `revision` - Requested label and its newest revision on the baseline, if any
pub fn catalog_summary_lines(
    latest_stable: Option<&Version>,
    revision: Option<(&str, Option<&Version>)>,
) -> Vec<String> {
    let mut lines = vec![format!("=> Latest stable: {}", styled_version(latest_stable))];
    if let Some((label, latest_revision)) = revision {
        lines.push(format!(
            "=> Latest relative revision ({}): {}",
            style(label).blue(),
            styled_version(latest_revision)
        ));
    }
    lines
}

/// Display what the catalog currently holds.
pub fn display_catalog_summary(
    latest_stable: Option<&Version>,
    revision: Option<(&str, Option<&Version>)>,
) {
    for line in catalog_summary_lines(latest_stable, revision) {
        println!("{}", line);
    }
}

/// Display the proposed tag change (or initial tag).
///
/// # Arguments
/// * `old_tag` - Latest stable tag (None if nothing was released yet)
/// * `new_tag` - The tag about to be created
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Display the steps a dry run would have performed.
pub fn display_dry_run(tag: &str, remote: &str) {
    display_status("Dry run:");
    display_success(&format!("  Step 1: would create local tag {}", tag));
    display_success(&format!("  Step 2: would push {} to {}", tag, remote));
}
