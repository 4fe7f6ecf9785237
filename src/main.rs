use anyhow::Result;
use clap::Parser;

use git_yield::cli::{run_yield_workflow, YieldWorkflowArgs};
use git_yield::git::Git2Repository;
use git_yield::ui::{self, TerminalPrompt};
use git_yield::{config, BumpTarget};

#[derive(clap::Parser)]
#[command(
    name = "git-yield",
    version,
    about = "Compute the next semantic version tag and publish it"
)]
struct Args {
    #[arg(short = 'M', long, conflicts_with_all = ["minor", "patch"], help = "Bump the major version")]
    major: bool,

    #[arg(short = 'm', long, conflicts_with = "patch", help = "Bump the minor version")]
    minor: bool,

    #[arg(short = 'p', long, help = "Bump the patch version")]
    patch: bool,

    #[arg(short, long, help = "Pre-release label to bump (e.g. beta, dev)")]
    label: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Remote to fetch tags from and push to")]
    remote: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

impl Args {
    fn target(&self) -> Option<BumpTarget> {
        if self.major {
            Some(BumpTarget::Major)
        } else if self.minor {
            Some(BumpTarget::Minor)
        } else if self.patch {
            Some(BumpTarget::Patch)
        } else {
            None
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let target = args.target();

    if target.is_none() && args.label.is_none() {
        ui::display_error("You must specify either a target or a label.");
        std::process::exit(1);
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("You must cd into a git repository to use git-yield. {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = YieldWorkflowArgs {
        target,
        label: args.label,
        remote: args.remote,
        force: args.force,
        dry_run: args.dry_run,
    };

    if let Err(e) = run_yield_workflow(&repo, &TerminalPrompt, &workflow_args, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
