//! `docpub publish`: commit and push the documentation files.

use crate::{
    cli::PublishArgs,
    config::PublishConfig,
    debug,
    publish::{PublishOutcome, Publisher, pages},
    utils::{
        git::{GitCli, Vcs, discover},
        prompt::{AssumeYes, stdin_confirm},
    },
};
use anyhow::Result;

/// Run the publish flow in the project root.
pub fn publish_docs(config: &PublishConfig, args: &PublishArgs) -> Result<PublishOutcome> {
    let root = config.get_root();
    let repo = discover(root)?;
    debug!("git"; "repository {} on branch {}",
        repo.workdir.display(), repo.branch.as_deref().unwrap_or("(detached)"));

    let git = GitCli::new(root)?;
    let outcome = if args.yes {
        Publisher::new(config, &git, AssumeYes)
            .dry_run(args.dry_run)
            .run()?
    } else {
        Publisher::new(config, &git, stdin_confirm())
            .dry_run(args.dry_run)
            .run()?
    };

    if let PublishOutcome::Published { branch, .. } = &outcome {
        let remote_url = git.remote_url(&config.publish.remote)?;
        pages::print_instructions(
            &config.pages,
            remote_url.as_deref(),
            branch,
            &config.publish.docs_dir,
        );
    }

    Ok(outcome)
}
