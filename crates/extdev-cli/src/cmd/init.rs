use crate::cmd::{fetch_into, locate};
use crate::prompt::Prompter;
use extdev_core::context::{build_context, token, ReplacementContext};
use extdev_core::git::{Git, RepositoryInitializer};
use extdev_core::info::InfoFile;
use extdev_core::skeleton::SkeletonSource;
use extdev_core::{io, DevError};
use std::path::Path;

pub fn run(base: Option<&Path>, skeletons: &dyn SkeletonSource) -> anyhow::Result<()> {
    let (cwd, identity) = locate(base)?;

    if !io::dir_is_empty(&cwd)? {
        return Err(DevError::DirectoryNotEmpty.into());
    }

    let mut prompter = Prompter::interactive();
    let author = prompter.ask("Your Name", true)?;
    let mail = prompter.ask("Your E-Mail", true)?;
    let desc = prompter.ask("Short description", false)?;

    let mut overrides = ReplacementContext::new();
    overrides.set(token::AUTHOR_NAME, author);
    overrides.set(token::AUTHOR_MAIL, mail);
    overrides.set(token::PLUGIN_DESC, desc);
    let ctx = build_context(&identity, &cwd, &InfoFile, overrides)?;

    println!("Initializing {} '{}':", identity.kind, identity.name);
    fetch_into(skeletons, &cwd, "info.skel", identity.kind.info_file(), &ctx)?;
    fetch_into(skeletons, &cwd, "README.skel", "README", &ctx)?;
    fetch_into(skeletons, &cwd, "LICENSE.skel", "LICENSE", &ctx)?;

    init_repository(&Git::new(&cwd));

    Ok(())
}

/// A failed `git init` is worth a warning, not a failed init.
fn init_repository(repo: &dyn RepositoryInitializer) {
    match repo.init_repository() {
        Ok(()) => println!("  created: git repository"),
        Err(e) => println!("  warning: {e}"),
    }
}
