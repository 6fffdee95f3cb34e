use anyhow::Context;
use extdev_core::git::Git;
use extdev_core::reconcile::{reconcile, write_manifest, DELETED_FILES};
use extdev_core::DevError;

pub fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;

    let git = Git::new(&cwd);
    if !git.is_repository() {
        return Err(DevError::NotAGitRepository.into());
    }

    let deleted = reconcile(&git, |path| cwd.join(path).exists())?;
    if deleted.is_empty() {
        println!("no deleted files found");
        return Ok(());
    }

    let existed = cwd.join(DELETED_FILES).exists();
    write_manifest(&cwd, &deleted)?;
    if existed {
        println!("  updated: {DELETED_FILES} ({} files)", deleted.len());
    } else {
        println!("  created: {DELETED_FILES} ({} files)", deleted.len());
    }

    Ok(())
}
