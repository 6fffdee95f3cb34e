pub mod add_component;
pub mod add_conf;
pub mod add_lang;
pub mod deleted_files;
pub mod init;
pub mod rm_obsolete;

use crate::root;
use anyhow::Context;
use extdev_core::context::ReplacementContext;
use extdev_core::extension::{classify, ExtensionIdentity};
use extdev_core::skeleton::{materialize, Materialized, SkeletonSource};
use std::path::{Path, PathBuf};

/// Canonical working directory plus the extension identity derived
/// from it. Every scaffolding command starts here.
pub(crate) fn locate(base: Option<&Path>) -> anyhow::Result<(PathBuf, ExtensionIdentity)> {
    let cwd = std::env::current_dir()
        .and_then(|d| d.canonicalize())
        .context("failed to resolve the current directory")?;

    let install = root::resolve_install(base, &cwd).with_context(|| {
        "not inside a DokuWiki installation (no doku.php found upward; use --base)"
    })?;

    let identity = classify(&cwd, &install.plugin_root(), &install.template_root())?;
    Ok((cwd, identity))
}

/// Materialize one skeleton and report the outcome. An existing target
/// is reported and skipped; a fetch failure aborts the caller.
pub(crate) fn fetch_into(
    source: &dyn SkeletonSource,
    dir: &Path,
    skeleton: &str,
    target: &str,
    ctx: &ReplacementContext,
) -> anyhow::Result<()> {
    match materialize(source, dir, skeleton, target, ctx)? {
        Materialized::Written => println!("  created: {target}"),
        Materialized::SkippedExisting => println!("  exists:  {target} (left untouched)"),
    }
    Ok(())
}
