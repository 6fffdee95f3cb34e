use crate::cmd::{fetch_into, locate};
use extdev_core::context::{build_context, ReplacementContext};
use extdev_core::info::InfoFile;
use extdev_core::skeleton::SkeletonSource;
use std::path::Path;

pub fn run(base: Option<&Path>, skeletons: &dyn SkeletonSource) -> anyhow::Result<()> {
    let (cwd, identity) = locate(base)?;
    let ctx = build_context(&identity, &cwd, &InfoFile, ReplacementContext::new())?;

    fetch_into(skeletons, &cwd, "conf/default.skel", "conf/default.php", &ctx)?;
    fetch_into(
        skeletons,
        &cwd,
        "conf/metadata.skel",
        "conf/metadata.php",
        &ctx,
    )?;

    // settings need translating once language files are in play
    if cwd.join("lang").is_dir() {
        fetch_into(
            skeletons,
            &cwd,
            "lang/settings.skel",
            "lang/en/settings.php",
            &ctx,
        )?;
    }

    Ok(())
}
