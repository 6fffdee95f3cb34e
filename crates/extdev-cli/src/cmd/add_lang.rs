use crate::cmd::{fetch_into, locate};
use extdev_core::context::{build_context, ReplacementContext};
use extdev_core::info::InfoFile;
use extdev_core::skeleton::SkeletonSource;
use std::path::Path;

pub fn run(base: Option<&Path>, skeletons: &dyn SkeletonSource) -> anyhow::Result<()> {
    let (cwd, identity) = locate(base)?;
    let ctx = build_context(&identity, &cwd, &InfoFile, ReplacementContext::new())?;

    fetch_into(skeletons, &cwd, "lang/lang.skel", "lang/en/lang.php", &ctx)?;

    // mirror of addConf: configuration already present wants its strings
    if cwd.join("conf").is_dir() {
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
