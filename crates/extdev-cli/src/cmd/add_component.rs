use crate::cmd::{fetch_into, locate};
use extdev_core::component::{Component, ComponentType};
use extdev_core::context::{build_context, token, ReplacementContext};
use extdev_core::extension::ExtensionKind;
use extdev_core::info::InfoFile;
use extdev_core::skeleton::SkeletonSource;
use extdev_core::DevError;
use std::path::Path;

pub fn run(
    base: Option<&Path>,
    skeletons: &dyn SkeletonSource,
    component_type: &str,
    name: Option<&str>,
) -> anyhow::Result<()> {
    let (cwd, identity) = locate(base)?;
    if identity.kind != ExtensionKind::Plugin {
        return Err(DevError::ComponentsRequirePlugin.into());
    }
    let ctype: ComponentType = component_type.parse()?;

    let component = Component::derive(ctype, &identity.name, name);

    let mut overrides = ReplacementContext::new();
    if let Some(extras) = ctype.extra_tokens() {
        for (tok, value) in extras {
            overrides.set(tok, value);
        }
    }
    overrides.set(token::COMPONENT_CLASS, component.class_name.clone());
    overrides.set(token::COMPONENT_SELF, component.self_name.clone());
    let ctx = build_context(&identity, &cwd, &InfoFile, overrides)?;

    fetch_into(skeletons, &cwd, &ctype.skeleton(), &component.target, &ctx)?;

    Ok(())
}
