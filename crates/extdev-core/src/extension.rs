//! Extension classification from the working directory.
//!
//! An extension lives exactly one level below one of the two install
//! roots: `lib/plugins/<name>` for plugins, `lib/tpl/<name>` for
//! templates. Everything here is a pure function of the paths passed
//! in; resolving those paths from the environment is the CLI's job.

use crate::error::{DevError, Result};
use std::path::Path;

// ---------------------------------------------------------------------------
// ExtensionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    Plugin,
    Template,
}

impl ExtensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionKind::Plugin => "plugin",
            ExtensionKind::Template => "template",
        }
    }

    /// Directory name extensions of this kind are installed under.
    pub fn install_dir(&self) -> &'static str {
        match self {
            ExtensionKind::Plugin => "plugins",
            ExtensionKind::Template => "tpl",
        }
    }

    /// Name of the metadata file in the extension's main directory.
    pub fn info_file(&self) -> &'static str {
        match self {
            ExtensionKind::Plugin => "plugin.info.txt",
            ExtensionKind::Template => "template.info.txt",
        }
    }
}

impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExtensionIdentity
// ---------------------------------------------------------------------------

/// Name and kind of the extension being worked on. Computed once per
/// invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionIdentity {
    pub name: String,
    pub kind: ExtensionKind,
}

/// Classify `dir` as a plugin or template directory.
///
/// `dir` must be an absolute, normalized path. It has to sit exactly
/// one segment below `plugin_root` or `template_root`; running from a
/// subdirectory of an extension is rejected.
pub fn classify(dir: &Path, plugin_root: &Path, template_root: &Path) -> Result<ExtensionIdentity> {
    let (local, kind) = if let Ok(rest) = dir.strip_prefix(plugin_root) {
        (rest, ExtensionKind::Plugin)
    } else if let Ok(rest) = dir.strip_prefix(template_root) {
        (rest, ExtensionKind::Template)
    } else {
        return Err(DevError::OutsideExtensionRoots);
    };

    let mut components = local.components();
    let name = match components.next() {
        Some(c) => c.as_os_str().to_string_lossy().into_owned(),
        None => return Err(DevError::OutsideExtensionRoots),
    };
    if components.next().is_some() {
        return Err(DevError::NotExtensionRoot);
    }

    Ok(ExtensionIdentity { name, kind })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn roots() -> (PathBuf, PathBuf) {
        (
            PathBuf::from("/wiki/lib/plugins"),
            PathBuf::from("/wiki/lib/tpl"),
        )
    }

    #[test]
    fn plugin_directory_classifies_as_plugin() {
        let (p, t) = roots();
        let id = classify(Path::new("/wiki/lib/plugins/example"), &p, &t).unwrap();
        assert_eq!(id.name, "example");
        assert_eq!(id.kind, ExtensionKind::Plugin);
    }

    #[test]
    fn template_directory_classifies_as_template() {
        let (p, t) = roots();
        let id = classify(Path::new("/wiki/lib/tpl/mytheme"), &p, &t).unwrap();
        assert_eq!(id.name, "mytheme");
        assert_eq!(id.kind, ExtensionKind::Template);
    }

    #[test]
    fn directory_outside_roots_is_rejected() {
        let (p, t) = roots();
        assert!(matches!(
            classify(Path::new("/somewhere/else"), &p, &t),
            Err(DevError::OutsideExtensionRoots)
        ));
    }

    #[test]
    fn root_itself_is_rejected() {
        let (p, t) = roots();
        assert!(matches!(
            classify(Path::new("/wiki/lib/plugins"), &p, &t),
            Err(DevError::OutsideExtensionRoots)
        ));
    }

    #[test]
    fn nested_subdirectory_is_rejected() {
        let (p, t) = roots();
        assert!(matches!(
            classify(Path::new("/wiki/lib/plugins/example/conf"), &p, &t),
            Err(DevError::NotExtensionRoot)
        ));
    }

    #[test]
    fn kind_defaults() {
        assert_eq!(ExtensionKind::Plugin.install_dir(), "plugins");
        assert_eq!(ExtensionKind::Template.install_dir(), "tpl");
        assert_eq!(ExtensionKind::Plugin.info_file(), "plugin.info.txt");
        assert_eq!(ExtensionKind::Template.info_file(), "template.info.txt");
    }
}
