use std::path::{Path, PathBuf};

pub const PLUGIN_DIR: &str = "lib/plugins";
pub const TEMPLATE_DIR: &str = "lib/tpl";

/// File that marks the root of a DokuWiki installation.
const INSTALL_MARKER: &str = "doku.php";

/// A resolved DokuWiki installation.
#[derive(Debug, Clone)]
pub struct Install {
    pub root: PathBuf,
}

impl Install {
    pub fn plugin_root(&self) -> PathBuf {
        self.root.join(PLUGIN_DIR)
    }

    pub fn template_root(&self) -> PathBuf {
        self.root.join(TEMPLATE_DIR)
    }
}

/// Resolve the installation the working directory belongs to.
///
/// Priority:
/// 1. `--base` flag / `DOKU_INC` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `doku.php`
pub fn resolve_install(explicit: Option<&Path>, cwd: &Path) -> Option<Install> {
    if let Some(p) = explicit {
        // normalized so the classifier's prefix checks line up with the
        // canonical working directory
        let root = p.canonicalize().ok()?;
        return Some(Install { root });
    }

    let mut dir = cwd;
    loop {
        if dir.join(INSTALL_MARKER).is_file() {
            return Some(Install {
                root: dir.to_path_buf(),
            });
        }
        dir = dir.parent()?;
    }
}
