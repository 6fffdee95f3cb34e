//! Reading the `<kind>.info.txt` metadata file.

use crate::error::Result;
use crate::extension::ExtensionKind;
use std::collections::HashMap;
use std::path::Path;

/// Parse the flat `key value` info-file format. Blank lines and `#`
/// comments are skipped; the first whitespace separates key from value.
pub fn parse_info(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(char::is_whitespace) {
            Some((key, value)) => map.insert(key.to_string(), value.trim().to_string()),
            None => map.insert(line.to_string(), String::new()),
        };
    }
    map
}

// ---------------------------------------------------------------------------
// InfoSource
// ---------------------------------------------------------------------------

/// Access to an extension's existing metadata, if any. Absence of the
/// file is `Ok(None)`, never an error.
pub trait InfoSource {
    fn load(&self, kind: ExtensionKind, dir: &Path) -> Result<Option<HashMap<String, String>>>;
}

/// Reads `plugin.info.txt` / `template.info.txt` from the extension directory.
pub struct InfoFile;

impl InfoSource for InfoFile {
    fn load(&self, kind: ExtensionKind, dir: &Path) -> Result<Option<HashMap<String, String>>> {
        let path = dir.join(kind.info_file());
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(parse_info(&content)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_keys_and_values() {
        let info = parse_info(
            "base   example\n\
             author Jane Doe\n\
             email  jane@example.com\n\
             \n\
             # a comment\n\
             desc   Does example things\n\
             url    https://www.dokuwiki.org/plugin:example\n",
        );
        assert_eq!(info.get("author").unwrap(), "Jane Doe");
        assert_eq!(info.get("email").unwrap(), "jane@example.com");
        assert_eq!(info.get("desc").unwrap(), "Does example things");
        assert_eq!(info.len(), 5);
    }

    #[test]
    fn key_without_value_is_empty() {
        let info = parse_info("orphan\n");
        assert_eq!(info.get("orphan").unwrap(), "");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = InfoFile.load(ExtensionKind::Plugin, dir.path()).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn loads_kind_named_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("template.info.txt"), "author Jane\n").unwrap();

        let plugin = InfoFile.load(ExtensionKind::Plugin, dir.path()).unwrap();
        assert!(plugin.is_none());

        let template = InfoFile.load(ExtensionKind::Template, dir.path()).unwrap();
        assert_eq!(template.unwrap().get("author").unwrap(), "Jane");
    }
}
