//! Fetching skeleton files and materializing them into the extension
//! directory.

use crate::context::ReplacementContext;
use crate::error::{DevError, Result};
use crate::io;
use std::path::Path;
use std::time::Duration;

/// Where the skeleton files live. Addressed by a relative identifier
/// like `conf/default.skel`.
pub const SKEL_BASE_URL: &str =
    "https://raw.githubusercontent.com/dokufreaks/dokuwiki-plugin-wizard/master/skel/";

// ---------------------------------------------------------------------------
// SkeletonSource
// ---------------------------------------------------------------------------

/// Access to raw skeleton content by identifier.
pub trait SkeletonSource {
    fn fetch(&self, skeleton: &str) -> Result<String>;
}

/// Fetches skeletons from a remote base URL over plain GET. No
/// authentication, no caching.
pub struct RemoteSkeletons {
    base: String,
    client: reqwest::blocking::Client,
}

impl RemoteSkeletons {
    pub fn new(base: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .expect("default TLS backend available");
        Self {
            base: base.into(),
            client,
        }
    }
}

impl Default for RemoteSkeletons {
    fn default() -> Self {
        Self::new(SKEL_BASE_URL)
    }
}

impl SkeletonSource for RemoteSkeletons {
    fn fetch(&self, skeleton: &str) -> Result<String> {
        let url = format!("{}{}", self.base, skeleton);
        let fail = |reason: String| DevError::FetchFailed {
            skeleton: skeleton.to_string(),
            reason,
        };

        let response = self.client.get(&url).send().map_err(|e| fail(e.to_string()))?;
        if !response.status().is_success() {
            return Err(fail(format!("{} returned {}", url, response.status())));
        }
        response.text().map_err(|e| fail(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

/// Outcome of a materialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    /// The file was fetched, substituted and written.
    Written,
    /// The target already exists; nothing was touched.
    SkippedExisting,
}

/// Fetch `skeleton`, substitute `ctx` into it and write the result to
/// `target` below `dir`.
///
/// An existing target is never overwritten; that case is an ordinary
/// outcome, not an error, so multi-file commands keep going. Missing
/// parent directories are created; the write is atomic.
pub fn materialize(
    source: &dyn SkeletonSource,
    dir: &Path,
    skeleton: &str,
    target: &str,
    ctx: &ReplacementContext,
) -> Result<Materialized> {
    let path = dir.join(target);
    if path.exists() {
        return Ok(Materialized::SkippedExisting);
    }

    let content = source.fetch(skeleton)?;
    let content = ctx.apply(&content);
    io::atomic_write(&path, content.as_bytes())?;

    Ok(Materialized::Written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx() -> ReplacementContext {
        let mut ctx = ReplacementContext::new();
        ctx.set("@@PLUGIN_NAME@@", "example");
        ctx
    }

    #[test]
    fn fetches_substitutes_and_writes() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/skel/info.skel")
            .with_status(200)
            .with_body("base @@PLUGIN_NAME@@\n")
            .create();

        let dir = TempDir::new().unwrap();
        let source = RemoteSkeletons::new(format!("{}/skel/", server.url()));
        let outcome =
            materialize(&source, dir.path(), "info.skel", "plugin.info.txt", &ctx()).unwrap();

        assert_eq!(outcome, Materialized::Written);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("plugin.info.txt")).unwrap(),
            "base example\n"
        );
        mock.assert();
    }

    #[test]
    fn existing_target_is_left_untouched() {
        let server = mockito::Server::new();
        // no mock registered: a fetch attempt would fail the test
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README"), "user content").unwrap();

        let source = RemoteSkeletons::new(format!("{}/skel/", server.url()));
        let outcome = materialize(&source, dir.path(), "README.skel", "README", &ctx()).unwrap();

        assert_eq!(outcome, Materialized::SkippedExisting);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("README")).unwrap(),
            "user content"
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/skel/conf/default.skel")
            .with_status(200)
            .with_body("<?php\n")
            .create();

        let dir = TempDir::new().unwrap();
        let source = RemoteSkeletons::new(format!("{}/skel/", server.url()));
        materialize(&source, dir.path(), "conf/default.skel", "conf/default.php", &ctx()).unwrap();

        assert!(dir.path().join("conf/default.php").exists());
    }

    #[test]
    fn non_success_status_is_fetch_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/skel/missing.skel")
            .with_status(404)
            .create();

        let dir = TempDir::new().unwrap();
        let source = RemoteSkeletons::new(format!("{}/skel/", server.url()));
        let err = materialize(&source, dir.path(), "missing.skel", "out.txt", &ctx()).unwrap_err();

        assert!(matches!(err, DevError::FetchFailed { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }
}
