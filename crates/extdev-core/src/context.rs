//! The replacement context: the token → value mapping substituted into
//! skeleton files.
//!
//! Built by a layered merge where later layers override earlier ones:
//! built-in defaults, values inherited from an existing info file,
//! identity-derived values, the kind-dependent install directory,
//! caller overrides, and finally a synthesized URL when no layer
//! supplied one.

use crate::error::Result;
use crate::extension::{ExtensionIdentity, ExtensionKind};
use crate::info::InfoSource;
use std::path::Path;

/// Base of the documentation site used to synthesize extension URLs.
pub const DOC_BASE_URL: &str = "https://www.dokuwiki.org/";

/// Placeholder tokens understood by the skeleton files.
pub mod token {
    pub const AUTHOR_NAME: &str = "@@AUTHOR_NAME@@";
    pub const AUTHOR_MAIL: &str = "@@AUTHOR_MAIL@@";
    pub const PLUGIN_NAME: &str = "@@PLUGIN_NAME@@";
    pub const PLUGIN_DESC: &str = "@@PLUGIN_DESC@@";
    pub const PLUGIN_URL: &str = "@@PLUGIN_URL@@";
    pub const PLUGIN_TYPE: &str = "@@PLUGIN_TYPE@@";
    pub const INSTALL_DIR: &str = "@@INSTALL_DIR@@";
    pub const DATE: &str = "@@DATE@@";
    pub const TEST: &str = "@@TEST@@";
    pub const COMPONENT_CLASS: &str = "@@PLUGIN_COMPONENT_NAME@@";
    pub const COMPONENT_SELF: &str = "@@SYNTAX_COMPONENT_NAME@@";
    pub const REGISTER: &str = "@@REGISTER@@";
    pub const HANDLERS: &str = "@@HANDLERS@@";
}

// ---------------------------------------------------------------------------
// ReplacementContext
// ---------------------------------------------------------------------------

/// Insertion-ordered token → value mapping. Setting an existing token
/// replaces its value in place, keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct ReplacementContext {
    entries: Vec<(String, String)>,
}

impl ReplacementContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into self, overriding by key.
    pub fn merge(&mut self, other: ReplacementContext) {
        for (k, v) in other.entries {
            self.set(k, v);
        }
    }

    /// Replace every token occurrence in `content` with its value.
    ///
    /// Literal, single pass: the content is scanned once left to right
    /// and substituted values are never re-scanned, so a value that
    /// happens to contain a token marker stays as-is. Tokens without an
    /// entry are left untouched.
    pub fn apply(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;
        while !rest.is_empty() {
            let mut earliest: Option<(usize, &str, &str)> = None;
            for (key, value) in self.iter() {
                if let Some(pos) = rest.find(key) {
                    if earliest.map_or(true, |(p, _, _)| pos < p) {
                        earliest = Some((pos, key, value));
                    }
                }
            }
            match earliest {
                Some((pos, key, value)) => {
                    out.push_str(&rest[..pos]);
                    out.push_str(value);
                    rest = &rest[pos + key.len()..];
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Context building
// ---------------------------------------------------------------------------

/// Build the replacement context for one extension directory.
///
/// `info` supplies values from an existing info file; `overrides` are
/// the invoking command's explicit values and always win. The URL
/// default is synthesized last so an override is never clobbered.
pub fn build_context(
    identity: &ExtensionIdentity,
    dir: &Path,
    info: &dyn InfoSource,
    overrides: ReplacementContext,
) -> Result<ReplacementContext> {
    let mut ctx = ReplacementContext::new();

    // defaults
    ctx.set(token::AUTHOR_NAME, "");
    ctx.set(token::AUTHOR_MAIL, "");
    ctx.set(token::PLUGIN_NAME, "");
    ctx.set(token::PLUGIN_DESC, "");
    ctx.set(token::PLUGIN_URL, "");
    ctx.set(token::PLUGIN_TYPE, "");
    ctx.set(token::INSTALL_DIR, ExtensionKind::Plugin.install_dir());
    ctx.set(token::DATE, today());

    // inherit from an existing info file
    if let Some(existing) = info.load(identity.kind, dir)? {
        for (key, tok) in [
            ("author", token::AUTHOR_NAME),
            ("email", token::AUTHOR_MAIL),
            ("desc", token::PLUGIN_DESC),
            ("url", token::PLUGIN_URL),
        ] {
            if let Some(value) = existing.get(key) {
                ctx.set(tok, value.clone());
            }
        }
    }

    ctx.set(token::PLUGIN_NAME, identity.name.clone());
    ctx.set(token::PLUGIN_TYPE, identity.kind.as_str());
    ctx.set(token::INSTALL_DIR, identity.kind.install_dir());

    ctx.merge(overrides);

    // last resort: point the URL at the documentation site
    if ctx.get(token::PLUGIN_URL).is_none_or(str::is_empty) {
        let url = format!("{DOC_BASE_URL}{}:{}", identity.kind, identity.name);
        ctx.set(token::PLUGIN_URL, url);
    }

    Ok(ctx)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
