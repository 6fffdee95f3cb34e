//! Interactive input with an optional answer cache.
//!
//! Cached answers are offered as defaults on the next run, keyed by the
//! prompt text. The cache is an explicit object with an injectable
//! backing store: file-backed in production, in-memory in tests.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// AnswerCache
// ---------------------------------------------------------------------------

pub trait AnswerCache {
    fn get(&self, prompt: &str) -> Option<String>;
    fn put(&mut self, prompt: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryCache(HashMap<String, String>);

impl AnswerCache for MemoryCache {
    fn get(&self, prompt: &str) -> Option<String> {
        self.0.get(prompt).cloned()
    }

    fn put(&mut self, prompt: &str, value: &str) {
        self.0.insert(prompt.to_string(), value.to_string());
    }
}

/// One file per prompt under the user cache directory, named by the
/// md5 of the prompt text.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Open the cache under `$XDG_CACHE_HOME/extdev` (or
    /// `~/.cache/extdev`). None when no home directory can be found or
    /// the directory cannot be created.
    pub fn open() -> Option<Self> {
        let base = match std::env::var_os("XDG_CACHE_HOME") {
            Some(x) if !x.is_empty() => PathBuf::from(x),
            _ => home::home_dir()?.join(".cache"),
        };
        let dir = base.join("extdev");
        std::fs::create_dir_all(&dir).ok()?;
        Some(Self { dir })
    }

    fn answer_file(&self, prompt: &str) -> PathBuf {
        self.dir
            .join(format!("{:x}.readline", md5::compute(prompt)))
    }
}

impl AnswerCache for FileCache {
    fn get(&self, prompt: &str) -> Option<String> {
        let value = std::fs::read_to_string(self.answer_file(prompt)).ok()?;
        let value = value.trim_end_matches('\n');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn put(&mut self, prompt: &str, value: &str) {
        // failing to remember an answer is not worth failing the command
        let _ = std::fs::write(self.answer_file(prompt), value);
    }
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

pub struct Prompter<R, W> {
    input: R,
    output: W,
    cache: Box<dyn AnswerCache>,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompter on stdin/stdout with the file-backed cache when available.
    pub fn interactive() -> Self {
        let cache: Box<dyn AnswerCache> = match FileCache::open() {
            Some(c) => Box::new(c),
            None => Box::<MemoryCache>::default(),
        };
        Prompter::new(std::io::stdin().lock(), std::io::stdout(), cache)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, cache: Box<dyn AnswerCache>) -> Self {
        Self {
            input,
            output,
            cache,
        }
    }

    /// Ask for a value, re-asking until one is non-empty. With
    /// `remember`, the previous answer is offered as the default and
    /// the final answer is stored for next time.
    pub fn ask(&mut self, prompt: &str, remember: bool) -> std::io::Result<String> {
        let default = if remember { self.cache.get(prompt) } else { None };

        let mut value = String::new();
        while value.is_empty() {
            match &default {
                Some(d) => write!(self.output, "{prompt} [{d}]: ")?,
                None => write!(self.output, "{prompt}: ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            value = line.trim().to_string();

            if value.is_empty() {
                if let Some(d) = &default {
                    value = d.clone();
                } else if read == 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        format!("no input for '{prompt}'"),
                    ));
                }
            }
        }

        if remember {
            self.cache.put(prompt, &value);
        }
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str, cache: Box<dyn AnswerCache>) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new(), cache)
    }

    #[test]
    fn reads_a_trimmed_answer() {
        let mut p = prompter("  Jane Doe  \n", Box::<MemoryCache>::default());
        assert_eq!(p.ask("Your Name", false).unwrap(), "Jane Doe");
    }

    #[test]
    fn reasks_until_non_empty() {
        let mut p = prompter("\n\nfinally\n", Box::<MemoryCache>::default());
        assert_eq!(p.ask("Short description", false).unwrap(), "finally");
    }

    #[test]
    fn empty_input_falls_back_to_cached_default() {
        let mut cache = MemoryCache::default();
        cache.put("Your Name", "Jane Doe");
        let mut p = prompter("\n", Box::new(cache));
        assert_eq!(p.ask("Your Name", true).unwrap(), "Jane Doe");
    }

    #[test]
    fn explicit_answer_overrides_cached_default() {
        let mut cache = MemoryCache::default();
        cache.put("Your Name", "Old Name");
        let mut p = prompter("New Name\n", Box::new(cache));
        assert_eq!(p.ask("Your Name", true).unwrap(), "New Name");
    }

    #[test]
    fn remembered_answer_is_stored() {
        let mut p = prompter("jane@example.com\n", Box::<MemoryCache>::default());
        p.ask("Your E-Mail", true).unwrap();
        assert_eq!(
            p.cache.get("Your E-Mail").as_deref(),
            Some("jane@example.com")
        );
    }

    #[test]
    fn eof_without_default_is_an_error() {
        let mut p = prompter("", Box::<MemoryCache>::default());
        assert!(p.ask("Your Name", false).is_err());
    }

    #[test]
    fn file_cache_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cache = FileCache {
            dir: dir.path().to_path_buf(),
        };
        assert!(cache.get("Your Name").is_none());
        cache.put("Your Name", "Jane Doe");
        assert_eq!(cache.get("Your Name").as_deref(), Some("Jane Doe"));
    }
}
