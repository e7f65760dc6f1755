//! File-based caching of built dictionaries.
//!
//! Building the canonical dictionary walks every entry of the source
//! dictionary, so the result is cached under the SHA-256 of the entries
//! file and reused until that file changes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::lexicon::canonical::CanonicalDictionary;

/// Get the cache directory.
///
/// Uses `STRESSMARK_CACHE_DIR` env var if set, otherwise `~/.cache/stressmark`.
pub fn cache_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STRESSMARK_CACHE_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".cache").join("stressmark")
}

/// SHA-256 of a file's contents as a 64-character hex string.
pub fn file_hash(path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file for hashing: {}", path.display()))?;
    std::io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

fn short(hash: &str) -> &str {
    &hash[..12.min(hash.len())]
}

/// Where the dictionary built from entries with this hash is kept.
pub fn dictionary_cache_path(root: &Path, entries_hash: &str) -> PathBuf {
    root.join("canonical").join(format!("{}.json", entries_hash))
}

/// Return the cached dictionary, or None if missing or unreadable.
pub fn get_cached_dictionary(root: &Path, entries_hash: &str) -> Option<CanonicalDictionary> {
    let path = dictionary_cache_path(root, entries_hash);
    if !path.exists() {
        return None;
    }
    match CanonicalDictionary::load(&path) {
        Ok(dict) => {
            log::info!("Cache hit: canonical dictionary ({}...)", short(entries_hash));
            Some(dict)
        }
        Err(e) => {
            log::warn!("Ignoring unreadable cache entry: {:#}", e);
            None
        }
    }
}

/// Store a built dictionary in the cache. Returns the cache path.
pub fn store_dictionary_cache(
    root: &Path,
    entries_hash: &str,
    dict: &CanonicalDictionary,
) -> Result<PathBuf> {
    let path = dictionary_cache_path(root, entries_hash);
    dict.save(&path)?;
    log::info!("Cached canonical dictionary ({}...)", short(entries_hash));
    Ok(path)
}
