//! compiler.rs - Compiles and caches the blacklist pattern.
//!
//! A `Blacklist` becomes a single `CompiledBlacklist`: one regex holding the
//! `- +(label|...)` alternation. Results are shared through a global cache
//! keyed by a hash of the label list.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{Blacklist, MAX_PATTERN_LENGTH};
use crate::errors::TagStripError;

/// The blacklist in matchable form.
#[derive(Debug)]
pub struct CompiledBlacklist {
    /// The alternation regex. `None` when the blacklist is empty, in which
    /// case nothing is ever matched.
    pub regex: Option<Regex>,
    /// The labels the regex was built from, in blacklist order.
    pub labels: Vec<String>,
}

impl CompiledBlacklist {
    /// The source pattern, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

lazy_static! {
    /// Global cache of compiled blacklists, keyed by `hash_blacklist`.
    static ref COMPILED_BLACKLIST_CACHE: RwLock<HashMap<u64, Arc<CompiledBlacklist>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the label list. Order is kept: it decides which alternative the
/// regex reports for a span.
fn hash_blacklist(blacklist: &Blacklist) -> u64 {
    let mut hasher = DefaultHasher::new();
    blacklist.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a blacklist into its alternation regex.
pub fn compile_blacklist(blacklist: &Blacklist) -> Result<CompiledBlacklist, TagStripError> {
    debug!("Starting compilation of {} labels.", blacklist.labels.len());

    let Some(pattern) = blacklist.pattern() else {
        debug!("Blacklist is empty; nothing will be stripped.");
        return Ok(CompiledBlacklist {
            regex: None,
            labels: Vec::new(),
        });
    };

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(TagStripError::PatternLengthExceeded(
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(&pattern)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| TagStripError::PatternCompilation(pattern.clone(), e))?;

    log::debug!(
        target: "tagstrip_core::patterns",
        "Blacklist pattern '{}' compiled successfully.",
        regex.as_str()
    );

    Ok(CompiledBlacklist {
        regex: Some(regex),
        labels: blacklist.labels.clone(),
    })
}

/// Gets the compiled form of `blacklist` from the cache, compiling it on a miss.
pub fn get_or_compile_blacklist(blacklist: &Blacklist) -> Result<Arc<CompiledBlacklist>> {
    let cache_key = hash_blacklist(blacklist);

    {
        let cache = COMPILED_BLACKLIST_CACHE
            .read()
            .map_err(|e| TagStripError::Fatal(format!("blacklist cache poisoned: {e}")))?;
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled blacklist from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled blacklist not found in cache. Compiling now.");
    let compiled = Arc::new(compile_blacklist(blacklist)?);

    // Another caller may have compiled the same blacklist meanwhile; keep theirs.
    let compiled = Arc::clone(
        COMPILED_BLACKLIST_CACHE
            .write()
            .map_err(|e| TagStripError::Fatal(format!("blacklist cache poisoned: {e}")))?
            .entry(cache_key)
            .or_insert(compiled),
    );

    debug!("Successfully compiled and cached blacklist for key: {}", cache_key);
    Ok(compiled)
}
