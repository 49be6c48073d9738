// ABOUTME: Pre-compiled CSS selector cache shared by all page queries.
// ABOUTME: Invalid selectors are cached too and reported as EnhanceError.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use dom_query::Matcher;
use once_cell::sync::Lazy;

use crate::error::EnhanceError;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` if the selector does not parse.
pub fn get_or_compile(css: &str) -> Option<Matcher> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Matcher::new(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(css.to_string())
        .or_insert(compiled)
        .clone()
}

/// Like [`get_or_compile`], but an invalid selector is an error.
pub fn compile(css: &str) -> Result<Matcher, EnhanceError> {
    get_or_compile(css).ok_or_else(|| EnhanceError::invalid_selector(css, "compile selector"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        assert!(get_or_compile("form table ~ table tbody tr").is_some());
        assert!(get_or_compile("form table ~ table tbody tr").is_some());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(get_or_compile("[[[invalid").is_none());
        let err = compile("[[[invalid").unwrap_err();
        assert!(err.is_invalid_selector());
        assert_eq!(err.subject, "[[[invalid");
    }
}
