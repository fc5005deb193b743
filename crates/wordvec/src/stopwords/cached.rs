//! # Cached Stopword Source

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    errors::WVResult,
    stopwords::{StopwordSet, StopwordSource},
    types::WVHashMap,
};

/// Memoizes an inner [`StopwordSource`] per language.
///
/// Successful lookups are kept for the lifetime of the cache;
/// failures are not cached, and are retried on the next call.
pub struct CachedStopwordSource<S: StopwordSource> {
    inner: S,
    cache: Mutex<WVHashMap<String, Arc<StopwordSet>>>,
}

impl<S: StopwordSource> CachedStopwordSource<S> {
    /// Wrap `inner` in a cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(WVHashMap::default()),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of languages currently cached.
    pub fn cached_languages(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<S: StopwordSource> StopwordSource for CachedStopwordSource<S> {
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>> {
        if let Some(words) = self.cache.lock().get(language) {
            return Ok(words.clone());
        }

        let words = self.inner.get_stopwords(language)?;
        Ok(self
            .cache
            .lock()
            .entry(language.to_string())
            .or_insert(words)
            .clone())
    }
}
