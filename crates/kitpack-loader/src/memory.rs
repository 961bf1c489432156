//! In-memory loader.

use kitpack_core::{LoadError, LoadResult, Loader};
use std::collections::HashMap;

/// Serves locators from a map. Unknown locators are not found.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sources: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locator: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.sources.insert(locator.into(), data.into());
    }

    pub fn with(mut self, locator: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(locator, data);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Loader for MemoryLoader {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>> {
        self.sources
            .get(locator)
            .cloned()
            .ok_or_else(|| LoadError::not_found(locator))
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for MemoryLoader {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut loader = Self::new();
        for (locator, data) in iter {
            loader.insert(locator, data);
        }
        loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let loader = MemoryLoader::new().with("a.yaml", "a: 1\n");
        assert_eq!(loader.load("a.yaml").unwrap(), b"a: 1\n");
        assert!(loader.load("b.yaml").unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_iter() {
        let loader: MemoryLoader = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(loader.len(), 2);
        assert_eq!(loader.load("b").unwrap(), b"2");
    }
}
