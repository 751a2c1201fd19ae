//! Display-name lookup.
//!
//! Quantity names and unit symbols are addressed by key (e.g. `"units.current.milliampere"`). Localized strings live
//! outside this crate; anything implementing [`NameProvider`] can supply them. Lookups that miss fall back to the
//! built-in name or symbol.

use std::collections::HashMap;

/// Key-to-string lookup capability.
pub trait NameProvider {
    /// Display string for `key`, or `None` to fall back to the built-in one.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Provider that never resolves a key; callers get the built-in strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNames;

impl NameProvider for NoNames {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Map-backed provider, typically filled from the `[names]` table of a
/// [`MeasureConfig`](crate::MeasureConfig).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticNames {
    entries: HashMap<String, String>,
}

impl StaticNames {
    /// Empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), name.into())
    }

    /// Builder form of [`StaticNames::insert`].
    pub fn with(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(key, name);
        self
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for StaticNames {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl NameProvider for StaticNames {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl<P: NameProvider + ?Sized> NameProvider for &P {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
