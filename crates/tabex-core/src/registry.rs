//! `KeyRegistry` — the fixed, ordered set of row keys.
//!
//! Once registered, the key set normalizes every subsequent keyed row: the
//! registry's order is authoritative, keys missing from a row default to the
//! empty string, and row keys the registry does not know are dropped.

use rustc_hash::FxHashMap;

/// Ordered, unique row keys with an O(1) key→position index.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys:  Vec<String>,
    index: FxHashMap<String, usize>,
}

impl KeyRegistry {
    /// Build a registry from `keys`, keeping the first occurrence of any
    /// duplicate.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for key in keys {
            let key = key.into();
            if registry.index.contains_key(&key) {
                continue;
            }
            registry.index.insert(key.clone(), registry.keys.len());
            registry.keys.push(key);
        }
        registry
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Normalize a keyed row against the registry.
    ///
    /// Returns one value per registered key, in registry order: the row's
    /// value where present (last occurrence wins on duplicate row keys),
    /// else the empty string.  Row keys absent from the registry are
    /// dropped.
    pub fn normalize<I, K, V>(&self, row: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = vec![String::new(); self.keys.len()];
        for (key, value) in row {
            if let Some(&position) = self.index.get(key.as_ref()) {
                values[position] = value.into();
            }
        }
        values
    }
}
