use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

/// Key equality used by an [`OrderedMap`].
pub trait KeyComparer {
    fn same_key(a: &str, b: &str) -> bool;
}

/// Byte-exact keys: `baseUrl` and `BaseUrl` are different entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseSensitive;

/// ASCII case-insensitive keys, the way HTTP header names compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl KeyComparer for CaseSensitive {
    fn same_key(a: &str, b: &str) -> bool {
        a == b
    }
}

impl KeyComparer for CaseInsensitive {
    fn same_key(a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

/// Insertion-ordered string map whose key equality is chosen by `C`.
///
/// Writing a key that already exists (under `C`) replaces both the stored key
/// spelling and the value in place, so the last write wins and the entry keeps
/// its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<C> {
    entries: Vec<(String, String)>,
    comparer: PhantomData<C>,
}

pub type CaseInsensitiveMap = OrderedMap<CaseInsensitive>;
pub type CaseSensitiveMap = OrderedMap<CaseSensitive>;

impl<C> Default for OrderedMap<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            comparer: PhantomData,
        }
    }
}

impl<C: KeyComparer> OrderedMap<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `key`, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(i) = self.position(&key) {
            let (old_key, old_value) = &mut self.entries[i];
            *old_key = key;
            return Some(std::mem::replace(old_value, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| C::same_key(k, key))
    }
}

impl<C: KeyComparer> std::ops::Index<&str> for OrderedMap<C> {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key '{key}'"),
        }
    }
}

impl<C: KeyComparer, K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedMap<C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<C: KeyComparer> Serialize for OrderedMap<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
