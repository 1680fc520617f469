//! Cache Key Module
//!
//! Defines the key type under which cached entities are stored.

use std::fmt;

// == Cache Key ==
/// A value-equality wrapper unifying the identifier types an entity can be
/// looked up by.
///
/// Services cache the same entity under a numeric id on one read path and
/// under a natural-language string on another; wrapping both in one key type
/// lets them share a single cache instance without collision. Equality and
/// hashing are structural: two keys built from equal wrapped values address
/// the same cache slot regardless of where they were constructed.
///
/// An empty string is a valid, distinct key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Entity id key (lookups by id)
    Id(u64),
    /// Natural-language key (lookups by name, content, or translated text)
    Name(String),
}

impl From<u64> for CacheKey {
    fn from(id: u64) -> Self {
        CacheKey::Id(id)
    }
}

impl From<String> for CacheKey {
    fn from(name: String) -> Self {
        CacheKey::Name(name)
    }
}

impl From<&str> for CacheKey {
    fn from(name: &str) -> Self {
        CacheKey::Name(name.to_string())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Id(id) => write!(f, "id:{}", id),
            CacheKey::Name(name) => write!(f, "name:{}", name),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &CacheKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_keys_from_equal_values_are_equal() {
        assert_eq!(CacheKey::from(42u64), CacheKey::from(42u64));
        assert_eq!(CacheKey::from("english"), CacheKey::from("english".to_string()));
    }

    #[test]
    fn test_keys_from_equal_values_hash_alike() {
        assert_eq!(hash_of(&CacheKey::from(42u64)), hash_of(&CacheKey::from(42u64)));
        assert_eq!(hash_of(&CacheKey::from("hola")), hash_of(&CacheKey::from("hola")));
    }

    #[test]
    fn test_id_and_name_keys_are_distinct() {
        // "42" the string and 42 the id must not collide
        assert_ne!(CacheKey::from(42u64), CacheKey::from("42"));
    }

    #[test]
    fn test_empty_name_is_a_valid_distinct_key() {
        let empty = CacheKey::from("");
        assert_eq!(empty, CacheKey::Name(String::new()));
        assert_ne!(empty, CacheKey::from("a"));
        assert_ne!(empty, CacheKey::from(0u64));
    }

    #[test]
    fn test_display() {
        assert_eq!(CacheKey::from(7u64).to_string(), "id:7");
        assert_eq!(CacheKey::from("french").to_string(), "name:french");
    }
}
