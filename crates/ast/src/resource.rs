//! Embedded binary resources (spec §3 "Top-level", §6 "Resource format").
//!
//! A `Program` owns a mapping from an arbitrary path-like resource name to
//! its raw bytes. Names are mangled for emission by replacing every
//! non-alphanumeric byte with `_` (spec §6); the mapping itself is kept in
//! source order but backends are required to emit resource attributes in
//! sorted key order (spec §4.3.11, §8 "Resource ordering").

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ResourceMap {
    pub fn new() -> Self {
        ResourceMap::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(name.into(), bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates in sorted key order, which `BTreeMap` already guarantees —
    /// this is the order backends must emit in (spec §8 "Resource
    /// ordering").
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Mangles a raw resource path into a valid target identifier
    /// fragment: every byte that isn't an ASCII letter or digit becomes
    /// `_` (spec §6 "Resource format").
    pub fn mangle_name(raw: &str) -> String {
        raw.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangle_name_replaces_non_alphanumeric() {
        assert_eq!(ResourceMap::mangle_name("data/tile.bin"), "data_tile_bin");
        assert_eq!(ResourceMap::mangle_name("a-b c"), "a_b_c");
    }

    #[test]
    fn sorted_iterates_in_key_order() {
        let mut map = ResourceMap::new();
        map.insert("zeta", vec![1]);
        map.insert("alpha", vec![2]);
        let names: Vec<&str> = map.sorted().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
