use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// A value together with how many trips carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub value: T,
    pub count: usize,
}

/// Occurrence counts that remember the order in which keys were first seen.
///
/// Ties are always resolved in favour of the key seen first, so the mode
/// and the descending listing are reproducible for a given input order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Most frequent key; the first key to reach the maximum count wins.
    pub fn mode(&self) -> Option<Ranked<K>> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, c)| Ranked {
            value: k.clone(),
            count: *c,
        })
    }

    /// All keys by descending count, first-seen order among equal counts.
    pub fn ranked(&self) -> Vec<Ranked<K>> {
        let mut out: Vec<Ranked<K>> = self
            .entries
            .iter()
            .map(|(k, c)| Ranked {
                value: k.clone(),
                count: *c,
            })
            .collect();
        // stable sort keeps first-seen order for ties
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

/// Mode of a sequence, ties broken by first occurrence.
pub fn mode_of<K, I>(values: I) -> Option<Ranked<K>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    values.into_iter().collect::<FrequencyTable<K>>().mode()
}
