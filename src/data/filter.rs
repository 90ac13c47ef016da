use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use super::model::Paper;

// ---------------------------------------------------------------------------
// YearSlice – borrowed subset of the cleaned papers
// ---------------------------------------------------------------------------

/// Papers that passed a year filter, in dataset order.
///
/// Holds references into the cleaned dataset; filtering never copies papers.
#[derive(Debug, Clone, Default)]
pub struct YearSlice<'a> {
    papers: Vec<&'a Paper>,
}

impl<'a> YearSlice<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Paper> + '_ {
        self.papers.iter().copied()
    }

    /// Number of papers. Zero is an ordinary result.
    pub fn len(&self) -> usize {
        self.papers.len()
    }
}

/// Keep papers whose year is at least `min_year`. Papers without a year are dropped.
pub fn filter_min_year<'a, I>(papers: I, min_year: i32) -> YearSlice<'a>
where
    I: IntoIterator<Item = &'a Paper>,
{
    YearSlice {
        papers: papers
            .into_iter()
            .filter(|p| p.year.is_some_and(|y| y >= min_year))
            .collect(),
    }
}

/// Narrow a slice to a single publication year.
pub fn filter_year<'a>(slice: &YearSlice<'a>, year: i32) -> YearSlice<'a> {
    YearSlice {
        papers: slice.iter().filter(|p| p.year == Some(year)).collect(),
    }
}

/// Distinct years present in the slice, ascending.
pub fn selectable_years(slice: &YearSlice<'_>) -> Vec<i32> {
    slice
        .iter()
        .filter_map(|p| p.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Grouped counts
// ---------------------------------------------------------------------------

/// Category value → number of papers.
///
/// Entries are ordered by descending count; equal counts keep the order in
/// which the values were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Ord> FrequencyTable<K> {
    /// Reorder entries ascending by category value.
    pub fn sorted_by_key(mut self) -> Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }
}

impl<K> FrequencyTable<K> {
    /// Keep only the first `n` entries.
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count papers by a key. Papers for which `key` returns `None` are skipped.
pub fn count_by<'a, I, K, F>(papers: I, mut key: F) -> FrequencyTable<K>
where
    I: IntoIterator<Item = &'a Paper>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a Paper) -> Option<K>,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<(K, usize)> = Vec::new();

    for paper in papers {
        let Some(k) = key(paper) else {
            continue;
        };
        match position.get(&k) {
            Some(&i) => entries[i].1 += 1,
            None => {
                position.insert(k.clone(), entries.len());
                entries.push((k, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    FrequencyTable { entries }
}

/// Text columns the dashboard groups by. Years are counted with [`count_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Journal,
    Source,
}

/// Count papers by one of the grouping columns, keyed by its display text.
pub fn count_by_category<'a, I>(papers: I, category: Category) -> FrequencyTable<String>
where
    I: IntoIterator<Item = &'a Paper>,
{
    match category {
        Category::Journal => count_by(papers, |p| p.journal().map(str::to_string)),
        Category::Source => count_by(papers, |p| p.source().map(str::to_string)),
    }
}
