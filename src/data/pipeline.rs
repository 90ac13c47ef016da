use std::collections::HashMap;
use std::sync::Arc;

use super::filter::{
    count_by, count_by_category, filter_min_year, filter_year, selectable_years, Category,
    FrequencyTable, YearSlice,
};
use super::model::{CleanedDataset, Paper};
use super::words::{title_word_frequencies, StopWords};

// ---------------------------------------------------------------------------
// Pipeline – pull-based queries over one cleaned dataset
// ---------------------------------------------------------------------------

/// Query facade over a shared, immutable [`CleanedDataset`].
///
/// Every query is computed on demand from the dataset; the pipeline keeps
/// no results between calls.
#[derive(Debug, Clone)]
pub struct Pipeline {
    dataset: Arc<CleanedDataset>,
    min_year: i32,
    stop_words: StopWords,
}

impl Pipeline {
    pub fn new(dataset: Arc<CleanedDataset>, min_year: i32, stop_words: StopWords) -> Self {
        Self {
            dataset,
            min_year,
            stop_words,
        }
    }

    pub fn dataset(&self) -> &CleanedDataset {
        &self.dataset
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Papers published in or after the minimum year.
    pub fn recent(&self) -> YearSlice<'_> {
        filter_min_year(&self.dataset.papers, self.min_year)
    }

    /// Recent papers published in `year`. Empty when the year has none.
    pub fn filter(&self, year: i32) -> YearSlice<'_> {
        filter_year(&self.recent(), year)
    }

    /// Years offered by the year selector.
    pub fn selectable_years(&self) -> Vec<i32> {
        selectable_years(&self.recent())
    }

    /// Recent papers per year, ascending by year.
    pub fn publications_per_year(&self) -> FrequencyTable<i32> {
        count_by(self.recent().iter(), |p| p.year).sorted_by_key()
    }

    pub fn top_journals(&self, n: usize) -> FrequencyTable<String> {
        count_by_category(&self.dataset.papers, Category::Journal).top(n)
    }

    pub fn top_sources(&self, n: usize) -> FrequencyTable<String> {
        count_by_category(&self.dataset.papers, Category::Source).top(n)
    }

    /// Word frequencies over every title in the dataset.
    pub fn title_words(&self) -> HashMap<String, usize> {
        title_word_frequencies(self.dataset.papers.iter().map(Paper::title), &self.stop_words)
    }

    /// The first `n` papers in file order.
    pub fn preview(&self, n: usize) -> &[Paper] {
        let end = n.min(self.dataset.len());
        &self.dataset.papers[..end]
    }
}
