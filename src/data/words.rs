//! Title word frequencies for the word cloud.
//!
//! Tokenisation is deliberately simple: lowercase ASCII letters only, tokens
//! longer than two characters, minus a fixed English stop-word list.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

/// Tokens must be longer than this to be counted.
const SHORT_TOKEN_LEN: usize = 2;

// ---------------------------------------------------------------------------
// Stop-words
// ---------------------------------------------------------------------------

/// A set of lowercase words excluded from frequency counts.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    /// The NLTK English list from the `stop-words` crate.
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English)
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Build a set from a custom list. Words are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

// ---------------------------------------------------------------------------
// Frequencies
// ---------------------------------------------------------------------------

/// Count words across all titles.
///
/// Titles are lowercased and joined with a space; every character other
/// than `a`–`z` and whitespace is removed (digits, punctuation and accented
/// letters included) before splitting on whitespace.
pub fn title_word_frequencies<'a, I>(titles: I, stop_words: &StopWords) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let corpus = titles
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    let letters: String = corpus
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in letters.split_whitespace() {
        if token.len() > SHORT_TOKEN_LEN && !stop_words.contains(token) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// The `n` most frequent words, by count then alphabetically.
pub fn most_frequent(counts: &HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut words: Vec<(String, usize)> = counts.iter().map(|(w, c)| (w.clone(), *c)).collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(n);
    words
}
