use std::iter::FromIterator;
use std::path::Path;

use smartstring::alias::String;

use crate::{corpus, Error, HashMap};

/// Unigram frequencies gathered from a corpus
///
/// A model is built once from a sequence of tokens and is immutable afterwards, so it can be
/// shared freely between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct CorpusModel {
    frequencies: HashMap<String, u64>,
    total: f64,
    max_word_length: usize,
}

impl CorpusModel {
    /// Count the given tokens
    ///
    /// Tokens are expected to be normalized (lowercased) already; see [`crate::tokens()`].
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies = HashMap::<String, u64>::default();
        let (mut total, mut max_word_length) = (0u64, 0);
        for token in tokens {
            let token = token.as_ref();
            *frequencies.entry(token.into()).or_default() += 1;
            total += 1;
            max_word_length = max_word_length.max(token.chars().count());
        }

        Self {
            frequencies,
            total: total as f64,
            max_word_length,
        }
    }

    /// Read and tokenize the corpus at `path`, then count its tokens
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let model = Self::from_tokens(corpus::load_tokens(path)?);
        log::info!(
            "built model from {:?}: {} distinct words, {} tokens, longest word {}",
            path,
            model.len(),
            model.total,
            model.max_word_length
        );
        Ok(model)
    }

    /// Probability of `word` occurring in the corpus
    ///
    /// Words that were never seen score exactly `0.0`, as does every word in an empty model.
    pub fn probability(&self, word: &str) -> f64 {
        match self.frequencies.get(word) {
            Some(&count) if self.total > 0.0 => count as f64 / self.total,
            _ => 0.0,
        }
    }

    /// Number of times `word` occurred in the corpus
    pub fn count(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Total number of tokens counted
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Length in characters of the longest token counted
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CorpusModel {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
