use std::fmt;
use std::ops::{Index, Range};
use std::path::PathBuf;

use smartstring::alias::String;

mod corpus;
pub use corpus::{load_tokens, tokens};
mod model;
pub use model::CorpusModel;

#[cfg(feature = "test-cases")]
pub mod test_cases;
#[cfg(feature = "__test_data")]
pub mod test_data;

/// Finds the most probable split of a string into words known to a [`CorpusModel`]
///
/// The segmenter only borrows the model; any number of segmenters can share one model.
#[derive(Clone, Copy, Debug)]
pub struct Segmenter<'m> {
    model: &'m CorpusModel,
}

impl<'m> Segmenter<'m> {
    pub fn new(model: &'m CorpusModel) -> Self {
        Self { model }
    }

    /// Segment the text in `input`
    ///
    /// The `search` parameter holds the tables used during segmentation; passing it in allows
    /// callers to reuse its allocations across calls. Any input is accepted: substrings the
    /// model does not know score zero, which may leave them (and everything before them)
    /// joined into a single word. Concatenating the returned words always yields `input`.
    pub fn segment<'a>(
        &self,
        input: &str,
        search: &'a mut Search,
    ) -> impl Iterator<Item = &'a str> + ExactSizeIterator {
        SegmentState::new(input, self.model, search).run();
        search.result.iter().map(|v| v.as_str())
    }

    /// Segment `input` into a fresh `Vec`
    pub fn segment_to_vec(&self, input: &str) -> Vec<std::string::String> {
        let mut search = Search::default();
        self.segment(input, &mut search).map(|s| s.to_owned()).collect()
    }
}

struct SegmentState<'a> {
    model: &'a CorpusModel,
    input: &'a str,
    search: &'a mut Search,
}

impl<'a> SegmentState<'a> {
    fn new(input: &'a str, model: &'a CorpusModel, search: &'a mut Search) -> Self {
        search.clear();
        Self {
            model,
            input,
            search,
        }
    }

    fn run(self) {
        let Search {
            best,
            last,
            result,
            offsets,
        } = self.search;
        let (model, text) = (self.model, Text::new(self.input, offsets));

        best.push(1.0);
        last.push(0);
        for end in 1..=text.len() {
            let start = end.saturating_sub(model.max_word_length());
            let candidates = (start..end).map(|split| Candidate {
                probability: best[split] * model.probability(&text[split..end]),
                split,
            });

            let winner = best_candidate(candidates);
            log::trace!("best split at {}: {}", end, winner);
            best.push(winner.probability);
            last.push(winner.split);
        }

        let mut end = text.len();
        while end > 0 {
            let start = last[end];
            result.push(text[start..end].into());
            end = start;
        }
        result.reverse();
    }
}

/// Select the candidate with the highest probability
///
/// The running maximum starts out as `(0.0, 0)` and is only replaced by a candidate with a
/// strictly greater probability. As a result, the first of several equally probable candidates
/// wins, and split `0` is returned if no candidate has a positive probability.
pub fn best_candidate(candidates: impl IntoIterator<Item = Candidate>) -> Candidate {
    let mut best = Candidate::default();
    for candidate in candidates {
        if candidate.probability > best.probability {
            best = candidate;
        }
    }
    best
}

/// Score of a segmentation ending in a word that starts at `split`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Candidate {
    pub probability: f64,
    pub split: usize,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}), {}", self.probability, self.split)
    }
}

/// Tables and output buffer for [`Segmenter::segment()`]
#[derive(Clone, Debug, Default)]
pub struct Search {
    best: Vec<f64>,
    last: Vec<usize>,
    result: Vec<String>,
    offsets: Vec<usize>,
}

impl Search {
    fn clear(&mut self) {
        self.best.clear();
        self.last.clear();
        self.result.clear();
        self.offsets.clear();
    }
}

/// Input text, indexed by character position
#[derive(Debug)]
struct Text<'a> {
    text: &'a str,
    /// Byte offset of every character, followed by the length of `text`
    offsets: &'a [usize],
}

impl<'a> Text<'a> {
    /// Index `text`, filling the (cleared) `offsets` buffer
    fn new(text: &'a str, offsets: &'a mut Vec<usize>) -> Self {
        offsets.extend(text.char_indices().map(|(i, _)| i));
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Number of characters
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

impl<'a> Index<Range<usize>> for Text<'a> {
    type Output = str;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        &self.text[self.offsets[index.start]..self.offsets[index.end]]
    }
}

/// Errors from reading a corpus
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read corpus {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no words found in corpus {path:?}")]
    NoTokens { path: PathBuf },
}

type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

#[cfg(test)]
pub mod tests {
    use super::*;

    fn segment(model: &CorpusModel, text: &str) -> Vec<std::string::String> {
        Segmenter::new(model).segment_to_vec(text)
    }

    #[test]
    fn text_index() {
        let mut offsets = Vec::new();
        let text = Text::new("cantbuymelove", &mut offsets);
        assert_eq!(text.len(), 13);
        assert_eq!(&text[0..text.len()], "cantbuymelove");
        assert_eq!(&text[4..7], "buy");

        let mut offsets = Vec::new();
        let text = Text::new("naïveté", &mut offsets);
        assert_eq!(text.len(), 7);
        assert_eq!(&text[2..5], "ïve");
        assert_eq!(&text[0..0], "");
    }

    #[test]
    fn best() {
        let candidates = vec![
            Candidate {
                probability: 0.999,
                split: 1,
            },
            Candidate {
                probability: 0.111,
                split: 2,
            },
        ];
        assert_eq!(best_candidate(candidates.clone()), candidates[0]);
        assert_eq!(
            best_candidate(candidates.into_iter().rev()),
            Candidate {
                probability: 0.999,
                split: 1
            }
        );
        assert_eq!(best_candidate(Vec::new()), Candidate::default());
        assert_eq!(Candidate::default().to_string(), "(0), 0");
    }

    #[test]
    fn best_keeps_first_of_equals() {
        let candidates = [(0.0, 3), (0.25, 4), (0.25, 5), (0.1, 6)]
            .iter()
            .map(|&(probability, split)| Candidate { probability, split });
        assert_eq!(best_candidate(candidates).split, 4);

        let zeros = (3..6).map(|split| Candidate {
            probability: 0.0,
            split,
        });
        assert_eq!(best_candidate(zeros), Candidate::default());
    }

    #[test]
    fn segment_small() {
        let model = CorpusModel::from_tokens(&["aa", "bb", "ccc", "aa", "aa"]);
        assert_eq!(segment(&model, "aabbccc"), vec!["aa", "bb", "ccc"]);
        assert_eq!(segment(&model, "cccaa"), vec!["ccc", "aa"]);
        assert_eq!(segment(&model, ""), Vec::<std::string::String>::new());
    }

    #[test]
    fn unknown_collapses_to_start() {
        let model = CorpusModel::from_tokens(&["aa", "bb", "ccc", "aa", "aa"]);
        assert_eq!(segment(&model, "aaxbb"), vec!["aaxbb"]);
        // An unknown prefix zeroes every path through it
        assert_eq!(segment(&model, "xaa"), vec!["xaa"]);
        assert_eq!(segment(&model, "aax"), vec!["aax"]);
    }

    #[test]
    fn equal_candidates_prefer_earliest_split() {
        // p(ab) == p(a) * p(b) == 0.125
        let model = CorpusModel::from_tokens(&["a", "a", "b", "b", "b", "b", "ab", "z"]);
        assert_eq!(model.probability("ab"), 0.125);
        assert_eq!(model.probability("a") * model.probability("b"), 0.125);
        assert_eq!(segment(&model, "ab"), vec!["ab"]);
    }

    #[test]
    fn empty_model() {
        let model = CorpusModel::from_tokens(Vec::<&str>::new());
        assert_eq!(segment(&model, "anything"), vec!["anything"]);
        assert_eq!(segment(&model, "a"), vec!["a"]);
    }

    #[test]
    fn non_ascii() {
        let model = CorpusModel::from_tokens(&["caf", "naive", "the"]);
        let text = "thecafé";
        let words = segment(&model, text);
        assert_eq!(words.concat(), text);
        assert_eq!(segment(&model, "ééé").concat(), "ééé");
    }

    #[test]
    fn reuse_search() {
        let model = CorpusModel::from_tokens(&["aa", "bb", "ccc", "aa", "aa"]);
        let segmenter = Segmenter::new(&model);
        let mut search = Search::default();

        let words = segmenter.segment("bbaa", &mut search);
        assert_eq!(words.len(), 2);
        assert_eq!(words.collect::<Vec<_>>(), vec!["bb", "aa"]);

        let words = segmenter.segment("ccc", &mut search);
        assert_eq!(words.collect::<Vec<_>>(), vec!["ccc"]);
    }

    #[test]
    fn reuse_search_buffers() {
        let model = CorpusModel::from_tokens(&["aa", "bb", "ccc", "aa", "aa"]);
        let segmenter = Segmenter::new(&model);
        let mut search = Search::default();

        let _ = segmenter.segment("aabbcccaabbccc", &mut search);
        assert_eq!(search.offsets.len(), 15);
        let (ptr, capacity) = (search.offsets.as_ptr(), search.offsets.capacity());

        let words = segmenter.segment("bbaa", &mut search).collect::<Vec<_>>();
        assert_eq!(words, vec!["bb", "aa"]);
        assert_eq!(search.offsets, vec![0, 1, 2, 3, 4]);
        assert_eq!(search.offsets.as_ptr(), ptr);
        assert_eq!(search.offsets.capacity(), capacity);
    }

    #[test]
    fn reversing_result_twice() {
        let model = CorpusModel::from_tokens(&["aa", "bb", "ccc", "aa", "aa"]);
        let segmenter = Segmenter::new(&model);
        let mut search = Search::default();

        for text in &["", "aa", "aabbccc"] {
            let _ = segmenter.segment(text, &mut search);
            let words = search.result.clone();
            search.result.reverse();
            search.result.reverse();
            assert_eq!(search.result, words);
        }
        let words = search.result.iter().map(|w| w.as_str()).collect::<Vec<_>>();
        assert_eq!(words, vec!["aa", "bb", "ccc"]);
    }
}
