use crate::{Search, Segmenter};

/// Run a segmenter against the built-in test cases
///
/// The cases assume a model trained on `data/news-sample.txt` or a superset of it.
pub fn run(segmenter: &Segmenter<'_>) {
    let mut search = Search::default();
    {
        let words = segmenter.segment("", &mut search);
        assert_eq!(words.len(), 0);
    }

    let mut success = true;
    for test in TEST_CASES.iter().copied() {
        success &= assert_segments(test, &mut search, segmenter);
    }

    for test in UNKNOWN.iter().copied() {
        success &= assert_segments(test, &mut search, segmenter);
    }

    assert!(success);
}

pub fn assert_segments(s: &[&str], search: &mut Search, segmenter: &Segmenter<'_>) -> bool {
    let cmp = segmenter.segment(&s.join(""), search).collect::<Vec<_>>();
    let success = cmp == s;
    if !success {
        println!("expected: {:?}", s);
        println!("actual:   {:?}\n", cmp);
    }
    success
}

pub fn check_segments(s: &[&str], search: &mut Search, segmenter: &Segmenter<'_>) -> bool {
    s == segmenter.segment(&s.join(""), search).collect::<Vec<_>>()
}

/// Built-in test cases
///
/// These are exposed so that you can test with different data sources.
pub const TEST_CASES: &[&[&str]] = &[
    &["the", "new", "york", "post"],
    &["a", "source", "told", "the", "new", "york", "post"],
    &["the", "wedding", "was", "a", "scientology", "ceremony"],
    &["the", "bank", "will", "start", "buying", "government", "debt"],
    &[
        "a",
        "central",
        "european",
        "debt",
        "programme",
        "is",
        "because",
        "of",
        "the",
        "bank",
    ],
];

/// Text made of words the news sample does not contain
///
/// No known word ends the text, so the whole input collapses into one word.
const UNKNOWN: &[&[&str]] = &[
    // "dog", "have" and "cool" are not in the news sample
    &["ihaveadogandthedogiscool"],
];
