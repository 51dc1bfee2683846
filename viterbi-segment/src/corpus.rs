use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{bytes, Regex};

use crate::Error;

/// Read the corpus file at `path` and extract its tokens
///
/// Fails if the file cannot be read, or if it does not contain a single token.
pub fn load_tokens(path: &Path) -> Result<Vec<std::string::String>, Error> {
    static WORD: Lazy<bytes::Regex> = Lazy::new(|| bytes::Regex::new("[A-Za-z]+").unwrap());

    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    let tokens = WORD
        .find_iter(&data)
        .map(|m| std::string::String::from_utf8_lossy(m.as_bytes()).to_ascii_lowercase())
        .collect::<Vec<_>>();
    if tokens.is_empty() {
        return Err(Error::NoTokens {
            path: path.to_owned(),
        });
    }

    log::debug!("extracted {} tokens from {:?}", tokens.len(), path);
    Ok(tokens)
}

/// Extract lowercased words from `text`
///
/// A word is a maximal run of ASCII letters; everything else (digits, punctuation, whitespace
/// and any non-ASCII characters) separates words.
pub fn tokens(text: &str) -> impl Iterator<Item = std::string::String> + '_ {
    static WORD: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]+").unwrap());
    WORD.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}
