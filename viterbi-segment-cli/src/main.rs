//! Command-line driver: train a unigram model from a corpus file and segment text with it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use viterbi_segment::{CorpusModel, Search, Segmenter};

#[derive(Parser)]
#[command(name = "viterbi-segment")]
#[command(about = "Insert word boundaries into unbroken lowercase text", long_about = None)]
#[command(version)]
struct Cli {
    /// Corpus used to train the unigram model
    #[arg(
        short,
        long,
        env = "VITERBI_CORPUS",
        default_value = "eng_news_2015_1M-sentences.txt"
    )]
    corpus: PathBuf,

    /// Log at debug level (`RUST_LOG` takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Text to segment
    #[arg(default_value = "ihaveadogandthedogiscool")]
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let model = CorpusModel::from_file(&cli.corpus)
        .with_context(|| format!("failed to load model from {}", cli.corpus.display()))?;

    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();
    for text in &cli.text {
        let words = segmenter.segment(text, &mut search);
        log::debug!("segmented {:?} into {} words", text, words.len());
        println!("{}", render(words));
    }

    Ok(())
}

fn render<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}
