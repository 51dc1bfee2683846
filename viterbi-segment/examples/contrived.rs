use viterbi_segment::{CorpusModel, Search, Segmenter};

fn main() {
    let mut tokens = Vec::new();
    tokens.extend(std::iter::repeat("choose").take(50));
    tokens.extend(std::iter::repeat("chooses").take(10));
    tokens.extend(std::iter::repeat("spain").take(50));
    tokens.extend(std::iter::repeat("pain").take(10));

    let model = CorpusModel::from_tokens(tokens);
    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();

    let words = segmenter.segment("choosespain", &mut search);

    println!("{:?}", words.collect::<Vec<&str>>());
}
