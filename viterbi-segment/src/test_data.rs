#![cfg(feature = "__test_data")]

use std::path::PathBuf;

use super::CorpusModel;

#[test]
fn test_data() {
    let model = model(crate_data_dir());
    crate::test_cases::run(&crate::Segmenter::new(&model));
}

/// Build a model from the news sample in `dir`
pub fn model(dir: PathBuf) -> CorpusModel {
    let file = dir.join("news-sample.txt");
    CorpusModel::from_file(&file).unwrap_or_else(|e| panic!("error at {:?}: {}", file, e))
}

pub fn crate_data_dir() -> PathBuf {
    PathBuf::from(format!("{}/../data", env!("CARGO_MANIFEST_DIR")))
}
