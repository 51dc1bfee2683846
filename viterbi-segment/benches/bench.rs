#![cfg(feature = "__test_data")]

use bencher::{benchmark_group, benchmark_main, Bencher};

use viterbi_segment::test_data::{crate_data_dir, model};
use viterbi_segment::{Search, Segmenter};

benchmark_group!(benches, short, long);
benchmark_main!(benches);

fn short(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment("thenewyorkpost", &mut search);
    });
}

fn long(bench: &mut Bencher) {
    let model = model(crate_data_dir());
    let segmenter = Segmenter::new(&model);
    let mut search = Search::default();
    bench.iter(|| {
        let _ = segmenter.segment(
            "acentraleuropeandebtprogrammeisbecauseofthebank",
            &mut search,
        );
    });
}
