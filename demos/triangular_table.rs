use gene_aligner::{should_compute, PairwiseAligner, Sequence, SKIPPED_SCORE};

// Fills a symmetric all-pairs score table the way a batch driver would:
// only entries strictly below the diagonal are computed, the rest stay at
// the placeholder and would be mirrored by the display layer.
fn main() {
    env_logger::init();

    let sequences = [
        Sequence::from("GATTACA"),
        Sequence::from("GCATGCT"),
        Sequence::from("ACGTACGT"),
        Sequence::from("ACGT"),
    ];

    let aligner = PairwiseAligner::default();
    let count = sequences.len();
    let mut table = vec![vec![SKIPPED_SCORE; count]; count];

    for row in 0..count {
        for col in 0..count {
            table[row][col] =
                aligner.score_table_entry(&sequences[row], &sequences[col], row, col);
        }
    }

    for row in 0..count {
        for col in 0..count {
            if should_compute(row, col) {
                print!("{:>6}", table[row][col]);
            } else {
                print!("{:>6}", "-");
            }
        }
        println!();
    }
}
