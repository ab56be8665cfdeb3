use gene_aligner::{AlignerParameters, PairwiseAligner, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = AlignerParameters::new().with_extract_cap(100)?;
    let aligner = PairwiseAligner::new(params);

    let seq_a = Sequence::new(b"ACGTACGT");
    let seq_b = Sequence::new(b"ACGTAGCT");

    println!("Score: {}", aligner.score(&seq_a, &seq_b));

    let result = aligner.align_with_traceback(&seq_a, &seq_b)?;
    println!("Aligned sequence A: {}", String::from_utf8_lossy(&result.aligned_a));
    println!("Aligned sequence B: {}", String::from_utf8_lossy(&result.aligned_b));
    println!(
        "Matches: {}, mismatches: {}, gaps: {}",
        result.stats.matches, result.stats.mismatches, result.stats.gaps
    );

    Ok(())
}
