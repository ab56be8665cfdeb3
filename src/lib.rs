use std::time::Instant;

use log::debug;
use thiserror::Error;

mod scoring;
mod traceback;

pub use scoring::{should_compute, ScoreParams, SKIPPED_SCORE};
pub use traceback::{AlignmentResult, AlignmentStats, TracebackOperation, GAP};

use traceback::Traceback;

/// Align only this many leading characters of each sequence when scoring.
pub const MAX_CHARACTERS_TO_ALIGN: usize = 5000;

/// Extraction builds the full quadratic table, so its cap is much smaller.
pub const MAX_CHARACTERS_TO_EXTRACT: usize = 100;

/// Hard ceiling on the extraction cap; the backpointer matrix is
/// (cap+1) x (cap+1) cells.
pub const MAX_EXTRACT_CAP: usize = 10_000;

// Edit costs; lower totals mean more similar sequences
pub const MATCH_COST: i32 = -3;
pub const MISMATCH_COST: i32 = 1;
pub const INDEL_COST: i32 = 5;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("missing backpointer at ({i}, {j})")]
    MissingBackpointer { i: usize, j: usize },
}

/// Per-aligner configuration. Caps bound the prefix of each sequence that
/// participates in an alignment; anything beyond a cap is silently ignored.
#[derive(Debug, Clone, Copy)]
pub struct AlignerParameters {
    score_cap: usize,
    extract_cap: usize,
}

impl Default for AlignerParameters {
    fn default() -> Self {
        Self {
            score_cap: MAX_CHARACTERS_TO_ALIGN,
            extract_cap: MAX_CHARACTERS_TO_EXTRACT,
        }
    }
}

impl AlignerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score_cap(mut self, cap: usize) -> Self {
        self.score_cap = cap;
        self
    }

    pub fn with_extract_cap(mut self, cap: usize) -> Result<Self, AlignerError> {
        if cap > MAX_EXTRACT_CAP {
            return Err(AlignerError::InvalidParameters(format!(
                "Extract cap cannot be greater than {}",
                MAX_EXTRACT_CAP
            )));
        }
        self.extract_cap = cap;
        Ok(self)
    }

    pub fn score_cap(&self) -> usize {
        self.score_cap
    }

    pub fn extract_cap(&self) -> usize {
        self.extract_cap
    }
}

/// A gene sequence held as raw bytes. Any byte alphabet works; symbols are
/// only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// Pairwise global aligner over bounded sequence prefixes.
///
/// Scoring runs in O(min(len, score_cap)) memory with two rolling rows;
/// extraction builds the full table plus backpointers over the (much
/// shorter) extract cap and walks it backward to recover one optimal
/// alignment. Both operations allocate per call and hold no state between
/// calls, so an aligner may be shared freely across threads.
pub struct PairwiseAligner {
    params: AlignerParameters,
    score_params: ScoreParams,
}

impl PairwiseAligner {
    pub fn new(params: AlignerParameters) -> Self {
        Self {
            params,
            score_params: ScoreParams::default(),
        }
    }

    /// Minimum edit cost between the first `score_cap` characters of each
    /// sequence. Longer inputs are truncated, never rejected; an empty
    /// sequence costs pure indels against the other prefix.
    pub fn score(&self, seq_a: &Sequence, seq_b: &Sequence) -> i32 {
        debug!(
            "scoring {} x {} (cap {})",
            seq_a.len().min(self.params.score_cap),
            seq_b.len().min(self.params.score_cap),
            self.params.score_cap
        );
        scoring::score_prefix(
            seq_a.as_bytes(),
            seq_b.as_bytes(),
            self.params.score_cap,
            &self.score_params,
        )
    }

    /// Scoring entry point for callers filling a symmetric result table.
    ///
    /// Only entries strictly below the diagonal (`row > col`) are computed;
    /// for the rest the caller mirrors or ignores the value, so this returns
    /// [`SKIPPED_SCORE`] without touching the sequences.
    pub fn score_table_entry(
        &self,
        seq_a: &Sequence,
        seq_b: &Sequence,
        row: usize,
        col: usize,
    ) -> i32 {
        if !should_compute(row, col) {
            return SKIPPED_SCORE;
        }
        self.score(seq_a, seq_b)
    }

    /// Aligns the first `extract_cap` characters of each sequence and
    /// reconstructs one optimal alignment as two equal-length gapped
    /// strings, plus the edit operations that produced it.
    ///
    /// Ties in the recurrence break diagonal first, then vertical, then
    /// horizontal, so the returned alignment is deterministic.
    pub fn align_with_traceback(
        &self,
        seq_a: &Sequence,
        seq_b: &Sequence,
    ) -> Result<AlignmentResult, AlignerError> {
        let start_time = Instant::now();
        debug!(
            "extracting alignment {} x {} (cap {})",
            seq_a.len().min(self.params.extract_cap),
            seq_b.len().min(self.params.extract_cap),
            self.params.extract_cap
        );

        let traceback = Traceback::build(
            seq_a.as_bytes(),
            seq_b.as_bytes(),
            self.params.extract_cap,
            &self.score_params,
        );
        let mut result = traceback.reconstruct_alignment()?;
        result.stats.execution_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
        Ok(result)
    }
}

impl Default for PairwiseAligner {
    fn default() -> Self {
        Self::new(AlignerParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_cap_is_bounded() {
        assert!(AlignerParameters::new()
            .with_extract_cap(MAX_EXTRACT_CAP + 1)
            .is_err());
        let params = AlignerParameters::new().with_extract_cap(50).unwrap();
        assert_eq!(params.extract_cap(), 50);
    }

    #[test]
    fn table_entry_skips_diagonal_and_above() {
        let aligner = PairwiseAligner::default();
        let a = Sequence::from("AGT");
        let b = Sequence::from("AT");

        assert_eq!(aligner.score_table_entry(&a, &b, 2, 2), SKIPPED_SCORE);
        assert_eq!(aligner.score_table_entry(&a, &b, 1, 3), SKIPPED_SCORE);
        assert_eq!(aligner.score_table_entry(&a, &b, 3, 1), aligner.score(&a, &b));
    }

    #[test]
    fn traceback_score_matches_score_engine() {
        let aligner = PairwiseAligner::default();
        let a = Sequence::from("AGT");
        let b = Sequence::from("AT");

        let result = aligner.align_with_traceback(&a, &b).unwrap();
        assert_eq!(result.score, aligner.score(&a, &b));
    }
}
