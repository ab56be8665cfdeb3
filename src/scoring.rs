use crate::{INDEL_COST, MATCH_COST, MISMATCH_COST};

/// Placeholder returned for result-table entries the caller asked to skip.
pub const SKIPPED_SCORE: i32 = 0;

/// Edit costs for the alignment recurrence. Matches reward (negative cost);
/// mismatches and indels penalize.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    pub match_cost: i32,
    pub mismatch_cost: i32,
    pub indel_cost: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_cost: MATCH_COST,
            mismatch_cost: MISMATCH_COST,
            indel_cost: INDEL_COST,
        }
    }
}

/// Caller convention for symmetric result tables: only entries strictly
/// below the diagonal are worth computing, the rest mirror them.
pub fn should_compute(row: usize, col: usize) -> bool {
    row > col
}

/// Minimum edit cost over the first `min(len, cap)` characters of each
/// sequence, using two rolling rows of width n+1.
///
/// Cell (i, j) only ever reads the previous row and the already-written
/// left neighbor of the active row, so the full table is never held.
pub(crate) fn score_prefix(a: &[u8], b: &[u8], cap: usize, params: &ScoreParams) -> i32 {
    let m = a.len().min(cap);
    let n = b.len().min(cap);

    // Row 0: aligning j characters of b against nothing is j indels
    let mut previous: Vec<i32> = (0..=n as i32).map(|j| params.indel_cost * j).collect();
    let mut active = vec![0i32; n + 1];

    for i in 1..=m {
        active[0] = params.indel_cost * i as i32;
        for j in 1..=n {
            let vertical = previous[j] + params.indel_cost;
            let horizontal = active[j - 1] + params.indel_cost;
            let diff = if a[i - 1] == b[j - 1] {
                params.match_cost
            } else {
                params.mismatch_cost
            };
            let diagonal = previous[j - 1] + diff;
            active[j] = diagonal.min(vertical).min(horizontal);
        }
        std::mem::swap(&mut previous, &mut active);
    }

    // The swap leaves the last filled row in `previous`
    previous[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &[u8], b: &[u8], cap: usize) -> i32 {
        score_prefix(a, b, cap, &ScoreParams::default())
    }

    #[test]
    fn identical_sequences_score_all_matches() {
        let seq = b"ACGTACGT";
        assert_eq!(score(seq, seq, 5000), MATCH_COST * seq.len() as i32);
    }

    #[test]
    fn empty_sequence_scores_pure_indels() {
        assert_eq!(score(b"CAT", b"", 5000), 3 * INDEL_COST);
        assert_eq!(score(b"", b"CAT", 5000), 3 * INDEL_COST);
        assert_eq!(score(b"", b"", 5000), 0);
    }

    #[test]
    fn score_is_symmetric() {
        let a = b"GATTACA";
        let b = b"GCATGCU";
        assert_eq!(score(a, b, 5000), score(b, a, 5000));
    }

    #[test]
    fn single_deletion_alignment() {
        // AGT vs A-T: match + indel + match
        assert_eq!(score(b"AGT", b"AT", 5000), MATCH_COST + INDEL_COST + MATCH_COST);
    }

    #[test]
    fn input_beyond_cap_is_truncated() {
        let cap = 64;
        let long: Vec<u8> = b"ACGT".iter().cycle().take(cap + 50).copied().collect();
        assert_eq!(score(&long, &long, cap), score(&long[..cap], &long[..cap], cap));
        assert_eq!(score(&long, &long, cap), MATCH_COST * cap as i32);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = b"TTAGGCAT";
        let b = b"TAGCAT";
        assert_eq!(score(a, b, 5000), score(a, b, 5000));
    }

    #[test]
    fn triangular_hint() {
        assert!(should_compute(3, 1));
        assert!(!should_compute(2, 2));
        assert!(!should_compute(1, 3));
    }
}
