use crate::scoring::ScoreParams;
use crate::AlignerError;

/// Gap marker in reconstructed alignments.
pub const GAP: u8 = b'-';

/// Which predecessor cell produced a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Match or substitution, from (i-1, j-1)
    Diagonal,
    /// Deletion from sequence A, from (i-1, j)
    Vertical,
    /// Insertion into sequence B, from (i, j-1)
    Horizontal,
    /// Cell (0, 0); terminates the backward walk
    Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
    pub execution_time_ms: f32,
}

/// One optimal alignment over the bounded prefixes: two equal-length byte
/// strings over the input alphabet plus [`GAP`], the edit operations that
/// produced them, and the total cost.
#[derive(Debug, Clone)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    pub stats: AlignmentStats,
}

impl AlignmentResult {
    /// Alignment length including gaps.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Dense backpointer storage. Coordinates are bounded by the extract cap,
/// so a flat array beats a map keyed by (i, j).
struct TracebackMatrix {
    data: Vec<Direction>,
    cols: usize,
}

impl TracebackMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Direction::Origin; rows * cols],
            cols,
        }
    }

    fn set(&mut self, row: usize, col: usize, value: Direction) {
        self.data[row * self.cols + col] = value;
    }

    fn get(&self, row: usize, col: usize) -> Direction {
        self.data[row * self.cols + col]
    }
}

/// Full-table alignment over bounded prefixes, kept long enough to walk the
/// backpointers. Built fresh per call and dropped with the result.
pub(crate) struct Traceback<'a> {
    a: &'a [u8],
    b: &'a [u8],
    score: i32,
    matrix: TracebackMatrix,
}

impl<'a> Traceback<'a> {
    /// Fills the complete (m+1) x (n+1) cost table and records, per cell,
    /// which predecessor achieved the minimum. Ties break diagonal first,
    /// then vertical, then horizontal.
    pub(crate) fn build(a: &'a [u8], b: &'a [u8], cap: usize, params: &ScoreParams) -> Self {
        let m = a.len().min(cap);
        let n = b.len().min(cap);
        let a = &a[..m];
        let b = &b[..n];

        let mut table = vec![vec![0i32; n + 1]; m + 1];
        let mut matrix = TracebackMatrix::new(m + 1, n + 1);

        for i in 1..=m {
            table[i][0] = params.indel_cost * i as i32;
            matrix.set(i, 0, Direction::Vertical);
        }
        for j in 1..=n {
            table[0][j] = params.indel_cost * j as i32;
            matrix.set(0, j, Direction::Horizontal);
        }

        for i in 1..=m {
            for j in 1..=n {
                let vertical = table[i - 1][j] + params.indel_cost;
                let horizontal = table[i][j - 1] + params.indel_cost;
                let diff = if a[i - 1] == b[j - 1] {
                    params.match_cost
                } else {
                    params.mismatch_cost
                };
                let diagonal = table[i - 1][j - 1] + diff;

                if diagonal <= vertical && diagonal <= horizontal {
                    table[i][j] = diagonal;
                    matrix.set(i, j, Direction::Diagonal);
                } else if vertical <= horizontal {
                    table[i][j] = vertical;
                    matrix.set(i, j, Direction::Vertical);
                } else {
                    table[i][j] = horizontal;
                    matrix.set(i, j, Direction::Horizontal);
                }
            }
        }

        Self {
            a,
            b,
            score: table[m][n],
            matrix,
        }
    }

    /// Walks the backpointers from (m, n) to the origin, emitting both
    /// aligned strings. The walk builds everything backward, so the buffers
    /// are reversed before returning.
    ///
    /// Every cell reachable from (m, n) carries a legal pointer; hitting one
    /// that cannot apply at the current coordinate is a table-construction
    /// defect and is reported as [`AlignerError::MissingBackpointer`].
    pub(crate) fn reconstruct_alignment(&self) -> Result<AlignmentResult, AlignerError> {
        let mut aligned_a = Vec::new();
        let mut aligned_b = Vec::new();
        let mut operations = Vec::new();

        let mut i = self.a.len();
        let mut j = self.b.len();

        while (i, j) != (0, 0) {
            match self.matrix.get(i, j) {
                Direction::Diagonal if i > 0 && j > 0 => {
                    i -= 1;
                    j -= 1;
                    aligned_a.push(self.a[i]);
                    aligned_b.push(self.b[j]);
                    operations.push(if self.a[i] == self.b[j] {
                        TracebackOperation::Match
                    } else {
                        TracebackOperation::Mismatch
                    });
                }
                Direction::Vertical if i > 0 => {
                    i -= 1;
                    aligned_a.push(self.a[i]);
                    aligned_b.push(GAP);
                    operations.push(TracebackOperation::Deletion);
                }
                Direction::Horizontal if j > 0 => {
                    j -= 1;
                    aligned_a.push(GAP);
                    aligned_b.push(self.b[j]);
                    operations.push(TracebackOperation::Insertion);
                }
                _ => return Err(AlignerError::MissingBackpointer { i, j }),
            }
        }

        aligned_a.reverse();
        aligned_b.reverse();
        operations.reverse();

        let stats = operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc
            });

        Ok(AlignmentResult {
            score: self.score,
            aligned_a,
            aligned_b,
            operations,
            stats,
        })
    }
}
