//! Bottom-up tabulation with backtracking reconstruction.
//!
//! Phase 1 fills a [`LengthTable`] for `a` against `b`. Phase 2 walks from
//! `(m, n)` toward the origin:
//! - on a character match, emit it and step diagonally;
//! - otherwise step up (`i - 1`) only if `table[i-1][j] > table[i][j-1]`,
//!   else step left (`j - 1`).
//!
//! The strict comparison fixes which optimal string is produced when several
//! exist: ties always move in `j`. This is the reference strategy for large
//! inputs.

use crate::table::LengthTable;
use crate::traits::LcsStrategy;

/// O(m·n) time and space for the table, O(m+n) reconstruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tabulation;

impl LcsStrategy for Tabulation {
    fn name(&self) -> &'static str {
        "tabulation"
    }

    fn solve(&self, a: &[char], b: &[char]) -> Vec<char> {
        let table = {
            #[cfg(feature = "tracing")]
            let _span = tracing::trace_span!("fill_table", rows = a.len() + 1, cols = b.len() + 1)
                .entered();
            LengthTable::build(a, b)
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("backtrack", lcs_len = table.lcs_len()).entered();
        backtrack(&table, a, b)
    }
}

/// Recover one LCS from a filled table.
pub fn backtrack<T: PartialEq + Clone>(table: &LengthTable, a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);

    let mut out = Vec::with_capacity(table.lcs_len());
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) > table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    out.reverse();
    out
}
