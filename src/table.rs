//! Length table used by the bottom-up strategy.
//!
//! `LengthTable` stores, for every prefix pair, the LCS length of
//! `a[0..i]` and `b[0..j]`:
//! - `table[0][*] = table[*][0] = 0`,
//! - `table[i][j] = table[i-1][j-1] + 1` if `a[i-1] == b[j-1]`,
//! - otherwise `max(table[i-1][j], table[i][j-1])`.
//!
//! The table is a single row-major allocation of `(m+1) * (n+1)` cells.

/// Full (m+1)×(n+1) LCS length table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LengthTable {
    /// Fill the table for `a` (rows) against `b` (columns) in increasing order
    /// of `i`, then `j`.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            let ch = &a[i - 1];
            for j in 1..cols {
                let idx = i * cols + j;
                cells[idx] = if *ch == b[j - 1] {
                    cells[idx - cols - 1] + 1
                } else {
                    cells[idx - cols].max(cells[idx - 1])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `a[0..i]` and `b[0..j]`.
    ///
    /// # Panics
    /// Panics if `i > m` or `j > n`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// LCS length of the full inputs, i.e. the bottom-right cell.
    #[inline]
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0) as usize
    }

    /// Number of cells held; `(m+1) * (n+1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: even two empty inputs produce the single cell (0, 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Last row of the length table of `x` against `y`, in O(|y|) space.
///
/// Returns a vector of length |y|+1 where `row[j] = LCS(x, y[0..j])`.
pub fn last_row<T: PartialEq>(x: &[T], y: &[T]) -> Vec<u32> {
    let n = y.len();
    let mut prev = vec![0u32; n + 1];
    let mut curr = vec![0u32; n + 1];

    for cx in x {
        for j in 1..=n {
            curr[j] = if *cx == y[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_give_single_zero_cell() {
        let t = LengthTable::build::<u8>(b"", b"");
        assert_eq!((t.rows(), t.cols()), (1, 1));
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.lcs_len(), 0);
    }

    #[test]
    fn borders_are_zero() {
        let t = LengthTable::build(b"ABCBDAB", b"BDCABA");
        for i in 0..t.rows() {
            assert_eq!(t.get(i, 0), 0);
        }
        for j in 0..t.cols() {
            assert_eq!(t.get(0, j), 0);
        }
        assert_eq!(t.lcs_len(), 4);
    }

    #[test]
    fn cells_follow_recurrence() {
        let a = b"AGGTAB";
        let b = b"GXTXAYB";
        let t = LengthTable::build(a, b);
        for i in 1..t.rows() {
            for j in 1..t.cols() {
                let expected = if a[i - 1] == b[j - 1] {
                    t.get(i - 1, j - 1) + 1
                } else {
                    t.get(i - 1, j).max(t.get(i, j - 1))
                };
                assert_eq!(t.get(i, j), expected, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn last_row_matches_table() {
        let a = b"ACCGGTCGAGTG";
        let b = b"GTCGTTCGGAAT";
        let t = LengthTable::build(a, b);
        let row = last_row(a, b);
        for (j, v) in row.iter().enumerate() {
            assert_eq!(*v, t.get(a.len(), j));
        }
    }

    #[test]
    fn last_row_basic_cases() {
        assert_eq!(last_row(b"", b""), vec![0]);
        assert_eq!(last_row(b"A", b""), vec![0]);
        assert_eq!(last_row(b"", b"A"), vec![0, 0]);
        assert_eq!(last_row(b"A", b"A"), vec![0, 1]);
        assert_eq!(last_row(b"A", b"B"), vec![0, 0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let t = LengthTable::build(b"AB", b"A");
        t.get(3, 0);
    }
}
