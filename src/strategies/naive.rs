//! Naive recursion on trailing characters, with no reuse of subresults.
//!
//! Overlapping subproblems are recomputed on purpose; this strategy is the
//! exponential baseline the memoized and tabulated strategies are measured
//! against. Call depth is at most `m + n`, far below what the exponential
//! running time allows anyone to reach.

use crate::traits::LcsStrategy;

/// O(2^(m+n)) time in the worst case, O(m+n) call depth.
///
/// When the two candidate branches tie in length, the branch that drops the
/// last character of `b` wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveRecursive;

impl LcsStrategy for NaiveRecursive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn solve(&self, a: &[char], b: &[char]) -> Vec<char> {
        lcs_prefix(a, b)
    }
}

fn lcs_prefix(a: &[char], b: &[char]) -> Vec<char> {
    match (a.split_last(), b.split_last()) {
        (Some((&x, a_rest)), Some((&y, b_rest))) => {
            if x == y {
                let mut out = lcs_prefix(a_rest, b_rest);
                out.push(x);
                out
            } else {
                let skip_b = lcs_prefix(a, b_rest);
                let skip_a = lcs_prefix(a_rest, b);
                if skip_b.len() >= skip_a.len() {
                    skip_b
                } else {
                    skip_a
                }
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &str, b: &str) -> String {
        NaiveRecursive.solve_str(a, b)
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(run("", ""), "");
        assert_eq!(run("", "XYZ"), "");
        assert_eq!(run("ABC", ""), "");
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(run("AGGTAB", "GXTXAYB"), "GTAB");
        assert_eq!(run("ABCDE", "ACE"), "ACE");
        assert_eq!(run("ABC", "XYZ"), "");
        assert_eq!(run("ABCDEFG", "ABCDEFG"), "ABCDEFG");
    }

    #[test]
    fn ties_prefer_dropping_from_b() {
        assert_eq!(run("AB", "BA"), "B");
        assert_eq!(run("ABCBDAB", "BDCABA"), "BDAB");
        assert_eq!(run("ACCG", "ACGC"), "ACG");
    }
}
