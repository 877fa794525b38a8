//! Correctness verdicts for computed subsequences.
//!
//! A result is accepted when it has the expected LCS length and is a
//! subsequence of both inputs. The literal string is never compared, since
//! several optimal answers may exist and strategies may legitimately differ.

use crate::table::last_row;
use crate::utils::{char_len, is_subsequence_str};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed { reason: String },
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed { .. } => "failed",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Passed => None,
            Verdict::Failed { reason } => Some(reason.as_str()),
        }
    }
}

/// LCS length of `a` and `b`, computed in O(|b|) space without reconstruction.
pub fn reference_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    last_row(&a, &b).last().copied().unwrap_or(0) as usize
}

/// Check `result` against the inputs it was computed from.
pub fn verify(a: &str, b: &str, result: &str, expected_len: usize) -> Verdict {
    let actual = char_len(result);
    if actual != expected_len {
        return Verdict::Failed {
            reason: format!("expected length {expected_len}, got {actual}"),
        };
    }
    if !is_subsequence_str(result, a) {
        return Verdict::Failed {
            reason: format!("'{result}' is not a subsequence of the first input"),
        };
    }
    if !is_subsequence_str(result, b) {
        return Verdict::Failed {
            reason: format!("'{result}' is not a subsequence of the second input"),
        };
    }
    Verdict::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_len_known_pairs() {
        assert_eq!(reference_len("", ""), 0);
        assert_eq!(reference_len("AGGTAB", "GXTXAYB"), 4);
        assert_eq!(reference_len("ABCBDAB", "BDCABA"), 4);
        assert_eq!(reference_len("ABC", "XYZ"), 0);
    }

    #[test]
    fn accepts_any_optimal_answer() {
        assert!(verify("ABCBDAB", "BDCABA", "BCAB", 4).is_passed());
        assert!(verify("ABCBDAB", "BDCABA", "BDAB", 4).is_passed());
        assert!(verify("ABCBDAB", "BDCABA", "BCBA", 4).is_passed());
    }

    #[test]
    fn rejects_wrong_length() {
        let v = verify("ABCDE", "ACE", "AC", 3);
        assert_eq!(v.label(), "failed");
        assert_eq!(v.reason(), Some("expected length 3, got 2"));
    }

    #[test]
    fn rejects_non_subsequence() {
        let v = verify("ABCDE", "ACE", "ECA", 3);
        assert!(!v.is_passed());
        assert!(v.reason().unwrap().contains("first input"));

        let v = verify("ACE", "ABCDE", "ACD", 3);
        assert!(v.reason().unwrap().contains("first input"));

        let v = verify("ABCDE", "ACE", "ABC", 3);
        assert!(v.reason().unwrap().contains("second input"));
    }

    #[test]
    fn empty_result_for_disjoint_inputs() {
        assert_eq!(verify("ABC", "XYZ", "", 0), Verdict::Passed);
    }
}
