//! Exhaustive enumeration: the brute-force correctness oracle.
//!
//! Every one of the 2^m position subsets of `a` is visited in increasing
//! bitmask order (bit `k` selects `a[k]`), materialised as a candidate and
//! tested against `b` with [`is_subsequence`]. The first longest candidate
//! wins ties.
//!
//! The mask is a growable bit vector rather than a machine word, so there is no
//! hard cap on `m`; in practice anything beyond ~25 characters is out of reach.

use crate::traits::LcsStrategy;
use crate::utils::is_subsequence;

/// O(2^m · n) time, O(m) space per candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl LcsStrategy for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, a: &[char], b: &[char]) -> Vec<char> {
        let mut mask = SubsetMask::new(a.len());
        let mut best: Vec<char> = Vec::new();
        let mut candidate: Vec<char> = Vec::with_capacity(a.len());

        loop {
            candidate.clear();
            candidate.extend(mask.select(a));

            if candidate.len() > best.len() && is_subsequence(&candidate, b) {
                best.clone_from(&candidate);
            }

            if !mask.advance() {
                break;
            }
        }

        best
    }
}

/// Little-endian bit vector counting through 0..2^width.
struct SubsetMask {
    bits: Vec<bool>,
}

impl SubsetMask {
    fn new(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    /// Elements of `items` whose bit is set, in index order.
    fn select<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.bits
            .iter()
            .zip(items)
            .filter_map(|(&on, item)| on.then_some(item))
    }

    /// Increment by one. Returns false once every subset has been visited.
    fn advance(&mut self) -> bool {
        for bit in self.bits.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &str, b: &str) -> String {
        Exhaustive.solve_str(a, b)
    }

    #[test]
    fn mask_visits_every_subset_once() {
        let mut mask = SubsetMask::new(3);
        let mut seen = vec![mask.bits.clone()];
        while mask.advance() {
            seen.push(mask.bits.clone());
        }
        assert_eq!(seen.len(), 8);
        // 1 -> bit 0 set, 2 -> bit 1 set
        assert_eq!(seen[1], vec![true, false, false]);
        assert_eq!(seen[2], vec![false, true, false]);
        assert_eq!(seen[7], vec![true, true, true]);
    }

    #[test]
    fn zero_width_mask_has_single_subset() {
        let mut mask = SubsetMask::new(0);
        assert_eq!(mask.select(&[] as &[char]).count(), 0);
        assert!(!mask.advance());
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(run("", ""), "");
        assert_eq!(run("", "XYZ"), "");
        assert_eq!(run("ABC", ""), "");
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(run("ABCDE", "ACE"), "ACE");
        assert_eq!(run("ABC", "XYZ"), "");
        assert_eq!(run("ABCDEFG", "ABCDEFG"), "ABCDEFG");
        assert_eq!(run("AGGTAB", "GXTXAYB").chars().count(), 4);
    }

    #[test]
    fn ties_keep_lowest_mask() {
        // "AB" (mask 0b011) is reached before "BA" is even a candidate; with
        // b = "BA" only single letters match, and "A" (mask 0b01) comes first.
        assert_eq!(run("AB", "BA"), "A");
        assert_eq!(run("ABCBDAB", "BDCABA"), "BCBA");
    }
}
