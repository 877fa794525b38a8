//! Sequence helpers shared by the strategies and the verification layer.

/// Returns true iff `sub` is a subsequence of `main`.
///
/// Two-cursor scan: the cursor into `main` advances on every step, the cursor
/// into `sub` only on a match. Runs in O(|main|) time with O(1) extra space.
/// The empty sequence is a subsequence of everything, including the empty
/// sequence.
#[inline]
pub fn is_subsequence<T: PartialEq>(sub: &[T], main: &[T]) -> bool {
    let mut i = 0usize;
    let mut j = 0usize;
    while i < sub.len() && j < main.len() {
        if sub[i] == main[j] {
            i += 1;
        }
        j += 1;
    }
    i == sub.len()
}

/// `&str` form of [`is_subsequence`], comparing Unicode scalar values.
pub fn is_subsequence_str(sub: &str, main: &str) -> bool {
    let mut haystack = main.chars();
    sub.chars().all(|c| haystack.any(|h| h == c))
}

/// Number of `char`s in `s`; the length unit every strategy reports in.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
