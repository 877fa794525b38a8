//! Core trait shared by every LCS strategy.
//!
//! A strategy is a pure function from two character sequences to one longest
//! common subsequence. Implementations:
//! - must not mutate or retain their inputs,
//! - must scope every intermediate structure (tables, caches, stacks) to the
//!   call that created it,
//! - must return a result whose length equals the true LCS length and which is
//!   a subsequence of both inputs.
//!
//! Which of several equally long answers is returned is up to the strategy, but
//! it must be deterministic for a given input pair.

/// Trait for one LCS solving strategy.
///
/// The trait is object safe so a harness can hold `Box<dyn LcsStrategy>` and
/// select strategies at runtime; see [`crate::Strategy`] for the enum form.
pub trait LcsStrategy: Send + Sync {
    /// Stable, kebab-case identifier of the strategy.
    fn name(&self) -> &'static str;

    /// Compute one longest common subsequence of `a` and `b`.
    ///
    /// Total over all finite inputs, including empty ones. There is no error
    /// path: oversized inputs to an exponential strategy are slow, not wrong.
    fn solve(&self, a: &[char], b: &[char]) -> Vec<char>;

    /// Convenience wrapper over [`solve`](Self::solve) for `&str` inputs.
    ///
    /// Sequences are split into Unicode scalar values, so each `char` is one
    /// sequence element.
    fn solve_str(&self, a: &str, b: &str) -> String {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.solve(&a, &b).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LcsStrategy;

    struct Shortest;

    impl LcsStrategy for Shortest {
        fn name(&self) -> &'static str {
            "shortest"
        }

        fn solve(&self, _a: &[char], _b: &[char]) -> Vec<char> {
            Vec::new()
        }
    }

    #[test]
    fn solve_str_collects_chars() {
        assert_eq!(Shortest.solve_str("abc", "abc"), "");
    }

    #[test]
    fn trait_is_object_safe() {
        let boxed: Box<dyn LcsStrategy> = Box::new(Shortest);
        assert_eq!(boxed.name(), "shortest");
    }
}
