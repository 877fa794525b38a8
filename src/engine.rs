//! Engine that runs a selected strategy on one input pair.
//!
//! The engine adds nothing to the algorithms themselves; it owns the choice of
//! strategy and an optional caller-side size envelope, converts `&str` inputs
//! into character sequences, and wraps the result in a [`Solution`].

use crate::error::LcsError;
use crate::strategies::Strategy;
use crate::utils::char_len;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One longest common subsequence, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    strategy: Strategy,
    lcs: String,
    len: usize,
}

impl Solution {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The subsequence itself.
    pub fn as_str(&self) -> &str {
        &self.lcs
    }

    /// Length in characters, which is the LCS length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_string(self) -> String {
        self.lcs
    }
}

/// LCS engine for a given strategy.
///
/// Typical usage:
/// ```
/// use lcs_dp::{LcsEngine, Strategy};
///
/// let engine = LcsEngine::new(Strategy::Memoized);
/// let solution = engine.run("ABCDE", "ACE");
/// assert_eq!(solution.as_str(), "ACE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsEngine {
    strategy: Strategy,
    size_limit: Option<usize>,
}

impl LcsEngine {
    /// Engine without a size envelope.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            size_limit: None,
        }
    }

    /// Engine whose [`run_checked`](Self::run_checked) refuses inputs longer
    /// than `limit` characters.
    pub fn with_size_limit(strategy: Strategy, limit: usize) -> Self {
        Self {
            strategy,
            size_limit: Some(limit),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    /// Compute one LCS of `a` and `b`. Never fails and ignores the envelope.
    pub fn run(&self, a: &str, b: &str) -> Solution {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.run_chars(&a, &b)
    }

    /// Like [`run`](Self::run) on pre-split character sequences.
    pub fn run_chars(&self, a: &[char], b: &[char]) -> Solution {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "lcs_run",
            strategy = self.strategy.name(),
            a_len = a.len(),
            b_len = b.len()
        )
        .entered();

        let lcs: String = self.strategy.solve(a, b).into_iter().collect();
        let len = char_len(&lcs);

        #[cfg(feature = "tracing")]
        tracing::debug!(len, "lcs computed");

        Solution {
            strategy: self.strategy,
            lcs,
            len,
        }
    }

    /// Run only if both inputs fit the configured envelope.
    ///
    /// # Errors
    /// Returns [`LcsError::OutsideEnvelope`] without running the strategy when
    /// the longer input exceeds the limit.
    pub fn run_checked(&self, a: &str, b: &str) -> Result<Solution, LcsError> {
        self.check_envelope(char_len(a).max(char_len(b)))?;
        Ok(self.run(a, b))
    }

    fn check_envelope(&self, len: usize) -> Result<(), LcsError> {
        match self.size_limit {
            Some(limit) if len > limit => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    strategy = self.strategy.name(),
                    len,
                    limit,
                    "input outside envelope"
                );
                Err(LcsError::OutsideEnvelope {
                    strategy: self.strategy,
                    len,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Run every strategy on the same pair, in [`Strategy::ALL`] order.
///
/// With the `parallel` feature the runs are spread over rayon's pool. Each
/// strategy is a pure function, so the output is identical either way.
pub fn compare_all(a: &str, b: &str) -> Vec<Solution> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    #[cfg(feature = "parallel")]
    let solutions = Strategy::ALL[..]
        .par_iter()
        .map(|&s| LcsEngine::new(s).run_chars(&a, &b))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let solutions = Strategy::ALL
        .iter()
        .map(|&s| LcsEngine::new(s).run_chars(&a, &b))
        .collect();

    solutions
}
