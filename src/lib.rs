//! Longest Common Subsequence (LCS) strategies
//!
//! This crate computes one longest common subsequence of two character
//! sequences using four algorithmically distinct strategies, so their time and
//! memory behaviour can be compared side by side.
//!
//! ## Strategies
//! | Strategy | Technique | Time | Space |
//! |---|---|---|---|
//! | [`Exhaustive`] | enumerate every subsequence of `a`, keep the longest found in `b` | O(2^m · n) | O(m) |
//! | [`NaiveRecursive`] | trailing-character case split, no reuse | O(2^(m+n)) | O(m+n) |
//! | [`Memoized`] | the same recurrence with an `(i, j)` cache | O(m·n) | O(m·n) |
//! | [`Tabulation`] | bottom-up length table plus backtracking | O(m·n) | O(m·n) |
//!
//! Every strategy is a pure function of its inputs: no state survives a call,
//! so strategies may be invoked concurrently from any number of threads.
//!
//! ## Quick start
//! ```
//! use lcs_dp::{LcsEngine, Strategy};
//!
//! let engine = LcsEngine::new(Strategy::Tabulation);
//! let solution = engine.run("AGGTAB", "GXTXAYB");
//! assert_eq!(solution.len(), 4);
//! assert_eq!(solution.as_str(), "GTAB");
//! ```
//!
//! The exponential strategies exist as correctness oracles and as a contrast in
//! measured blow-up. Keep their inputs small; [`LcsEngineBuilder`] can enforce a
//! size envelope on the caller side.

pub mod builder;
pub mod engine;
pub mod error;
pub mod memory;
pub mod strategies;
pub mod table;
pub mod traits;
pub mod utils;
pub mod verify;

pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{compare_all, LcsEngine, Solution};
pub use crate::error::LcsError;
pub use crate::strategies::{
    exhaustive::Exhaustive, memoized::Memoized, naive::NaiveRecursive, tabulation::Tabulation,
    ComplexityClass, Strategy,
};
pub use crate::traits::LcsStrategy;
pub use crate::utils::is_subsequence;
