//! Memoized (top-down) recursion.
//!
//! Same recurrence and tie-break as [`NaiveRecursive`](super::naive::NaiveRecursive),
//! keyed by the pair of remaining prefix lengths `(i, j)`. The recursion is
//! driven by an explicit work stack so inputs of several thousand characters do
//! not exhaust the call stack:
//! - the top `(i, j)` is resolved once all the subproblems it depends on are
//!   cached, then popped;
//! - otherwise its missing dependencies are pushed and it stays on the stack.
//!
//! Results are stored as `Rc<[char]>` so a mismatch cell shares its winning
//! child instead of copying it. The cache lives only for one `solve` call.

use std::collections::HashMap;
use std::rc::Rc;

use crate::traits::LcsStrategy;

type Cache = HashMap<(usize, usize), Rc<[char]>>;

/// O(m·n) distinct subproblems, O(m·n) cache entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Memoized;

impl LcsStrategy for Memoized {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, a: &[char], b: &[char]) -> Vec<char> {
        let empty: Rc<[char]> = Rc::from(Vec::new());
        let mut cache = Cache::new();
        let mut stack = vec![(a.len(), b.len())];

        while let Some(&(i, j)) = stack.last() {
            if i == 0 || j == 0 || cache.contains_key(&(i, j)) {
                stack.pop();
                continue;
            }

            let resolved = if a[i - 1] == b[j - 1] {
                match lookup(&cache, &empty, i - 1, j - 1) {
                    Some(prefix) => Some(append(&prefix, a[i - 1])),
                    None => {
                        stack.push((i - 1, j - 1));
                        None
                    }
                }
            } else {
                match (
                    lookup(&cache, &empty, i, j - 1),
                    lookup(&cache, &empty, i - 1, j),
                ) {
                    (Some(skip_b), Some(skip_a)) => {
                        Some(if skip_b.len() >= skip_a.len() {
                            skip_b
                        } else {
                            skip_a
                        })
                    }
                    (skip_b, skip_a) => {
                        // (i, j-1) is pushed last so it is solved first
                        if skip_a.is_none() {
                            stack.push((i - 1, j));
                        }
                        if skip_b.is_none() {
                            stack.push((i, j - 1));
                        }
                        None
                    }
                }
            };

            if let Some(result) = resolved {
                cache.insert((i, j), result);
                stack.pop();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(cached = cache.len(), "memoized solve finished");

        lookup(&cache, &empty, a.len(), b.len())
            .map(|r| r.to_vec())
            .unwrap_or_default()
    }
}

/// Cached result for `(i, j)`; base cases share `empty` without touching the
/// cache.
fn lookup(cache: &Cache, empty: &Rc<[char]>, i: usize, j: usize) -> Option<Rc<[char]>> {
    if i == 0 || j == 0 {
        return Some(Rc::clone(empty));
    }
    cache.get(&(i, j)).cloned()
}

fn append(prefix: &[char], ch: char) -> Rc<[char]> {
    prefix.iter().copied().chain(std::iter::once(ch)).collect()
}
