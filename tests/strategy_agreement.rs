use lcs_dp::verify::reference_len;
use lcs_dp::{is_subsequence, Strategy};
use proptest::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn full_lcs_len(s: &[char], t: &[char]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + if s[i - 1] == t[j - 1] { 1 } else { 0 };
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn all_strategies_agree_on_length(a in "[ACGT]{0,7}", b in "[ACGT]{0,7}") {
        let (s, t) = (chars(&a), chars(&b));
        let oracle = Strategy::Exhaustive.solve(&s, &t).len();
        prop_assert_eq!(oracle, full_lcs_len(&s, &t));
        for strategy in Strategy::ALL {
            prop_assert_eq!(strategy.solve(&s, &t).len(), oracle, "strategy {}", strategy);
        }
    }

    #[test]
    fn results_are_common_subsequences(a in "[ABC]{0,8}", b in "[ABC]{0,8}") {
        let (s, t) = (chars(&a), chars(&b));
        for strategy in Strategy::ALL {
            let lcs = strategy.solve(&s, &t);
            prop_assert!(is_subsequence(&lcs, &s), "{} not in a for {}", lcs.iter().collect::<String>(), strategy);
            prop_assert!(is_subsequence(&lcs, &t), "{} not in b for {}", lcs.iter().collect::<String>(), strategy);
        }
    }

    #[test]
    fn length_is_symmetric(a in "[ACGT]{0,7}", b in "[ACGT]{0,7}") {
        for strategy in Strategy::ALL {
            prop_assert_eq!(
                strategy.solve_str(&a, &b).chars().count(),
                strategy.solve_str(&b, &a).chars().count(),
                "strategy {}", strategy
            );
        }
    }

    #[test]
    fn appending_grows_length_by_at_most_one(
        a in "[ACGT]{0,7}",
        b in "[ACGT]{0,7}",
        extra in "[ACGT]",
    ) {
        let longer = format!("{a}{extra}");
        for strategy in Strategy::ALL {
            let before = strategy.solve_str(&a, &b).chars().count();
            let after = strategy.solve_str(&longer, &b).chars().count();
            prop_assert!(after == before || after == before + 1, "{}: {} -> {}", strategy, before, after);
        }
    }

    // Same recurrence and the same tie-break, so the literal strings match too.
    #[test]
    fn recursive_and_tabulated_strings_match(a in "[ACGT]{0,8}", b in "[ACGT]{0,8}") {
        let naive = Strategy::NaiveRecursive.solve_str(&a, &b);
        prop_assert_eq!(&Strategy::Memoized.solve_str(&a, &b), &naive);
        prop_assert_eq!(&Strategy::Tabulation.solve_str(&a, &b), &naive);
    }

    #[test]
    fn polynomial_strategies_match_reference_on_larger_inputs(
        a in "[a-z]{0,60}",
        b in "[a-z]{0,60}",
    ) {
        let expected = reference_len(&a, &b);
        prop_assert_eq!(Strategy::Memoized.solve_str(&a, &b).chars().count(), expected);
        prop_assert_eq!(Strategy::Tabulation.solve_str(&a, &b).chars().count(), expected);
    }
}
