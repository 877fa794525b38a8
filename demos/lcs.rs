//! Example: one LCS per strategy for a pair of inputs.
//!
//! Run with:
//! `cargo run --example lcs -- AGGTAB GXTXAYB`

use lcs_dp::{compare_all, is_subsequence, LcsEngine, Strategy};

fn main() {
    let mut args = std::env::args().skip(1);
    let a = args.next().unwrap_or_else(|| "ABCBDAB".to_string());
    let b = args.next().unwrap_or_else(|| "BDCABA".to_string());

    println!("a = {a:?}");
    println!("b = {b:?}");

    for solution in compare_all(&a, &b) {
        println!(
            "{:<11} len={} lcs={:?}",
            solution.strategy().name(),
            solution.len(),
            solution.as_str()
        );
    }

    // Only the polynomial strategies are safe on long inputs.
    let long_a = a.repeat(20);
    let long_b = b.repeat(20);
    let solution = LcsEngine::new(Strategy::Tabulation).run(&long_a, &long_b);
    let lcs: Vec<char> = solution.as_str().chars().collect();
    let sa: Vec<char> = long_a.chars().collect();
    let sb: Vec<char> = long_b.chars().collect();
    println!(
        "x20 repeat: len={} valid={}",
        solution.len(),
        is_subsequence(&lcs, &sa) && is_subsequence(&lcs, &sb)
    );
}
