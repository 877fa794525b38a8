use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use lcs_dp::memory::{to_kib, PeakAlloc};
use lcs_dp::verify::{reference_len, verify, Verdict};
use lcs_dp::{ComplexityClass, LcsEngine, LcsError, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

#[global_allocator]
static ALLOC: PeakAlloc = PeakAlloc::new();

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DNA: &str = "ACTG";

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("LCS Probe: correctness and resource usage of the four strategies");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time of one solve call in seconds");
    eprintln!("  • peak_alloc_kib: Peak heap allocated during the call in KiB");
    eprintln!("  • rss_delta_kib: Resident memory growth across the call in KiB");
    eprintln!(
        "  • status: 'passed' = length and validity verified, 'not_checked' = input above {}",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let selected: Vec<Scenario> = Scenario::ALL
        .into_iter()
        .filter(|s| options.scenarios.is_empty() || options.scenarios.contains(s))
        .collect();
    let total = selected.len();

    for (idx, scenario) in selected.into_iter().enumerate() {
        eprintln!("[{}/{}] {}", idx + 1, total, scenario.description());
        let batch = match scenario {
            Scenario::Correctness => run_correctness(&mut sys),
            Scenario::Exponential => run_growth(
                scenario,
                ComplexityClass::Exponential,
                &(0..=10).collect::<Vec<_>>(),
                &options,
                &mut sys,
            ),
            Scenario::Polynomial => run_growth(
                scenario,
                ComplexityClass::Polynomial,
                &(0..=400).step_by(50).collect::<Vec<_>>(),
                &options,
                &mut sys,
            ),
            Scenario::Alphabet => run_alphabet(&options, &mut sys),
        };
        measurements.extend(batch);
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("lcs_probe output error: {err}");
        std::process::exit(1);
    }

    if measurements
        .iter()
        .any(|m| matches!(m.status, Status::Failed))
    {
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Scenario {
    Correctness,
    Exponential,
    Polynomial,
    Alphabet,
}

impl Scenario {
    const ALL: [Scenario; 4] = [
        Scenario::Correctness,
        Scenario::Exponential,
        Scenario::Polynomial,
        Scenario::Alphabet,
    ];

    fn name(&self) -> &'static str {
        match self {
            Scenario::Correctness => "correctness",
            Scenario::Exponential => "exponential",
            Scenario::Polynomial => "polynomial",
            Scenario::Alphabet => "alphabet",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Scenario::Correctness => "Correctness: reference cases against every strategy",
            Scenario::Exponential => "Growth: exhaustive and naive recursion, lengths 0..=10",
            Scenario::Polynomial => "Growth: memoized and tabulation, lengths 0..=400",
            Scenario::Alphabet => "Alphabet impact: 4-letter versus 26-letter inputs",
        }
    }

    fn from_name(value: &str) -> Result<Self, LcsError> {
        Scenario::ALL
            .into_iter()
            .find(|s| s.name() == value)
            .ok_or_else(|| LcsError::InvalidOption(format!("unknown scenario '{value}'")))
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    scenarios: Vec<Scenario>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, LcsError>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;
        let mut scenarios = Vec::new();

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, LcsError> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args.next().map(|v| v.into()).ok_or_else(|| {
                        LcsError::InvalidOption(format!("missing value after {name}"))
                    }),
                }
            };

            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => format = OutputFormat::from_name(&value("--format")?)?,
                "--verify-limit" => {
                    verify_limit = value("--verify-limit")?.parse::<usize>().map_err(|_| {
                        LcsError::InvalidOption(
                            "verify limit must be a non-negative integer".into(),
                        )
                    })?;
                }
                "--scenario" => {
                    let scenario = Scenario::from_name(&value("--scenario")?)?;
                    if !scenarios.contains(&scenario) {
                        scenarios.push(scenario);
                    }
                }
                _ => {
                    return Err(LcsError::InvalidOption(format!(
                        "unrecognized argument '{arg}'"
                    )))
                }
            }
        }

        Ok(Self {
            format,
            verify_limit,
            scenarios,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin lcs_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input length to verify against the reference length (default: 512)
  --scenario <name>             Run only this scenario; repeatable
                                (correctness, exponential, polynomial, alphabet)
  -h, --help                    Print this help message

Examples:
  cargo run --bin lcs_probe
  cargo run --release --bin lcs_probe -- --format table --scenario polynomial
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_name(value: &str) -> Result<Self, LcsError> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(LcsError::InvalidOption(format!("unknown format '{other}'"))),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    strategy: Strategy,
    case: String,
    wall_s: f64,
    peak_alloc_kib: u64,
    rss_delta_kib: u64,
    lcs_len: usize,
    status: Status,
    detail: Option<String>,
}

#[derive(Clone, Copy)]
enum Status {
    NotChecked,
    Passed,
    Failed,
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Status::NotChecked => "not_checked",
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Status::Passed => "✓",
            Status::Failed => "✗",
            Status::NotChecked => "○",
        }
    }
}

struct Case {
    name: &'static str,
    a: &'static str,
    b: &'static str,
    expected_len: usize,
}

const CASES: &[Case] = &[
    Case {
        name: "classic",
        a: "AGGTAB",
        b: "GXTXAYB",
        expected_len: 4,
    },
    Case {
        name: "contained",
        a: "ABCDE",
        b: "ACE",
        expected_len: 3,
    },
    Case {
        name: "disjoint",
        a: "ABC",
        b: "XYZ",
        expected_len: 0,
    },
    Case {
        name: "identical",
        a: "ABCDEFG",
        b: "ABCDEFG",
        expected_len: 7,
    },
    Case {
        name: "first_empty",
        a: "",
        b: "XYZ",
        expected_len: 0,
    },
    Case {
        name: "second_empty",
        a: "ABC",
        b: "",
        expected_len: 0,
    },
    Case {
        name: "both_empty",
        a: "",
        b: "",
        expected_len: 0,
    },
    Case {
        name: "multiple_optima",
        a: "ABCBDAB",
        b: "BDCABA",
        expected_len: 4,
    },
];

fn run_correctness(sys: &mut System) -> Vec<Measurement> {
    let mut out = Vec::with_capacity(CASES.len() * Strategy::ALL.len());
    for case in CASES {
        eprintln!("      case {} (a='{}', b='{}')", case.name, case.a, case.b);
        for strategy in Strategy::ALL {
            let m = measure(
                "correctness",
                strategy,
                case.name.to_string(),
                sys,
                case.a,
                case.b,
                |lcs| verdict_status(verify(case.a, case.b, lcs, case.expected_len)),
            );
            report(&m);
            out.push(m);
        }
    }
    out
}

fn run_growth(
    scenario: Scenario,
    class: ComplexityClass,
    lengths: &[usize],
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    eprintln!("      class: {}", class.label());
    let mut out = Vec::new();
    for strategy in Strategy::ALL.into_iter().filter(|s| s.complexity() == class) {
        for &len in lengths {
            let a = pattern_sequence(len, LOWERCASE, 1);
            let b = pattern_sequence(len, LOWERCASE, 2);
            let m = measure(
                scenario.name(),
                strategy,
                format!("len={len}"),
                sys,
                &a,
                &b,
                |lcs| check_against_reference(&a, &b, lcs, len, options.verify_limit),
            );
            report(&m);
            out.push(m);
        }
    }
    out
}

fn run_alphabet(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ALPHABETS: &[(&str, &str)] = &[("dna", DNA), ("A-Z", UPPERCASE)];
    let mut out = Vec::new();
    for strategy in Strategy::ALL {
        let lengths: &[usize] = match strategy.complexity() {
            ComplexityClass::Exponential => &[10, 11, 12],
            ComplexityClass::Polynomial => &[100, 200, 300],
        };
        for &len in lengths {
            for &(label, alphabet) in ALPHABETS {
                let a = pattern_sequence(len, alphabet, 3);
                let b = pattern_sequence(len, alphabet, 4);
                let m = measure(
                    "alphabet",
                    strategy,
                    format!("len={len},alphabet={label}"),
                    sys,
                    &a,
                    &b,
                    |lcs| check_against_reference(&a, &b, lcs, len, options.verify_limit),
                );
                report(&m);
                out.push(m);
            }
        }
    }
    out
}

fn verdict_status(v: Verdict) -> (Status, Option<String>) {
    match v {
        Verdict::Passed => (Status::Passed, None),
        Verdict::Failed { reason } => (Status::Failed, Some(reason)),
    }
}

fn check_against_reference(
    a: &str,
    b: &str,
    lcs: &str,
    len: usize,
    verify_limit: usize,
) -> (Status, Option<String>) {
    if len > verify_limit {
        return (Status::NotChecked, None);
    }
    verdict_status(verify(a, b, lcs, reference_len(a, b)))
}

/// Time one solve call and record its heap high-water mark; verification
/// runs after both stop.
fn measure<F>(
    scenario: &'static str,
    strategy: Strategy,
    case: String,
    sys: &mut System,
    a: &str,
    b: &str,
    check: F,
) -> Measurement
where
    F: FnOnce(&str) -> (Status, Option<String>),
{
    let engine = LcsEngine::new(strategy);
    let before = rss_kib(sys);
    let start = Instant::now();
    let (solution, peak_bytes) = ALLOC.measure(|| engine.run(a, b));
    let duration = start.elapsed();
    let after = rss_kib(sys);
    let (status, detail) = check(solution.as_str());

    Measurement {
        scenario,
        strategy,
        case,
        wall_s: duration.as_secs_f64(),
        peak_alloc_kib: to_kib(peak_bytes),
        rss_delta_kib: after.saturating_sub(before),
        lcs_len: solution.len(),
        status,
        detail,
    }
}

fn report(m: &Measurement) {
    eprintln!(
        "      {} {:<11} {:<24} lcs_len={}, time={:.6}s, peak={} KiB, status={}",
        m.status.icon(),
        m.strategy.name(),
        m.case,
        m.lcs_len,
        m.wall_s,
        m.peak_alloc_kib,
        m.status.label()
    );
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.status {
            Status::Passed => passed += 1,
            Status::Failed => failed += 1,
            Status::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("  Total measurements: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (length > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failures:");
        for m in measurements.iter().filter(|m| matches!(m.status, Status::Failed)) {
            eprintln!("  ✗ {} / {} ({})", m.scenario, m.strategy, m.case);
            if let Some(ref detail) = m.detail {
                eprintln!("     {detail}");
            }
        }
        eprintln!();
    }

    let mut groups: BTreeMap<(&str, &str), Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        groups.entry((m.scenario, m.strategy.name())).or_default().push(m);
    }
    for ((scenario, strategy), ms) in &groups {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_peak = ms.iter().map(|m| m.peak_alloc_kib).max().unwrap_or(0);
        let max_rss = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {scenario}/{strategy}: runs={}, max_time={max_time:.6}s, \
             max_peak_alloc={max_peak} KiB, max_rss_delta={max_rss} KiB",
            ms.len()
        );
    }
    eprintln!("{}", "=".repeat(80));
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,strategy,case,wall_s,peak_alloc_kib,rss_delta_kib,lcs_len,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},\"{}\",{:.6},{},{},{},{},\"{}\"",
            m.scenario,
            m.strategy,
            m.case,
            m.wall_s,
            m.peak_alloc_kib,
            m.rss_delta_kib,
            m.lcs_len,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());
    let col2 = measurements
        .iter()
        .map(|m| m.case.len())
        .max()
        .unwrap_or(0)
        .max("case".len());

    println!(
        "{:<col1$}  {:<10}  {:<col2$}  {:>10}  {:>14}  {:>13}  {:>7}  {:>11}  detail",
        "scenario",
        "strategy",
        "case",
        "wall_s",
        "peak_alloc_kib",
        "rss_delta_kib",
        "lcs_len",
        "status",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<10}  {:<col2$}  {:>10.6}  {:>14}  {:>13}  {:>7}  {:>11}  {}",
            m.scenario,
            m.strategy.name(),
            m.case,
            m.wall_s,
            m.peak_alloc_kib,
            m.rss_delta_kib,
            m.lcs_len,
            m.status.label(),
            m.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref().map(|s| s.replace('"', "'")) {
            Some(d) => format!("\"{d}\""),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"strategy\":\"{}\",\"case\":\"{}\",\"wall_s\":{:.6},\"peak_alloc_kib\":{},\"rss_delta_kib\":{},\"lcs_len\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.strategy,
            m.case,
            m.wall_s,
            m.peak_alloc_kib,
            m.rss_delta_kib,
            m.lcs_len,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory() / 1024)
        .unwrap_or(0)
}

/// Reproducible sequence over `alphabet`: a quadratic walk whose stride
/// depends on `seed`, so two seeds give unrelated-looking inputs.
fn pattern_sequence(len: usize, alphabet: &str, seed: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    let k = symbols.len();
    (0..len)
        .map(|i| symbols[(i * i + seed * (2 * i + 1) + i / 3) % k])
        .collect()
}
