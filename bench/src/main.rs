use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

// Configuration
const BINARY_NAME: &str = "seqsearch";
const TEXT_FILES: &[&str] = &[
    "data/chimpansee_dna.txt",
    "data/keratin_homo_sapiens.txt",
    "data/ipsum.txt",
];

const PATTERNS: &[(&str, &str)] = &[
    ("TCGC", "Short DNA"),
    ("GATTACA", "Medium DNA"),
    ("Lorem", "Common Word"),
    ("XYZXYZMISSING", "Not Present"),
];

const ALGORITHMS: &[&str] = &["naive", "kmp", "bm", "bmh"];

#[derive(Debug)]
struct ResultEntry {
    algo: String,
    pattern: String,
    file: String,
    duration_ns: u128,
    found_count: usize,
}

fn main() {
    println!("--- Starting Benchmark Script ---");

    println!("> Building project in release mode...");
    let build_status = Command::new("cargo")
        .args(["build", "--release", "-p", BINARY_NAME])
        .status()
        .expect("Failed to execute cargo build");

    if !build_status.success() {
        eprintln!("Error: Cargo build failed.");
        std::process::exit(1);
    }

    let binary_path = Path::new("target").join("release").join(BINARY_NAME);
    if !binary_path.exists() {
        eprintln!("Error: Binary not found at {:?}. Check crate name.", binary_path);
        std::process::exit(1);
    }

    let mut results: Vec<ResultEntry> = Vec::new();

    for (pattern, pat_desc) in PATTERNS {
        for algo in ALGORITHMS {
            println!("> Running {} on pattern '{}' ({})", algo, pattern, pat_desc);

            let mut args = vec![
                "--measure-time".to_string(),
                "--all".to_string(),
                "--pattern".to_string(),
                pattern.to_string(),
                "--algo".to_string(),
                algo.to_string(),
            ];

            for txt in TEXT_FILES {
                args.push("-t".to_string());
                args.push(txt.to_string());
            }

            let output = Command::new(&binary_path)
                .args(&args)
                .output()
                .expect("Failed to run binary");

            if !output.status.success() {
                eprintln!("  ! Algorithm {} failed on pattern {}", algo, pattern);
                let stderr = String::from_utf8_lossy(&output.stderr);
                eprintln!("  ! Error: {}", stderr);
                continue;
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let parsed_results = parse_output(&stdout, algo, pattern);
            results.extend(parsed_results);
        }
    }

    print_summary_table(&results);
    report_mismatches(&results);
}

fn parse_output(output: &str, algo: &str, pattern: &str) -> Vec<ResultEntry> {
    let mut entries = Vec::new();
    let mut current_file = String::new();
    let mut duration_ns = None;

    for line in output.lines() {
        let line = line.trim();

        if line.starts_with("text=") {
            current_file = line
                .trim_start_matches("text=\"")
                .trim_end_matches('"')
                .to_string();
            duration_ns = None;
        }

        if line.starts_with("execution_time:") {
            if let Some(ns_str) = line.split_whitespace().nth(1) {
                duration_ns = ns_str.trim_end_matches("ns").parse::<u128>().ok();
            }
        }

        // `matches: [..]` closes the block for the current file.
        if let Some(list) = line.strip_prefix("matches:") {
            let list = list.trim().trim_start_matches('[').trim_end_matches(']');
            let found_count = list.split(',').filter(|s| !s.trim().is_empty()).count();

            if let Some(ns) = duration_ns {
                entries.push(ResultEntry {
                    algo: algo.to_string(),
                    pattern: pattern.to_string(),
                    file: current_file.clone(),
                    duration_ns: ns,
                    found_count,
                });
            }
        }
    }
    entries
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^90}", " RESULTS SUMMARY ");
    println!(
        "{:<10} | {:<15} | {:<25} | {:>10} | {:>15}",
        "Algorithm", "Pattern", "File", "Matches", "Time (µs)"
    );
    println!("{:-^90}", "");

    for entry in results {
        let micros = entry.duration_ns as f64 / 1000.0;

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<10} | {:<15} | {:<25} | {:>10} | {:>15.2}",
            entry.algo,
            entry.pattern.chars().take(12).collect::<String>(),
            short_file,
            entry.found_count,
            micros
        );
    }
    println!("{:=^90}", " END ");
}

/// Every algorithm must report the same number of matches per pattern and file.
fn report_mismatches(results: &[ResultEntry]) {
    let mut reference: HashMap<(&str, &str), (&str, usize)> = HashMap::new();
    let mut mismatches = 0;

    for entry in results {
        let key = (entry.pattern.as_str(), entry.file.as_str());
        let (ref_algo, ref_count) = *reference
            .entry(key)
            .or_insert((entry.algo.as_str(), entry.found_count));

        if ref_count != entry.found_count {
            mismatches += 1;
            eprintln!(
                "  ! Mismatch on '{}' in {}: {} found {}, {} found {}",
                entry.pattern, entry.file, ref_algo, ref_count, entry.algo, entry.found_count
            );
        }
    }

    if mismatches > 0 {
        eprintln!("Error: {} mismatching result(s).", mismatches);
        std::process::exit(1);
    }
}
