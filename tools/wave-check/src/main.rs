//! wave-check: lint authored wave sets before they ship.
//!
//! Usage:
//!   wave-check data/campaign.json
//!   wave-check campaign.json --summary
//!   wave-check campaign.json --any-tag
//!
//! Exit codes: 0 clean, 1 load or usage failure, 2 data errors found.

use std::process;

use vanguard_core::enums::{EnemyKind, ProjectileKind};
use vanguard_core::formation::WaveSet;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }
    if matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let path = &args[1];
    let flags = &args[2..];
    let summary = flags.iter().any(|a| a == "--summary");
    let any_tag = flags.iter().any(|a| a == "--any-tag");
    if let Some(other) = flags
        .iter()
        .find(|a| !matches!(a.as_str(), "--summary" | "--any-tag"))
    {
        eprintln!("Unknown flag: {other}");
        print_usage();
        process::exit(1);
    }

    let set = match WaveSet::load(path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            process::exit(1);
        }
    };

    if summary {
        print_summary(&set);
    }

    let errors = if any_tag {
        set.validate()
    } else {
        set.validate_with(is_builtin_tag)
    };

    if errors.is_empty() {
        eprintln!(
            "{path}: OK ({} formations, {} waves)",
            set.formations.len(),
            set.waves.len()
        );
        return;
    }

    for err in &errors {
        eprintln!("  error: {err}");
    }
    eprintln!("{path}: {} problem(s)", errors.len());
    process::exit(2);
}

fn print_usage() {
    eprintln!(
        "wave-check: VANGUARD wave set linter\n\
         \n\
         Usage: wave-check <waves.json> [--summary] [--any-tag]\n\
         \n\
           --summary  Print spawn counts per wave and group\n\
           --any-tag  Skip the pool tag check (custom archetypes)\n"
    );
}

fn is_builtin_tag(tag: &str) -> bool {
    EnemyKind::ALL.iter().any(|k| k.pool_tag() == tag)
        || ProjectileKind::ALL.iter().any(|k| k.pool_tag() == tag)
}

fn print_summary(set: &WaveSet) {
    let mut total = 0;
    for (i, wave) in set.waves.iter().enumerate() {
        let spawns: usize = wave.groups.iter().map(|g| set.group_spawn_count(g)).sum();
        total += spawns;
        println!(
            "wave {} '{}': {} groups, {} spawns, delay {:.1}s",
            i + 1,
            wave.name,
            wave.groups.len(),
            spawns,
            wave.pre_wave_delay
        );
        for (j, group) in wave.groups.iter().enumerate() {
            println!(
                "  group {j}: {} x{} via '{}'{}",
                group.pool_tag,
                group.repeat_count,
                group.formation,
                if group.wait_for_clearance { " (waits)" } else { "" }
            );
        }
    }
    println!("total spawns: {total}");
}
