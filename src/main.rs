// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use growlist::{ArrayList, Cursor};

mod cli;
use cli::display::{self, themed, themed_err, BOLD, GRAY, GREEN};
use cli::{Cli, Commands, SieveArgs};

/// JSON output of `growlist sieve --json`.
#[derive(Serialize)]
struct SieveReport {
    count: u32,
    divisors: Vec<u32>,
    removed: usize,
    survivors: Vec<u32>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sieve(args) => run_sieve(&args),
        Commands::Sort { values, descending } => run_sort(values, descending),
        Commands::Capacity { count, trim } => run_capacity(count, trim),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "growlist=debug" } else { "growlist=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_sieve(args: &SieveArgs) -> Result<()> {
    let mut list: ArrayList<u32> = (0..args.count).collect();
    tracing::debug!(
        len = list.len(),
        capacity = list.capacity(),
        "filled list"
    );

    let removed = list
        .cursor()
        .retain_with(&mut list, |value| {
            args.divisors.iter().all(|divisor| value % divisor != 0)
        })
        .context("sieve pass failed")?;

    let mut survivors = Vec::with_capacity(list.len());
    list.cursor()
        .for_each_remaining(&list, |value| survivors.push(*value))
        .context("printing pass failed")?;

    if args.json {
        let report = SieveReport {
            count: args.count,
            divisors: args.divisors.clone(),
            removed,
            survivors,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for value in &survivors {
        println!("{}", value);
    }
    eprintln!(
        "{} kept {} of {} ({} removed)",
        themed_err(GREEN, &[BOLD], "✓"),
        survivors.len(),
        args.count,
        removed
    );
    Ok(())
}

fn run_sort(values: Vec<i64>, descending: bool) -> Result<()> {
    let mut list: ArrayList<i64> = values.into_iter().collect();
    if descending {
        list.sort_by(|a, b| b.cmp(a));
    } else {
        list.sort();
    }

    let rendered: Vec<String> = list.iter().map(i64::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn run_capacity(count: usize, trim: bool) -> Result<()> {
    let mut list = ArrayList::new();
    let mut cursor: Option<Cursor> = None;

    display::section_top("CAPACITY");
    let mut last_capacity = list.capacity();
    row_for(&list);
    for i in 0..count {
        list.add(i);
        if list.capacity() != last_capacity {
            last_capacity = list.capacity();
            row_for(&list);
        }
        // keep one cursor from the halfway point to show it going stale
        if i == count / 2 {
            cursor = Some(list.cursor());
        }
    }

    if trim {
        list.trim_to_size();
        display::row(&themed(GRAY, &[], " trim_to_size()"));
        row_for(&list);
    }
    display::section_bot();

    if let Some(mut cursor) = cursor {
        if let Err(e) = cursor.has_next(&list) {
            eprintln!("{}", themed_err(GRAY, &[], &format!("cursor from the midpoint: {}", e)));
        }
    }
    Ok(())
}

fn row_for<T>(list: &ArrayList<T>) {
    display::row(&format!(
        "{} {}",
        display::stat(&format!("len {:>6}", list.len()), format!("cap {:>6}", list.capacity())),
        display::capacity_bar(list.len(), list.capacity(), 24)
    ));
}
