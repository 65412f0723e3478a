// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the growlist command-line interface.
//!
//! Three subcommands that drive the list the way a caller would: `sieve`
//! removes multiples through a cursor, `sort` runs the quicksort, and
//! `capacity` shows the growth curve and what `trim_to_size` does to it.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "growlist",
    about = "A from-scratch growable array list with fail-fast cursors",
    version
)]
pub struct Cli {
    /// Log list internals (growth, trims, cursor invalidation) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill a list with 0..COUNT, remove multiples of the divisors while iterating,
    /// and print what survives
    Sieve(SieveArgs),

    /// Sort integers with the list's quicksort
    Sort {
        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Sort from largest to smallest
        #[arg(short, long)]
        descending: bool,
    },

    /// Show how capacity grows while adding COUNT elements
    Capacity {
        /// Number of elements to add
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Trim the list to its size at the end
        #[arg(long)]
        trim: bool,
    },
}

#[derive(Args)]
pub struct SieveArgs {
    /// Fill the list with 0..COUNT
    #[arg(short, long, default_value = "1000")]
    pub count: u32,

    /// Remove every element divisible by any of these
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "2,3,5",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub divisors: Vec<u32>,

    /// Print a JSON report instead of one survivor per line
    #[arg(long)]
    pub json: bool,
}
