// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! leftalign CLI
//!
//! Command-line interface for left-aligning indels in VCF files.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leftalign")]
#[command(author, version, about = "Left-align VCF indels against a reference genome")]
#[command(
    long_about = "Shift insertions and deletions in a VCF file to their leftmost equivalent \
position against a reference genome.

Both the variant file and the reference may be gzip-compressed; compression is detected from \
the file contents, not the file name. Header lines and records the aligner cannot handle are \
copied to the output unchanged.

Examples:
  leftalign variants.vcf reference.fa aligned.vcf
  leftalign -v variants.vcf.gz reference.fa.gz aligned.vcf"
)]
struct Cli {
    /// Input VCF file
    input: PathBuf,

    /// Reference genome FASTA file
    reference: PathBuf,

    /// Output VCF file
    output: PathBuf,

    /// Verbosity (-v for progress, -vv for per-record detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize logger based on verbosity
fn setup_logger(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    match vcf_leftalign::run(&cli.input, &cli.reference, &cli.output) {
        Ok(stats) => {
            eprintln!(
                "{} records processed: {} shifted, {} symbolic, {} copied through unaligned",
                stats.records, stats.shifted, stats.symbolic, stats.unsupported
            );
        }
        Err(e) => {
            eprintln!("error[{}]: {}", e.code(), e);
            std::process::exit(1);
        }
    }
}
