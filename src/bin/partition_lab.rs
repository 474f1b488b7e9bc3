//! partition-lab CLI

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use partition_degrees::{
    Case, DistinctOddPartition, HypothesisReport, HypothesisTester, LabConfig, Partition, degree,
    distinct_odd_partitions, factorize, hook_lengths, integer_partitions, prime_factorization,
    report, self_conjugates, survey_self_conjugates,
};

#[derive(Parser)]
#[command(name = "partition-lab")]
#[command(about = "Partitions, hook lengths and symmetric-group degrees")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON config file (`max_n`, `keep_passing_cases`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All partitions of N
    Partitions { n: u32 },

    /// All partitions of N into distinct odd parts
    DistinctOdd { n: u32 },

    /// All self-conjugate partitions of N
    SelfConjugates { n: u32 },

    /// Hook lengths of a partition (bottom row first)
    Hooks {
        #[arg(required = true)]
        parts: Vec<u32>,
    },

    /// Degree of the irreducible S_n representation of a partition
    Degree {
        #[arg(required = true)]
        parts: Vec<u32>,
    },

    /// Prime factorization of N
    Factor { n: u64 },

    /// Hooks, hook product factorization and degree of every self-conjugate partition of N
    Survey { n: u32 },

    /// Check the partition-count hypothesis for n < MAX_N
    TestPartitions {
        #[arg(long, default_value = "10")]
        max_n: u32,
    },

    /// Check that self-conjugate partitions of 2 <= n < MAX_N have even degree
    TestSelfConjugate {
        #[arg(long, default_value = "20")]
        max_n: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let config = match &cli.config {
        Some(path) => LabConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LabConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Partitions { n } => {
            check_cap(n, &config)?;
            emit_list(&integer_partitions(n)?, cli.json, &mut out)
        }
        Commands::DistinctOdd { n } => {
            check_cap(n, &config)?;
            emit_list::<DistinctOddPartition>(&distinct_odd_partitions(n)?, cli.json, &mut out)
        }
        Commands::SelfConjugates { n } => {
            check_cap(n, &config)?;
            emit_list(&self_conjugates(n)?, cli.json, &mut out)
        }
        Commands::Hooks { parts } => {
            let partition = Partition::new(parts)?;
            check_cap(partition.size(), &config)?;
            let table = hook_lengths(&partition);
            if cli.json {
                report::write_json(&table, &mut out)?;
            } else {
                for row in table.rows() {
                    writeln!(out, "{row:?}")?;
                }
            }
            Ok(())
        }
        Commands::Degree { parts } => {
            let partition = Partition::new(parts)?;
            check_cap(partition.size(), &config)?;
            let d = degree(&partition)?;
            if cli.json {
                report::write_json(&d.to_string(), &mut out)?;
            } else {
                writeln!(out, "{d}")?;
                writeln!(out, "= {}", prime_factorization(&d)?)?;
            }
            Ok(())
        }
        Commands::Factor { n } => {
            let factors = factorize(n)?;
            if cli.json {
                report::write_json(&factors, &mut out)?;
            } else {
                writeln!(out, "{factors:?}")?;
            }
            Ok(())
        }
        Commands::Survey { n } => {
            check_cap(n, &config)?;
            let profiles = survey_self_conjugates(n)?;
            if cli.json {
                report::write_json(&profiles, &mut out)?;
            } else {
                report::write_survey(n, &profiles, &mut out)?;
            }
            Ok(())
        }
        Commands::TestPartitions { max_n } => {
            let tester = HypothesisTester::new(config);
            emit_report(&tester.test_partition_hypothesis(max_n)?, cli.json, &mut out)
        }
        Commands::TestSelfConjugate { max_n } => {
            let tester = HypothesisTester::new(config);
            emit_report(&tester.test_self_conjugate_hypothesis(max_n)?, cli.json, &mut out)
        }
    }
}

fn check_cap(n: u32, config: &LabConfig) -> Result<()> {
    if n > config.max_n {
        bail!("n = {n} is above the configured cap of {} (raise max_n with --config)", config.max_n);
    }
    Ok(())
}

fn emit_list<T>(items: &[T], json: bool, out: &mut dyn Write) -> Result<()>
where
    T: Serialize + std::fmt::Display,
{
    if json {
        report::write_json(items, out)?;
    } else {
        for item in items {
            writeln!(out, "{item}")?;
        }
        writeln!(out, "({} total)", items.len())?;
    }
    Ok(())
}

fn emit_report<C>(result: &HypothesisReport<C>, json: bool, out: &mut dyn Write) -> Result<()>
where
    C: Case + Serialize + std::fmt::Display,
{
    if json {
        report::write_json(result, out)?;
    } else {
        report::write_text(result, out)?;
    }
    if !result.is_success() {
        out.flush()?;
        std::process::exit(1);
    }
    Ok(())
}
