//! u-descriptive CLI — print descriptive statistics for a list of numbers.
//!
//! Commands:
//! - `median`, `iqr`, `sixnum`, `order`, `rank` — one statistic
//! - `all` — every statistic for the sample
//!
//! Without a command, or without values, the built-in demonstration samples
//! are summarised instead.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use u_descriptive::stats::{iqr, median, order, rank, sixnum, SixNumberSummary};

/// Samples used when no values are given on the command line.
const DEMO_SAMPLES: [&[f64]; 2] = [&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]];

#[derive(Parser)]
#[command(
    name = "u-descriptive",
    about = "Median, IQR, six-number summary, order and rank of a sample"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Median of the sample.
    Median(SampleArgs),
    /// Interquartile range (Tukey hinges).
    Iqr(SampleArgs),
    /// Six-number summary: min, Q1, median, mean, Q3, max.
    Sixnum(SampleArgs),
    /// Indices from greatest to smallest value.
    Order(SampleArgs),
    /// 1-based descending rank of each value.
    Rank(SampleArgs),
    /// Every statistic above.
    All(SampleArgs),
}

#[derive(Args)]
struct SampleArgs {
    /// Sample values (e.g., 3 1 4 1 5). Defaults to the demonstration samples.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Clone, Copy, PartialEq)]
enum Stat {
    Median,
    Iqr,
    Sixnum,
    Order,
    Rank,
    All,
}

impl Stat {
    fn includes(self, other: Stat) -> bool {
        self == Stat::All || self == other
    }
}

#[derive(Debug, Serialize)]
struct Report {
    sample: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iqr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sixnum: Option<SixNumberSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<Vec<usize>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (stat, values) = match cli.command {
        None => (Stat::Median, Vec::new()),
        Some(Commands::Median(args)) => (Stat::Median, args.values),
        Some(Commands::Iqr(args)) => (Stat::Iqr, args.values),
        Some(Commands::Sixnum(args)) => (Stat::Sixnum, args.values),
        Some(Commands::Order(args)) => (Stat::Order, args.values),
        Some(Commands::Rank(args)) => (Stat::Rank, args.values),
        Some(Commands::All(args)) => (Stat::All, args.values),
    };

    let samples: Vec<Vec<f64>> = if values.is_empty() {
        DEMO_SAMPLES.iter().map(|s| s.to_vec()).collect()
    } else {
        vec![values]
    };

    let reports = samples
        .into_iter()
        .map(|sample| build_report(sample, stat))
        .collect::<Result<Vec<_>>>()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

fn build_report(sample: Vec<f64>, stat: Stat) -> Result<Report> {
    let median = if stat.includes(Stat::Median) {
        Some(median(&sample).with_context(|| format!("median of {sample:?}"))?)
    } else {
        None
    };
    let sixnum = if stat.includes(Stat::Sixnum) {
        Some(sixnum(&sample).with_context(|| format!("sixnum of {sample:?}"))?)
    } else {
        None
    };

    Ok(Report {
        median,
        iqr: stat.includes(Stat::Iqr).then(|| iqr(&sample)),
        sixnum,
        order: stat.includes(Stat::Order).then(|| order(&sample)),
        rank: stat.includes(Stat::Rank).then(|| rank(&sample)),
        sample,
    })
}

fn print_report(report: &Report) {
    let sample = &report.sample;
    if let Some(value) = report.median {
        println!("median({sample:?}) = {value}");
    }
    if let Some(value) = report.iqr {
        println!("iqr({sample:?}) = {value}");
    }
    if let Some(summary) = &report.sixnum {
        println!("sixnum({sample:?}) = {:?}", summary.to_array());
    }
    if let Some(indices) = &report.order {
        println!("order({sample:?}) = {indices:?}");
    }
    if let Some(ranks) = &report.rank {
        println!("rank({sample:?}) = {ranks:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_all_fills_every_field() {
        let report = build_report(vec![3.0, 1.0, 2.0], Stat::All).unwrap();
        assert_eq!(report.median, Some(2.0));
        assert_eq!(report.iqr, Some(1.0));
        assert_eq!(
            report.sixnum.map(|s| s.to_array()),
            Some([1.0, 1.5, 2.0, 2.0, 2.5, 3.0])
        );
        assert_eq!(report.order, Some(vec![0, 2, 1]));
        assert_eq!(report.rank, Some(vec![1, 3, 2]));
    }

    #[test]
    fn test_build_report_single_stat() {
        let report = build_report(vec![1.0, 2.0, 3.0, 4.0], Stat::Iqr).unwrap();
        assert_eq!(report.iqr, Some(2.0));
        assert!(report.median.is_none());
        assert!(report.sixnum.is_none());
        assert!(report.order.is_none());
        assert!(report.rank.is_none());
    }

    #[test]
    fn test_build_report_empty_sample_errors() {
        let err = build_report(Vec::new(), Stat::Median).unwrap_err();
        assert!(format!("{err:#}").contains("requires at least one value"));
    }

    #[test]
    fn test_report_json_skips_missing() {
        let report = build_report(vec![5.0, 5.0, 1.0], Stat::Order).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"sample":[5.0,5.0,1.0],"order":[0,1,2]}"#);
    }
}
