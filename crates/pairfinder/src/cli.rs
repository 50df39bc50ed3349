use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use pairfinder::{parse_sequence, read_sequence, PairFinder, ResultPair};

/// Find two positions in a sequence of integers whose values add up to a target.
#[derive(Parser, Debug)]
#[command(name = "pairfinder", version, about)]
pub struct Args {
    /// Desired sum of the two values.
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: i64,

    /// Print the result as a JSON array: `[i,j]`, or `[]` when no pair exists.
    #[arg(long)]
    pub json: bool,

    /// Log level override (e.g. debug, pairfinder=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Sequence values, as `1 2 3`, `1,2,3` or `"[1, 2, 3]"`. Read from stdin when omitted.
    /// Options go before the values.
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[derive(Serialize)]
#[serde(transparent)]
struct JsonResult(#[serde(with = "pairfinder::pair::optional")] Option<ResultPair>);

/// Load the sequence from `args.values`, or from `stdin` when there are none,
/// run the scan and return the line to print.
pub fn run<R: Read>(args: &Args, stdin: R) -> Result<String> {
    let sequence = if args.values.is_empty() {
        read_sequence(stdin).context("failed to read sequence from stdin")?
    } else {
        parse_sequence(&args.values.join(" ")).context("failed to parse sequence")?
    };
    tracing::debug!(len = sequence.len(), target = args.target, "sequence loaded");

    let result = PairFinder::new().find(&sequence, args.target);
    Ok(render(result, args.json)?)
}

/// Format a scan result for stdout.
pub fn render(result: Option<ResultPair>, json: bool) -> serde_json::Result<String> {
    match (result, json) {
        (result, true) => serde_json::to_string(&JsonResult(result)),
        (Some(pair), false) => Ok(format!("{} {}", pair.first(), pair.second())),
        (None, false) => Ok("no pair found".to_string()),
    }
}
