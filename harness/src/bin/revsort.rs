//! Thin CLI caller around the harness runner.
//!
//! Usage: `revsort <n> <values... | random> [--seed N] [--json]`
//!
//! Examples:
//!   `revsort 6 1 3 6 4 2 5`
//!   `revsort 8 random --seed 42`
//!
//! Exit codes: 0 solved, 1 invalid arguments or input, 2 no solution found.

use std::env;
use std::process::ExitCode;

use revsort_harness::report::{render_text, to_json};
use revsort_harness::{run, PuzzleSource, SolveRequest};
use tracing_subscriber::EnvFilter;

struct CliArgs {
    request: SolveRequest,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut positional: Vec<&str> = Vec::new();
    let mut seed = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                seed = Some(value.parse::<u64>().map_err(|_| "--seed must be an integer")?);
            }
            "--json" => json = true,
            other => positional.push(other),
        }
    }

    let (size_arg, rest) = positional
        .split_first()
        .ok_or("missing puzzle size")?;
    let size: usize = size_arg
        .parse()
        .map_err(|_| format!("invalid puzzle size: {size_arg}"))?;

    let source = match rest {
        ["random"] | [] => PuzzleSource::Random { seed },
        values => {
            let values = values
                .iter()
                .map(|v| v.parse::<u32>().map_err(|_| format!("invalid value: {v}")))
                .collect::<Result<Vec<u32>, String>>()?;
            PuzzleSource::Explicit(values)
        }
    };

    Ok(CliArgs {
        request: SolveRequest { size, source },
        json,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: revsort <n> <values... | random> [--seed N] [--json]");
            return ExitCode::from(1);
        }
    };

    let report = match run(&cli.request) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    if cli.json {
        println!("{}", to_json(&report));
    } else {
        print!("{}", render_text(&report));
    }

    if report.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
