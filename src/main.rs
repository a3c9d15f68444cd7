use std::process::ExitCode;

use u_maxclique::bnc::{BncConfig, BncRunner, SearchError, SearchStatus};
use u_maxclique::coloring::ColoringOrder;
use u_maxclique::graph::dimacs;

fn main() -> ExitCode {
    env_logger::init();

    let mut config = BncConfig::default();
    let mut positional: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-cuts" => config = config.with_cutting_planes(false),
            "--warm-start" => config = config.with_greedy_warm_start(true),
            "--degree-order" => config = config.with_coloring_order(ColoringOrder::DegreeDescending),
            "--help" | "-h" => usage_and_exit(0),
            s if s.starts_with("--") => usage_and_exit(2),
            _ => positional.push(arg),
        }
    }
    let [path, seconds] = positional.as_slice() else {
        usage_and_exit(2);
    };

    let seconds: f64 = seconds.parse().unwrap_or_else(|_| usage_and_exit(2));
    if !seconds.is_finite() || seconds <= 0.0 {
        eprintln!("time limit must be a positive number of seconds, got {seconds}");
        return ExitCode::from(2);
    }
    config = config.with_time_limit_ms((seconds * 1000.0).ceil() as u64);

    let graph = match dimacs::read_path(path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            return ExitCode::from(2);
        }
    };

    match BncRunner::run_with_simplex(&graph, &config) {
        Ok(result) => {
            let vertices: Vec<String> = result.one_indexed().iter().map(|v| v.to_string()).collect();
            println!(
                "{:.3} {} {}",
                result.elapsed.as_secs_f64(),
                result.size,
                vertices.join(" ")
            );
            match result.status {
                SearchStatus::Optimal => ExitCode::SUCCESS,
                SearchStatus::TimedOut => ExitCode::from(1),
            }
        }
        Err(SearchError::InvalidConfig(msg)) => {
            eprintln!("invalid configuration: {msg}");
            ExitCode::from(2)
        }
        Err(e @ SearchError::Oracle(_)) => {
            eprintln!("{e}");
            ExitCode::from(3)
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  maxclique <graph-file> <time-limit-seconds> [--no-cuts] [--warm-start] [--degree-order]\n\nOptions:\n  --no-cuts        Plain branch-and-bound (no independent-set cutting loop)\n  --warm-start     Seed the incumbent with a greedy clique\n  --degree-order   Color vertices in descending degree order\n\nExit codes: 0 optimal, 1 time limit reached, 2 bad input, 3 LP failure\n"
    );
    std::process::exit(code)
}
