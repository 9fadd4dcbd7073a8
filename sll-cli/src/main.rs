//! sll CLI - Command line interface
//!
//! Builds lists from command line values or JSON scripts and runs the core
//! operations over them.

use clap::{Parser, Subcommand};
use serde_json::json;
use sll_core::{List, SortConfig, Value};
use std::path::PathBuf;
use std::process;
use tracing::{info, Level};

mod config;
mod logging;
mod script;

use crate::config::{sort_config, LogConfig, CLI_TARGET};
use crate::logging::LogFormat;
use crate::script::{read_script, run_script, StepReport};

#[derive(Parser)]
#[command(
    name = "sll",
    about = "Singly-linked list with merge sort",
    version = "0.1.0"
)]
struct Cli {
    /// Global log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    /// Log level for list operations (default: global)
    #[arg(long, global = true)]
    list_log: Option<Level>,

    /// Log level for split / merge (default: global)
    #[arg(long, global = true)]
    sort_log: Option<Level>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Recount merged lists by traversal instead of tallying during the merge
    #[arg(long, global = true)]
    recount: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge sort the given values
    Sort {
        #[arg(allow_negative_numbers = true)]
        values: Vec<Value>,
    },
    /// Print the list built from the given values
    Show {
        #[arg(allow_negative_numbers = true)]
        values: Vec<Value>,
    },
    /// Run a JSON operation script
    Run {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        global: cli.log_level,
        list: cli.list_log,
        sort: cli.sort_log,
    };
    logging::init(&log_config, cli.log_format);

    let sort = sort_config(cli.recount);
    info!(target: CLI_TARGET, merge_count = ?sort.merge_count, "sll started");

    match cli.command {
        Command::Sort { values } => handle_sort(values, &sort, cli.json),
        Command::Show { values } => handle_show(values, cli.json),
        Command::Run { script } => handle_run(&script, &sort, cli.json),
    }
}

fn handle_sort(values: Vec<Value>, config: &SortConfig, as_json: bool) {
    let list: List = values.iter().copied().collect();
    let sorted = list.sorted_with(config);

    if as_json {
        let output = json!({
            "input": values,
            "sorted": sorted,
            "length": sorted.length(),
        });
        print_json(&output);
    } else {
        println!("{sorted}");
    }
}

fn handle_show(values: Vec<Value>, as_json: bool) {
    let list: List = values.into_iter().collect();

    if as_json {
        let output = json!({
            "list": list,
            "length": list.length(),
            "size": list.size(),
        });
        print_json(&output);
    } else {
        println!("{list}");
        println!("length: {}, size: {}", list.length(), list.size());
    }
}

fn handle_run(path: &std::path::Path, config: &SortConfig, as_json: bool) {
    let script = match read_script(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let reports = run_script(&script, config);

    if as_json {
        print_json(&json!(reports));
    } else {
        for report in &reports {
            print_report(report);
        }
    }
}

fn print_report(report: &StepReport) {
    println!("#{} {:?} => {:?}", report.step, report.op, report.outcome);
    println!("    {}", report.list);
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            process::exit(1);
        }
    }
}
