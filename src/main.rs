use std::fs;

use cinder::{
    get_result_with_limits,
    interpreter::evaluator::core::{DEFAULT_MAX_DEPTH, Limits},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// cinder is a small single-pass scripting language for expressions,
/// functions and lightweight objects.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cinder to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a cinder script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Deepest allowed nesting of calls and brackets.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Most iterations a single `for` loop may run.
    #[arg(long)]
    max_iterations: Option<u64>,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let limits = Limits { max_depth:      args.max_depth,
                          max_iterations: args.max_iterations, };

    if let Err(e) = get_result_with_limits(&script, args.pipe_mode, limits) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
