//! Tile Solver - CLI
//!
//! Finds the best-scoring words on a 5x5 letter grid, serves solve/reset messages
//! over stdin/stdout, exports dictionaries and benchmarks the search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tile_solver::{
    boundary::{SolveRequest, SolveResponse, SolverWorker},
    commands::{
        SolveConfig, export_dictionary, load_letter_values, run_benchmark, run_serve, solve_grid,
    },
    core::{Grid, LetterValues, PrefixIndex},
    logging::setup_logging,
    output::{print_benchmark_result, print_dictionary_stats, print_solve_result},
    wordlists::loader::{embedded_index, load_index},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tile_solver",
    about = "Finds the highest-scoring words on a 5x5 letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Dictionary: 'embedded' (default), a word list file, or a serialized trie (.json)
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Letter value table as a JSON object, e.g. {"A": 1, "Q": 8}
    #[arg(long, global = true)]
    values: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a grid given in notation form, e.g. "CAT+SX/RENDY/O*XXXX/XXXXX/XXXXX"
    Solve {
        /// Grid notation: 25 letters, '+' after a letter marks double letter, '*' double word
        grid: Option<String>,

        /// Read a JSON solve request instead (grid, dictionary and letter values)
        #[arg(short, long, conflicts_with = "grid")]
        request: Option<PathBuf>,

        /// Search start cells one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// List every word occurrence, not only the top three
        #[arg(short, long)]
        all: bool,

        /// Print the result as a JSON response
        #[arg(long)]
        json: bool,
    },

    /// Answer JSON-lines solve/reset messages from stdin on stdout
    Serve {
        /// Search start cells one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Export the dictionary as a serialized trie
    Dictionary {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Benchmark the search on random grids
    Benchmark {
        /// Number of random grids to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for grid generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<PrefixIndex> {
    match source {
        "embedded" => Ok(embedded_index()),
        path => load_index(path),
    }
}

/// Load the letter values selected by the --values flag
fn load_values(path: Option<&Path>) -> Result<LetterValues> {
    path.map_or_else(|| Ok(LetterValues::standard()), load_letter_values)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Solve {
            ref grid,
            ref request,
            sequential,
            all,
            json,
        } => {
            let options = SolveOptions {
                parallel: !sequential,
                list_all: all,
                json,
                verbose: cli.verbose > 0,
            };
            match (grid, request) {
                (_, Some(path)) => run_request_command(path, &options),
                (Some(notation), None) => run_solve_command(&cli, notation, &options),
                (None, None) => {
                    anyhow::bail!("Provide a grid or a request file (see --help)")
                }
            }
        }
        Commands::Serve { sequential } => run_serve_command(!sequential),
        Commands::Dictionary { ref output, pretty } => {
            run_dictionary_command(&cli.dictionary, output.as_deref(), pretty)
        }
        Commands::Benchmark { count, seed } => run_benchmark_command(&cli, count, seed),
    }
}

struct SolveOptions {
    parallel: bool,
    list_all: bool,
    json: bool,
    verbose: bool,
}

fn run_solve_command(cli: &Cli, notation: &str, options: &SolveOptions) -> Result<()> {
    let grid: Grid = notation.parse().context("Invalid grid notation")?;
    let index = load_dictionary(&cli.dictionary)?;
    let letter_values = load_values(cli.values.as_deref())?;
    solve_and_print(grid, letter_values, &index, options)
}

fn run_request_command(path: &Path, options: &SolveOptions) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let request: SolveRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let input = request.to_input()?;
    solve_and_print(input.grid, input.values, &input.index, options)
}

fn solve_and_print(
    grid: Grid,
    letter_values: LetterValues,
    index: &PrefixIndex,
    options: &SolveOptions,
) -> Result<()> {
    let config = SolveConfig {
        grid,
        letter_values,
        parallel: options.parallel,
        list_all: options.list_all && !options.json,
    };
    let result = solve_grid(config, index)?;

    if options.json {
        let response = SolveResponse {
            top_words: result.top_words,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        print_solve_result(&result, options.verbose);
    }
    Ok(())
}

fn run_serve_command(parallel: bool) -> Result<()> {
    let mut worker = SolverWorker::spawn(parallel).context("Failed to start solver worker")?;
    info!(parallel, "serving on stdin");

    let summary = run_serve(io::stdin().lock(), io::stdout().lock(), &mut worker)?;
    info!(
        solves = summary.solves,
        resets = summary.resets,
        errors = summary.errors,
        "serve finished"
    );
    Ok(())
}

fn run_dictionary_command(source: &str, output: Option<&Path>, pretty: bool) -> Result<()> {
    let index = load_dictionary(source)?;

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let stats = export_dictionary(&index, BufWriter::new(file), pretty)?;
        print_dictionary_stats(&stats);
    } else {
        export_dictionary(&index, io::stdout().lock(), pretty)?;
    }
    Ok(())
}

fn run_benchmark_command(cli: &Cli, count: usize, seed: u64) -> Result<()> {
    let index = load_dictionary(&cli.dictionary)?;
    let values = load_values(cli.values.as_deref())?;

    println!("Running benchmark on {count} random grids (seed {seed})...");
    let result = run_benchmark(&index, &values, count, seed, !cli.quiet)?;
    print_benchmark_result(&result);
    Ok(())
}
