//! Display functions for command results

use super::formatters::{cell_label, format_path, score_bar};
use crate::commands::{BenchmarkResult, DictionaryStats, SolveResult};
use crate::core::{Grid, TileModifier};
use colored::Colorize;

/// Print a grid with double letter tiles in cyan and double word tiles in magenta
pub fn print_grid(grid: &Grid) {
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let label = cell_label(cell);
                match cell.modifier() {
                    TileModifier::Normal => label.bold().to_string(),
                    TileModifier::DoubleLetter => label.bright_cyan().bold().to_string(),
                    TileModifier::DoubleWord => label.bright_magenta().bold().to_string(),
                }
            })
            .collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the result of solving a grid
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "GRID".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    print_grid(&result.grid);

    println!("\n🏆 {}", "Top words:".bright_cyan().bold());
    if result.top_words.is_empty() {
        println!("   {}", "No dictionary words found".yellow());
    }

    let best = result.top_words.first().map_or(0, |w| w.score);
    for (i, entry) in result.top_words.iter().enumerate() {
        println!(
            "   {}. {:<12} [{}] {}",
            i + 1,
            entry.word.bright_yellow().bold(),
            score_bar(entry.score, best, 20).green(),
            entry.score.to_string().bold()
        );
    }

    if !result.all_words.is_empty() {
        println!(
            "\n📋 {} ({} occurrences)",
            "All words:".bright_cyan().bold(),
            result.all_words.len()
        );
        for found in &result.all_words {
            if verbose {
                println!(
                    "   {:<12} {:>4}  {}",
                    found.word,
                    found.score,
                    format_path(&found.path).bright_black()
                );
            } else {
                println!("   {:<12} {:>4}", found.word, found.score);
            }
        }
    }

    if verbose {
        println!("\n   Dictionary words: {}", result.dictionary_words);
        println!(
            "   Time taken:       {:.2}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids solved:     {}", result.grids);
    println!(
        "   Sequential:       {:.2}s",
        result.sequential.as_secs_f64()
    );
    println!("   Parallel:         {:.2}s", result.parallel.as_secs_f64());
    println!(
        "   Speedup:          {}",
        format!(
            "{:.2}x",
            result.sequential.as_secs_f64() / result.parallel.as_secs_f64().max(f64::EPSILON)
        )
        .bright_yellow()
        .bold()
    );
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if result.mismatches == 0 {
        println!("   Consistency:      {}", "✅ identical results".green());
    } else {
        println!(
            "   Consistency:      {}",
            format!("❌ {} grids differ", result.mismatches).red().bold()
        );
    }

    if let Some((grid, best)) = &result.best {
        println!(
            "\n🏆 {} {} ({})",
            "Best word:".bright_cyan().bold(),
            best.word.bright_yellow().bold(),
            best.score
        );
        print_grid(grid);
    }
}

/// Print a summary of an exported dictionary
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("📚 {}", "Dictionary exported".bright_cyan().bold());
    println!("   Words:  {}", stats.words);
    println!("   Nodes:  {}", stats.nodes);
    println!("   Bytes:  {}", stats.bytes);
}
