//! End-to-end runs against the embedded dictionary

use std::io::Cursor;
use tile_solver::boundary::{BoundaryMessage, SolveRequest, SolverWorker};
use tile_solver::commands::{SolveConfig, export_dictionary, run_serve, solve_grid};
use tile_solver::core::{Grid, LetterValues, PrefixIndex};
use tile_solver::solver::{ScoredWord, SearchEngine};
use tile_solver::wordlists::loader::{embedded_index, load_index};

fn grid(notation: &str) -> Grid {
    notation.parse().unwrap()
}

fn request(notation: &str, index: &PrefixIndex) -> SolveRequest {
    SolveRequest::new(&grid(notation), index, &LetterValues::standard())
}

#[test]
fn embedded_dictionary_solves_grid() {
    let index = embedded_index();
    let result = solve_grid(SolveConfig::new(grid("CRANE/XXXXX/XXXXX/XXXXX/XXXXX")), &index).unwrap();

    assert_eq!(
        result.top_words,
        vec![
            ScoredWord::new("CRANE", 21),
            ScoredWord::new("AXE", 9),
            ScoredWord::new("ARC", 8),
        ]
    );
}

#[test]
fn parallel_and_sequential_agree_on_ties() {
    let index = embedded_index();
    let values = LetterValues::standard();
    let grid = grid("CATSX/RENDY/OXXXX/XXXXX/XXXXX");
    let engine = SearchEngine::new(&index, &grid, &values);

    let sequential = engine.solve();
    assert_eq!(sequential, engine.solve_parallel());
    assert_eq!(sequential.entries()[0], ScoredWord::new("CRATE", 21));
    assert_eq!(sequential.entries()[1], ScoredWord::new("CRANE", 21));
}

#[test]
fn worker_accumulates_until_reset() {
    let index = embedded_index();
    let star = request("STARX/QQQQQ/QQQQQ/QQQQQ/QQQQQ", &index);
    let mut worker = SolverWorker::spawn(true).unwrap();

    let first = worker.solve(star.clone()).unwrap();
    assert_eq!(
        first.top_words,
        vec![
            ScoredWord::new("STAR", 7),
            ScoredWord::new("TAR", 5),
            ScoredWord::new("RAT", 5),
        ]
    );

    let second = worker.solve(star.clone()).unwrap();
    assert_eq!(
        second.top_words,
        vec![
            ScoredWord::new("STAR", 7),
            ScoredWord::new("STAR", 7),
            ScoredWord::new("TAR", 5),
        ]
    );

    let fresh = worker.solve_fresh(star).unwrap();
    assert_eq!(fresh, first);
}

#[test]
fn reset_sent_during_solve_applies_after_it() {
    let index = embedded_index();
    let mut worker = SolverWorker::spawn(false).unwrap();

    worker
        .submit(request("CRANE/XXXXX/XXXXX/XXXXX/XXXXX", &index))
        .unwrap();
    worker.reset().unwrap();
    let during = worker.wait().unwrap();
    assert_eq!(during.top_words.len(), 3);

    let after = worker
        .solve(request("STARX/QQQQQ/QQQQQ/QQQQQ/QQQQQ", &index))
        .unwrap();
    assert_eq!(after.top_words[0], ScoredWord::new("STAR", 7));
}

#[test]
fn exported_dictionary_serves_requests() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.json");

    let index = embedded_index();
    let file = std::fs::File::create(&path).unwrap();
    export_dictionary(&index, file, false).unwrap();

    let reloaded = load_index(&path).unwrap();
    assert_eq!(reloaded, index);

    let message = BoundaryMessage::Solve(request("CRANE/XXXXX/XXXXX/XXXXX/XXXXX", &reloaded));
    let input = format!("{}\n", serde_json::to_string(&message).unwrap());
    let mut output = Vec::new();
    let mut worker = SolverWorker::spawn(true).unwrap();
    let summary = run_serve(Cursor::new(input), &mut output, &mut worker).unwrap();

    assert_eq!(summary.solves, 1);
    let reply = String::from_utf8(output).unwrap();
    assert!(reply.starts_with(r#"{"topWords":[{"word":"CRANE","score":21}"#));
}
