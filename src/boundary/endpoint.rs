//! Request handling behind the execution boundary
//!
//! One endpoint handles one message at a time. A solve runs the engine on fresh
//! per-request results, folds them into the endpoint's aggregate and answers with the
//! aggregate; a reset clears the aggregate before the next solve.

use super::error::Result;
use super::payload::{BoundaryMessage, SolveRequest, SolveResponse};
use crate::solver::{SearchEngine, TopResults};
use std::time::Instant;
use tracing::{debug, info};

/// Solve/reset state machine
#[derive(Debug, Default)]
pub struct SolveEndpoint {
    aggregate: TopResults,
    parallel: bool,
}

impl SolveEndpoint {
    /// Create an endpoint; `parallel` spreads each traversal over the rayon pool
    #[must_use]
    pub fn new(parallel: bool) -> Self {
        Self {
            aggregate: TopResults::new(),
            parallel,
        }
    }

    /// Dispatch a message; only solves produce a response
    ///
    /// # Errors
    /// Returns the validation error of a rejected solve request.
    pub fn handle(&mut self, message: BoundaryMessage) -> Result<Option<SolveResponse>> {
        match message {
            BoundaryMessage::Solve(request) => self.solve(&request).map(Some),
            BoundaryMessage::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Validate `request`, run the search to completion and return the aggregate
    ///
    /// A rejected request leaves the aggregate untouched.
    ///
    /// # Errors
    /// Returns `BoundaryError` if the request fails validation.
    pub fn solve(&mut self, request: &SolveRequest) -> Result<SolveResponse> {
        let input = request.to_input()?;
        info!(
            dictionary_words = input.index.len(),
            parallel = self.parallel,
            "solve started"
        );

        let start = Instant::now();
        let engine = SearchEngine::new(&input.index, &input.grid, &input.values);
        let results = if self.parallel {
            engine.solve_parallel()
        } else {
            engine.solve()
        };
        info!(
            ranked = results.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "solve finished"
        );

        self.aggregate.merge(results);
        Ok(SolveResponse::from(&self.aggregate))
    }

    /// Clear the aggregate results
    pub fn reset(&mut self) {
        debug!("results reset");
        self.aggregate.clear();
    }

    /// Aggregate results accumulated since the last reset
    #[must_use]
    pub const fn results(&self) -> &TopResults {
        &self.aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryError;
    use crate::core::{Grid, LetterValues, PrefixIndex};
    use crate::solver::ScoredWord;

    fn request(grid: &str, words: &[&str]) -> SolveRequest {
        let grid: Grid = grid.parse().unwrap();
        SolveRequest::new(
            &grid,
            &PrefixIndex::from_words(words),
            &LetterValues::standard(),
        )
    }

    #[test]
    fn solve_returns_ranked_words() {
        let mut endpoint = SolveEndpoint::new(false);
        let response = endpoint
            .solve(&request("CATXX XXXXX XXXXX XXXXX XXXXX", &["cat", "at"]))
            .unwrap();

        assert_eq!(
            response.top_words,
            vec![ScoredWord::new("CAT", 8), ScoredWord::new("AT", 3)]
        );
    }

    #[test]
    fn solves_accumulate_until_reset() {
        let mut endpoint = SolveEndpoint::new(false);
        let cat = request("CATXX XXXXX XXXXX XXXXX XXXXX", &["cat"]);
        let zax = request("ZAXQQ QQQQQ QQQQQ QQQQQ QQQQQ", &["zax"]);

        endpoint.solve(&cat).unwrap();
        let response = endpoint.solve(&zax).unwrap();
        assert_eq!(response.top_words.len(), 2);
        assert_eq!(response.top_words[0], ScoredWord::new("ZAX", 16));

        assert_eq!(endpoint.handle(BoundaryMessage::Reset).unwrap(), None);
        assert!(endpoint.results().is_empty());

        let response = endpoint.solve(&cat).unwrap();
        assert_eq!(response.top_words, vec![ScoredWord::new("CAT", 8)]);
    }

    #[test]
    fn rejected_request_keeps_aggregate() {
        let mut endpoint = SolveEndpoint::new(false);
        endpoint
            .solve(&request("CATXX XXXXX XXXXX XXXXX XXXXX", &["cat"]))
            .unwrap();

        let incomplete = request("CAT.X XXXXX XXXXX XXXXX XXXXX", &["cat"]);
        assert!(matches!(
            endpoint.handle(BoundaryMessage::Solve(incomplete)),
            Err(BoundaryError::Grid(_))
        ));
        assert_eq!(endpoint.results().len(), 1);
    }

    #[test]
    fn parallel_endpoint_matches_sequential() {
        let req = request(
            "CATSX RENDY OXXXX XXXXX XXXXX",
            &["cat", "cats", "act", "tar", "ten", "tend", "rends", "ace", "race"],
        );

        let sequential = SolveEndpoint::new(false).solve(&req).unwrap();
        let parallel = SolveEndpoint::new(true).solve(&req).unwrap();
        assert_eq!(sequential, parallel);
    }
}
