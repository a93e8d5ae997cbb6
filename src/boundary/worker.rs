//! Solver worker thread
//!
//! Runs a `SolveEndpoint` on a dedicated thread so the caller stays responsive while a
//! traversal runs to completion. Messages are handled strictly in the order sent: a
//! reset sent during a solve takes effect only after that solve has answered.

use super::endpoint::SolveEndpoint;
use super::error::{BoundaryError, Result};
use super::payload::{BoundaryMessage, SolveRequest, SolveResponse};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Handle to a solver thread with at most one solve in flight
pub struct SolverWorker {
    requests: Option<Sender<BoundaryMessage>>,
    responses: Receiver<Result<SolveResponse>>,
    handle: Option<JoinHandle<()>>,
    in_flight: bool,
}

impl SolverWorker {
    /// Start the worker thread
    ///
    /// # Errors
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn(parallel: bool) -> io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<BoundaryMessage>();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("solver-worker".to_string())
            .spawn(move || {
                let mut endpoint = SolveEndpoint::new(parallel);
                for message in request_rx {
                    let Some(outcome) = endpoint.handle(message).transpose() else {
                        continue;
                    };
                    if response_tx.send(outcome).is_err() {
                        break;
                    }
                }
                debug!("solver worker stopped");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
            in_flight: false,
        })
    }

    /// Queue a reset of the aggregate results
    ///
    /// # Errors
    /// Returns `BoundaryError::Disconnected` if the worker thread has exited.
    pub fn reset(&self) -> Result<()> {
        self.send(BoundaryMessage::Reset)
    }

    /// Hand a solve request to the worker without waiting for it
    ///
    /// # Errors
    /// Returns `BoundaryError::Busy` while an earlier solve is unanswered, or
    /// `BoundaryError::Disconnected` if the worker thread has exited.
    pub fn submit(&mut self, request: SolveRequest) -> Result<()> {
        if self.in_flight {
            return Err(BoundaryError::Busy);
        }
        self.send(BoundaryMessage::Solve(request))?;
        self.in_flight = true;
        Ok(())
    }

    /// Poll for the outstanding response without blocking
    pub fn try_recv(&mut self) -> Option<Result<SolveResponse>> {
        if !self.in_flight {
            return None;
        }
        let outcome = match self.responses.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(BoundaryError::Disconnected),
        };
        self.in_flight = false;
        Some(outcome)
    }

    /// Block until the outstanding solve answers
    ///
    /// # Errors
    /// Returns `BoundaryError::Idle` if nothing was submitted, the request's validation
    /// error, or `BoundaryError::Disconnected` if the worker thread has exited.
    pub fn wait(&mut self) -> Result<SolveResponse> {
        if !self.in_flight {
            return Err(BoundaryError::Idle);
        }
        let outcome = self
            .responses
            .recv()
            .map_err(|_| BoundaryError::Disconnected);
        self.in_flight = false;
        outcome?
    }

    /// Submit and wait
    ///
    /// # Errors
    /// See [`SolverWorker::submit`] and [`SolverWorker::wait`].
    pub fn solve(&mut self, request: SolveRequest) -> Result<SolveResponse> {
        self.submit(request)?;
        self.wait()
    }

    /// Reset, then submit and wait, so the response covers this request only
    ///
    /// # Errors
    /// See [`SolverWorker::submit`] and [`SolverWorker::wait`].
    pub fn solve_fresh(&mut self, request: SolveRequest) -> Result<SolveResponse> {
        self.reset()?;
        self.solve(request)
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight
    }

    fn send(&self, message: BoundaryMessage) -> Result<()> {
        self.requests
            .as_ref()
            .ok_or(BoundaryError::Disconnected)?
            .send(message)
            .map_err(|_| BoundaryError::Disconnected)
    }
}

/// Closes the request channel and joins the thread, letting a running solve finish
impl Drop for SolverWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, LetterValues, PrefixIndex};

    fn request(words: &[&str]) -> SolveRequest {
        let grid: Grid = "CATXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        SolveRequest::new(
            &grid,
            &PrefixIndex::from_words(words),
            &LetterValues::standard(),
        )
    }

    #[test]
    fn wait_without_submit_is_idle() {
        let mut worker = SolverWorker::spawn(false).unwrap();
        assert!(matches!(worker.wait(), Err(BoundaryError::Idle)));
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn second_submit_is_busy() {
        let mut worker = SolverWorker::spawn(false).unwrap();
        worker.submit(request(&["cat"])).unwrap();
        assert!(worker.is_busy());
        assert!(matches!(
            worker.submit(request(&["cat"])),
            Err(BoundaryError::Busy)
        ));

        let response = worker.wait().unwrap();
        assert_eq!(response.top_words.len(), 1);
        assert!(!worker.is_busy());
    }
}
