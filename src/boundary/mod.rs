//! Execution boundary
//!
//! Wire payloads, the solve/reset request handler and the worker thread that keeps
//! a running search off the caller's thread.

mod endpoint;
mod error;
mod payload;
mod worker;

pub use endpoint::SolveEndpoint;
pub use error::{BoundaryError, Result};
pub use payload::{
    BoundaryMessage, CellPayload, SolveInput, SolveRequest, SolveResponse, parse_letter_values,
};
pub use worker::SolverWorker;
