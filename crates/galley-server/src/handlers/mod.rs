//! Resource handlers.
//!
//! Each mutating handler takes the target collection's write lock, runs the
//! route's pipeline, and applies the change only if every stage passed. The
//! lock is held from the first stage to the mutation.

pub mod dishes;
pub mod fallback;
pub mod health;
pub mod orders;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use galley_gate::Accepted;
use galley_types::Envelope;

use crate::error::{ServerError, ServerResult};

/// Unwrap a `{ data }` body, turning a parse failure into a 400.
fn body<T>(payload: Result<Json<Envelope<T>>, JsonRejection>) -> ServerResult<T> {
    payload
        .map(|Json(envelope)| envelope.data)
        .map_err(|rejection| ServerError::MalformedBody(rejection.body_text()))
}

/// Position recorded by the pipeline's locator stage.
fn located(accepted: Accepted, pipeline: &str) -> ServerResult<usize> {
    accepted
        .located
        .ok_or_else(|| ServerError::Internal(format!("{pipeline} accepted without a located resource")))
}
