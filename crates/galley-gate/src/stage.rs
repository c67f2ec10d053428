use std::time::Duration;

use galley_store::Collection;
use galley_types::Resource;

use crate::error::Rejection;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Everything a pipeline stage may look at for one request.
///
/// A submission borrows the target collection for the length of the
/// pipeline run. The locator stage records where the addressed resource
/// sits so that later stages, and the handler after them, read it without
/// searching again.
pub struct Submission<'a, P, R> {
    /// The inbound body.
    pub payload: &'a P,
    /// The id taken from the request path, if the route carries one.
    pub route_id: Option<&'a str>,
    /// The collection the request targets.
    pub collection: &'a Collection<R>,
    located: Option<usize>,
}

impl<'a, P, R: Resource> Submission<'a, P, R> {
    /// A submission against `collection` with no route id.
    pub fn new(collection: &'a Collection<R>, payload: &'a P) -> Self {
        Self {
            payload,
            route_id: None,
            collection,
            located: None,
        }
    }

    /// Attach the id from the request path.
    pub fn with_route_id(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// Record the position of the addressed resource.
    pub fn set_located(&mut self, index: usize) {
        self.located = Some(index);
    }

    /// Position of the addressed resource, once located.
    pub fn located_index(&self) -> Option<usize> {
        self.located
    }

    /// The addressed resource, once located.
    pub fn located(&self) -> Option<&'a R> {
        self.located.and_then(|i| self.collection.get(i))
    }
}

// ---------------------------------------------------------------------------
// StageDecision
// ---------------------------------------------------------------------------

/// The outcome of a single stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageDecision {
    /// Proceed to the next stage.
    Pass,
    /// Stop the pipeline and report this rejection.
    Fail(Rejection),
}

impl StageDecision {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Fail(Rejection::Validation(message.into()))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<Result<(), Rejection>> for StageDecision {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::Pass,
            Err(rejection) => Self::Fail(rejection),
        }
    }
}

// ---------------------------------------------------------------------------
// StageResult
// ---------------------------------------------------------------------------

/// Recorded result from a completed stage evaluation.
#[derive(Clone, Debug)]
pub struct StageResult {
    /// Name of the stage that produced this result.
    pub stage_name: String,
    /// Whether the stage passed.
    pub passed: bool,
    /// Rejection message, populated on failure.
    pub reason: Option<String>,
    /// Wall-clock time the stage took to evaluate.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Stage trait
// ---------------------------------------------------------------------------

/// A single check in a validation pipeline.
///
/// Stages are evaluated in order against a shared [`Submission`]. A stage
/// must not mutate the collection; the only state it may write is the
/// located position.
///
/// The trait is object-safe and `Send + Sync` so stages can be stored in
/// a `Vec<Box<dyn Stage<P, R>>>` shared across requests.
pub trait Stage<P, R>: Send + Sync {
    /// Human-readable name of this stage (e.g. "require name").
    fn name(&self) -> &str;

    /// Check the submission and return a decision.
    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision;
}
