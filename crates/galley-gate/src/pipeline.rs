use std::time::{Duration, Instant};

use galley_types::Resource;

use crate::error::Rejection;
use crate::stage::{Stage, StageDecision, StageResult, Submission};

// ---------------------------------------------------------------------------
// PipelineResult
// ---------------------------------------------------------------------------

/// A submission that passed every stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accepted {
    /// Position of the addressed resource, if the pipeline located one.
    pub located: Option<usize>,
}

/// The outcome of running a submission through a pipeline.
#[derive(Clone, Debug)]
pub struct PipelineResult {
    /// `Ok` if every stage passed, otherwise the first rejection.
    pub decision: Result<(), Rejection>,
    /// Position of the addressed resource, if a stage located one.
    pub located: Option<usize>,
    /// Per-stage results in evaluation order, ending at the first failure.
    pub stage_results: Vec<StageResult>,
    /// Total wall-clock time for the pipeline evaluation.
    pub elapsed: Duration,
}

impl PipelineResult {
    pub fn is_accepted(&self) -> bool {
        self.decision.is_ok()
    }

    pub fn into_result(self) -> Result<Accepted, Rejection> {
        self.decision.map(|()| Accepted {
            located: self.located,
        })
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// An ordered list of stages that every submission for one route must pass
/// before its handler runs.
///
/// The pipeline is **fail-fast**: the first stage that fails stops
/// evaluation, later stages are never consulted, and that stage's rejection
/// is the only one reported.
pub struct Pipeline<P, R> {
    name: String,
    stages: Vec<Box<dyn Stage<P, R>>>,
}

impl<P, R: Resource> Pipeline<P, R> {
    /// Create an empty pipeline. An empty pipeline accepts everything.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Builder form of [`Self::add_stage`].
    pub fn stage(mut self, stage: impl Stage<P, R> + 'static) -> Self {
        self.add_stage(Box::new(stage));
        self
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn Stage<P, R>>) {
        self.stages.push(stage);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Stage names in evaluation order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Evaluate a submission through the full pipeline.
    pub fn evaluate(&self, mut submission: Submission<'_, P, R>) -> PipelineResult {
        let pipeline_start = Instant::now();
        let mut stage_results = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            let decision = stage.evaluate(&mut submission);
            let elapsed = stage_start.elapsed();

            let reason = match &decision {
                StageDecision::Pass => None,
                StageDecision::Fail(rejection) => Some(rejection.to_string()),
            };
            tracing::debug!(
                pipeline = %self.name,
                stage = stage.name(),
                passed = decision.is_pass(),
                elapsed_us = elapsed.as_micros() as u64,
                "stage evaluated"
            );
            stage_results.push(StageResult {
                stage_name: stage.name().to_string(),
                passed: decision.is_pass(),
                reason,
                elapsed,
            });

            if let StageDecision::Fail(rejection) = decision {
                tracing::debug!(
                    pipeline = %self.name,
                    stage = stage.name(),
                    status = rejection.status_code(),
                    reason = %rejection,
                    "stage rejected submission"
                );
                return PipelineResult {
                    decision: Err(rejection),
                    located: submission.located_index(),
                    stage_results,
                    elapsed: pipeline_start.elapsed(),
                };
            }
        }

        tracing::debug!(pipeline = %self.name, stages = self.stages.len(), "submission accepted");
        PipelineResult {
            decision: Ok(()),
            located: submission.located_index(),
            stage_results,
            elapsed: pipeline_start.elapsed(),
        }
    }

    /// Evaluate and keep only the decision.
    pub fn run(&self, submission: Submission<'_, P, R>) -> Result<Accepted, Rejection> {
        self.evaluate(submission).into_result()
    }
}

impl<P, R> std::fmt::Debug for Pipeline<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("stage_count", &self.stages.len())
            .finish()
    }
}
