use galley_types::{Payload, Resource};
use serde_json::Value;

use crate::error::Rejection;
use crate::stage::{Stage, StageDecision, Submission};

/// Fails when the body carries an id that differs from the addressed
/// resource's id.
///
/// A missing, `null`, empty, zero, or `false` body id is treated as "no id"
/// and passes. Non-string ids never match.
pub struct RouteIdMatches;

fn is_blank(id: &Value) -> bool {
    match id {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        _ => false,
    }
}

impl<P: Payload, R: Resource> Stage<P, R> for RouteIdMatches {
    fn name(&self) -> &str {
        "route id matches"
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        let Some(body_id) = submission.payload.body_id().filter(|id| !is_blank(id)) else {
            return StageDecision::Pass;
        };
        let route_id = submission
            .located()
            .map(|resource| resource.id())
            .or(submission.route_id)
            .unwrap_or_default();

        match body_id {
            Value::String(s) if s == route_id => StageDecision::Pass,
            Value::String(s) => StageDecision::Fail(Rejection::Validation(
                R::id_mismatch_message(s, route_id),
            )),
            other => StageDecision::Fail(Rejection::Validation(R::id_mismatch_message(
                &other.to_string(),
                route_id,
            ))),
        }
    }
}
