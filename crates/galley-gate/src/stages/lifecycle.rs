//! Order lifecycle stages.

use galley_types::status::{check_deletion, check_transition};
use galley_types::{Order, OrderStatus, Payload, TransitionError};
use serde_json::Value;

use crate::error::Rejection;
use crate::stage::{Stage, StageDecision, Submission};

fn requested_status<P: Payload>(payload: &P) -> &str {
    match payload.field("status") {
        Some(Value::String(s)) => s.as_str(),
        _ => "",
    }
}

/// Fails unless the requested status is one of the declared values.
///
/// This subsumes the `"invalid"` probe value: it is not declared, so it
/// fails here whatever the stored status is.
pub struct DeclaredStatus;

impl<P: Payload> Stage<P, Order> for DeclaredStatus {
    fn name(&self) -> &str {
        "status is declared"
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, Order>) -> StageDecision {
        let requested = requested_status(submission.payload);
        match requested.parse::<OrderStatus>() {
            Ok(_) => StageDecision::Pass,
            Err(_) => {
                StageDecision::Fail(TransitionError::UndeclaredStatus(requested.to_string()).into())
            }
        }
    }
}

/// Fails when the located order's stored status forbids the change.
pub struct StatusTransition;

impl<P: Payload> Stage<P, Order> for StatusTransition {
    fn name(&self) -> &str {
        "status transition"
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, Order>) -> StageDecision {
        let current = submission.located().and_then(|order| order.status.as_deref());
        check_transition(current, requested_status(submission.payload))
            .map(|_| ())
            .map_err(Rejection::from)
            .into()
    }
}

/// Fails unless the located order may be destroyed.
pub struct DeletionEligible;

impl<P> Stage<P, Order> for DeletionEligible {
    fn name(&self) -> &str {
        "deletion eligible"
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, Order>) -> StageDecision {
        let current = submission.located().and_then(|order| order.status.as_deref());
        check_deletion(current).map_err(Rejection::from).into()
    }
}
