use galley_types::Resource;

use crate::error::Rejection;
use crate::stage::{Stage, StageDecision, Submission};

/// Resource locator.
///
/// Resolves the route id against the target collection and records the
/// match on the submission for later stages and the handler. Fails with
/// `NotFound` naming the requested id.
pub struct Locate;

impl<P, R: Resource> Stage<P, R> for Locate {
    fn name(&self) -> &str {
        "locate"
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        let route_id = submission.route_id.unwrap_or_default();
        match submission.collection.position(route_id) {
            Some(index) => {
                submission.set_located(index);
                StageDecision::Pass
            }
            None => StageDecision::Fail(Rejection::NotFound(R::not_found_message(route_id))),
        }
    }
}
