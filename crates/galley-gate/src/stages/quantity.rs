use galley_types::{positive_integer, Payload};
use serde_json::Value;

use crate::stage::{Stage, StageDecision, Submission};

/// Checks that every line of a list field has a positive-integer `quantity`.
///
/// Lines are scanned in order and the first offending line's zero-based
/// index is reported. A line offends if its quantity is missing,
/// non-numeric, non-positive, or fractional. The list shape itself is
/// enforced by [`super::NonEmptyList`], which runs first.
pub struct LineQuantities {
    field: String,
    stage_name: String,
}

impl LineQuantities {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            stage_name: format!("{field} quantities"),
            field,
        }
    }
}

/// Index of the first line without a positive-integer quantity.
pub fn first_bad_quantity(lines: &[Value]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.get("quantity").and_then(positive_integer).is_none())
}

impl<P: Payload, R> Stage<P, R> for LineQuantities {
    fn name(&self) -> &str {
        &self.stage_name
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        let Some(Value::Array(lines)) = submission.payload.field(&self.field) else {
            return StageDecision::Pass;
        };
        match first_bad_quantity(lines) {
            None => StageDecision::Pass,
            Some(index) => StageDecision::validation(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_store::Collection;
    use galley_types::{Order, OrderPayload};
    use proptest::prelude::*;
    use serde_json::json;

    fn check(dishes: Value) -> StageDecision {
        let orders: Collection<Order> = Collection::new();
        let payload: OrderPayload = serde_json::from_value(json!({ "dishes": dishes })).unwrap();
        LineQuantities::new("dishes").evaluate(&mut Submission::new(&orders, &payload))
    }

    #[test]
    fn valid_lines_pass() {
        assert!(check(json!([{ "quantity": 1 }, { "quantity": 3 }])).is_pass());
    }

    #[test]
    fn each_bad_quantity_is_reported() {
        for bad in [json!(0), json!(-1), json!("2"), json!(2.5)] {
            assert_eq!(
                check(json!([{ "quantity": 1 }, { "quantity": bad }])),
                StageDecision::validation(
                    "Dish 1 must have a quantity that is an integer greater than 0"
                )
            );
        }
    }

    #[test]
    fn missing_quantity_and_non_object_lines_offend() {
        assert!(!check(json!([{ "dishId": "1" }])).is_pass());
        assert!(!check(json!([3])).is_pass());
    }

    #[test]
    fn first_offending_line_wins() {
        assert_eq!(
            check(json!([{ "quantity": 2 }, { "quantity": 0 }, { "quantity": -1 }])),
            StageDecision::validation("Dish 1 must have a quantity that is an integer greater than 0")
        );
    }

    proptest! {
        #[test]
        fn reports_first_bad_index(
            good in proptest::collection::vec(1u64..100, 0..10),
            bad in prop_oneof![Just(json!(0)), Just(json!(-1)), Just(json!("2")), Just(json!(2.5))],
            tail in proptest::collection::vec(-5i64..5, 0..5),
        ) {
            let mut lines: Vec<Value> = good.iter().map(|q| json!({ "quantity": q })).collect();
            let expected = lines.len();
            lines.push(json!({ "quantity": bad }));
            lines.extend(tail.iter().map(|q| json!({ "quantity": q })));
            prop_assert_eq!(first_bad_quantity(&lines), Some(expected));
        }
    }
}
