//! Field validators.
//!
//! Each validator checks one property of the payload, addressed by its wire
//! name. [`RequireField`] is the generic presence check; [`PositiveInteger`]
//! and [`NonEmptyList`] are refinements meant to run after it.

use galley_types::{positive_integer, FieldKind, Payload};
use serde_json::Value;

use crate::stage::{Stage, StageDecision, Submission};

/// Returns `true` if `value` counts as supplied for a field of `kind`.
///
/// Absent values, empty strings, zero, booleans and objects never count.
/// Text fields additionally require a string.
pub fn is_present(value: Option<&Value>, kind: FieldKind) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(_)) | Some(Value::Object(_)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) if kind == FieldKind::Text => false,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) => true,
    }
}

// ---------------------------------------------------------------------------
// RequireField
// ---------------------------------------------------------------------------

/// Fails unless the field is present and non-empty.
///
/// The default message is `"<Resource> must include a <field>"`.
pub struct RequireField {
    field: String,
    message: Option<String>,
    stage_name: String,
}

impl RequireField {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            stage_name: format!("require {field}"),
            field,
            message: None,
        }
    }

    /// Replace the default failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<P: Payload, R> Stage<P, R> for RequireField {
    fn name(&self) -> &str {
        &self.stage_name
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        if is_present(submission.payload.field(&self.field), P::field_kind(&self.field)) {
            return StageDecision::Pass;
        }
        StageDecision::validation(
            self.message
                .clone()
                .unwrap_or_else(|| format!("{} must include a {}", P::RESOURCE, self.field)),
        )
    }
}

// ---------------------------------------------------------------------------
// PositiveInteger
// ---------------------------------------------------------------------------

/// Fails unless the field is a JSON number that is a whole number above zero.
///
/// The message is `"<Resource> must have a <field> that is an integer
/// greater than 0"`.
pub struct PositiveInteger {
    field: String,
    stage_name: String,
}

impl PositiveInteger {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            stage_name: format!("{field} is a positive integer"),
            field,
        }
    }
}

impl<P: Payload, R> Stage<P, R> for PositiveInteger {
    fn name(&self) -> &str {
        &self.stage_name
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        match submission.payload.field(&self.field).and_then(positive_integer) {
            Some(_) => StageDecision::Pass,
            None => StageDecision::validation(format!(
                "{} must have a {} that is an integer greater than 0",
                P::RESOURCE,
                self.field
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// NonEmptyList
// ---------------------------------------------------------------------------

/// Fails unless the field is an array with at least one element.
///
/// The message is `"<Resource> must include at least one <item>"`.
pub struct NonEmptyList {
    field: String,
    item: String,
    stage_name: String,
}

impl NonEmptyList {
    /// `item` is the singular noun used in the failure message.
    pub fn new(field: impl Into<String>, item: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            stage_name: format!("{field} is a non-empty list"),
            field,
            item: item.into(),
        }
    }
}

impl<P: Payload, R> Stage<P, R> for NonEmptyList {
    fn name(&self) -> &str {
        &self.stage_name
    }

    fn evaluate(&self, submission: &mut Submission<'_, P, R>) -> StageDecision {
        match submission.payload.field(&self.field) {
            Some(Value::Array(items)) if !items.is_empty() => StageDecision::Pass,
            _ => StageDecision::validation(format!(
                "{} must include at least one {}",
                P::RESOURCE,
                self.item
            )),
        }
    }
}
