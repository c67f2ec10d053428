//! Inbound request payloads.
//!
//! Every field is an optional raw JSON value so that a malformed field is
//! reported by the validator that owns it, with that validator's message,
//! rather than failing wholesale at deserialization. Fields that are not
//! declared here are dropped on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// The declared shape of a payload field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-empty string.
    Text,
    /// A strictly-positive integer.
    Integer,
    /// A non-empty sequence.
    List,
}

/// A partial resource body, addressable by wire field name.
pub trait Payload: Send + Sync {
    /// Resource name used at the start of default validator messages.
    const RESOURCE: &'static str;

    /// The raw value of the field with wire name `name`, if supplied.
    fn field(&self, name: &str) -> Option<&Value>;

    /// The declared kind of the field with wire name `name`.
    fn field_kind(name: &str) -> FieldKind;

    /// The id carried in the body, if any.
    fn body_id(&self) -> Option<&Value> {
        self.field("id")
    }
}

/// Body of a dish create or update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DishPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
}

impl Payload for DishPayload {
    const RESOURCE: &'static str = "Dish";

    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "id" => self.id.as_ref(),
            "name" => self.name.as_ref(),
            "description" => self.description.as_ref(),
            "price" => self.price.as_ref(),
            "image_url" => self.image_url.as_ref(),
            _ => None,
        }
    }

    fn field_kind(name: &str) -> FieldKind {
        match name {
            "price" => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }
}

/// Body of an order create or update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver_to: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dishes: Option<Value>,
}

impl Payload for OrderPayload {
    const RESOURCE: &'static str = "Order";

    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "id" => self.id.as_ref(),
            "deliverTo" => self.deliver_to.as_ref(),
            "mobileNumber" => self.mobile_number.as_ref(),
            "status" => self.status.as_ref(),
            "dishes" => self.dishes.as_ref(),
            _ => None,
        }
    }

    fn field_kind(name: &str) -> FieldKind {
        match name {
            "dishes" => FieldKind::List,
            _ => FieldKind::Text,
        }
    }
}

/// Interpret `value` as a strictly-positive integer.
///
/// Only JSON numbers qualify. Floats with no fractional part (`5.0`) are
/// accepted; numeric strings are not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f > 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
}

/// Read a required text field out of a validated payload.
pub(crate) fn text(value: Option<&Value>, field: &str) -> Result<String, TypeError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(TypeError::Unmaterializable {
            field: field.into(),
            reason: "expected a non-empty string".into(),
        }),
    }
}

/// Read a required positive integer field out of a validated payload.
pub(crate) fn integer(value: Option<&Value>, field: &str) -> Result<u64, TypeError> {
    value
        .and_then(positive_integer)
        .ok_or_else(|| TypeError::Unmaterializable {
            field: field.into(),
            reason: "expected an integer greater than 0".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_integer_accepts_whole_numbers() {
        assert_eq!(positive_integer(&json!(5)), Some(5));
        assert_eq!(positive_integer(&json!(5.0)), Some(5));
    }

    #[test]
    fn positive_integer_rejects_everything_else() {
        for value in [json!(0), json!(-1), json!(2.5), json!("2"), json!(null), json!([1])] {
            assert_eq!(positive_integer(&value), None, "{value}");
        }
    }

    #[test]
    fn positive_integer_rejects_floats_beyond_u64() {
        // 2^64 as a float would saturate to u64::MAX when cast.
        for value in [json!(18446744073709551616.0), json!(1e20)] {
            assert_eq!(positive_integer(&value), None, "{value}");
        }
        assert_eq!(positive_integer(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(positive_integer(&json!(9007199254740992.0)), Some(9007199254740992));
    }

    #[test]
    fn dish_payload_drops_unknown_fields() {
        let payload: DishPayload = serde_json::from_value(json!({
            "name": "Taco",
            "calories": 400,
        }))
        .unwrap();
        assert_eq!(payload.field("name"), Some(&json!("Taco")));
        assert_eq!(payload.field("calories"), None);
    }

    #[test]
    fn null_fields_read_as_absent() {
        let payload: DishPayload = serde_json::from_value(json!({ "name": null })).unwrap();
        assert!(payload.name.is_none());
    }

    #[test]
    fn order_payload_uses_camel_case() {
        let payload: OrderPayload = serde_json::from_value(json!({
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "dishes": [],
        }))
        .unwrap();
        assert_eq!(payload.field("deliverTo"), Some(&json!("308 Negra Arroyo Lane")));
        assert_eq!(payload.field("mobileNumber"), Some(&json!("(505) 143-3369")));
        assert_eq!(OrderPayload::field_kind("dishes"), FieldKind::List);
        assert_eq!(OrderPayload::field_kind("status"), FieldKind::Text);
    }

    #[test]
    fn field_kinds_for_dish() {
        assert_eq!(DishPayload::field_kind("price"), FieldKind::Integer);
        assert_eq!(DishPayload::field_kind("image_url"), FieldKind::Text);
    }

    proptest::proptest! {
        #[test]
        fn positive_integer_matches_sign(n in proptest::num::i64::ANY) {
            let expected = (n > 0).then_some(n as u64);
            proptest::prop_assert_eq!(positive_integer(&json!(n)), expected);
        }

        #[test]
        fn numeric_strings_never_count(n in 1u64..) {
            proptest::prop_assert_eq!(positive_integer(&json!(n.to_string())), None);
        }
    }
}
