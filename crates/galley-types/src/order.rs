use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;
use crate::payload::{positive_integer, text, OrderPayload};
use crate::resource::Resource;

/// One line of an order: a dish reference and how many of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    /// Strictly positive.
    pub quantity: u64,
}

impl OrderLine {
    fn read(index: usize, line: &Value) -> Result<Self, TypeError> {
        let quantity = line
            .get("quantity")
            .and_then(positive_integer)
            .ok_or_else(|| TypeError::Unmaterializable {
                field: format!("dishes[{index}].quantity"),
                reason: "expected an integer greater than 0".into(),
            })?;
        let dish_id = line
            .get("dishId")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { dish_id, quantity })
    }
}

/// A delivery order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    /// Stored as supplied. Creation does not constrain it to the declared
    /// statuses; updates do.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Never empty.
    pub dishes: Vec<OrderLine>,
}

/// The mutable fields of an order, read out of a validated payload.
struct OrderFields {
    deliver_to: String,
    mobile_number: String,
    status: Option<String>,
    dishes: Vec<OrderLine>,
}

impl OrderFields {
    fn read(payload: &OrderPayload) -> Result<Self, TypeError> {
        let lines = match payload.dishes.as_ref() {
            Some(Value::Array(lines)) if !lines.is_empty() => lines,
            _ => {
                return Err(TypeError::Unmaterializable {
                    field: "dishes".into(),
                    reason: "expected a non-empty array".into(),
                })
            }
        };
        let dishes = lines
            .iter()
            .enumerate()
            .map(|(i, line)| OrderLine::read(i, line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            deliver_to: text(payload.deliver_to.as_ref(), "deliverTo")?,
            mobile_number: text(payload.mobile_number.as_ref(), "mobileNumber")?,
            status: payload
                .status
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
            dishes,
        })
    }
}

impl Order {
    /// Build a new order from a validated payload. The body id is ignored.
    pub fn from_payload(id: impl Into<String>, payload: &OrderPayload) -> Result<Self, TypeError> {
        let fields = OrderFields::read(payload)?;
        Ok(Self {
            id: id.into(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        })
    }

    /// Replace every mutable field from a validated payload.
    ///
    /// Either every field is replaced or, on error, none is.
    pub fn apply(&mut self, payload: &OrderPayload) -> Result<(), TypeError> {
        let fields = OrderFields::read(payload)?;
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = fields.status;
        self.dishes = fields.dishes;
        Ok(())
    }
}

impl Resource for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found_message(id: &str) -> String {
        format!("Order id not found: {id}")
    }
}
