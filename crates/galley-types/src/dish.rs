use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::payload::{integer, text, DishPayload};
use crate::resource::Resource;

/// A menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Strictly positive.
    pub price: u64,
    pub image_url: String,
}

/// The mutable fields of a dish, read out of a validated payload.
struct DishFields {
    name: String,
    description: String,
    price: u64,
    image_url: String,
}

impl DishFields {
    fn read(payload: &DishPayload) -> Result<Self, TypeError> {
        Ok(Self {
            name: text(payload.name.as_ref(), "name")?,
            description: text(payload.description.as_ref(), "description")?,
            price: integer(payload.price.as_ref(), "price")?,
            image_url: text(payload.image_url.as_ref(), "image_url")?,
        })
    }
}

impl Dish {
    /// Build a new dish from a validated payload. The body id is ignored.
    pub fn from_payload(id: impl Into<String>, payload: &DishPayload) -> Result<Self, TypeError> {
        let fields = DishFields::read(payload)?;
        Ok(Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        })
    }

    /// Replace all four mutable fields from a validated payload.
    ///
    /// Either every field is replaced or, on error, none is.
    pub fn apply(&mut self, payload: &DishPayload) -> Result<(), TypeError> {
        let fields = DishFields::read(payload)?;
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
        Ok(())
    }
}

impl Resource for Dish {
    const KIND: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found_message(id: &str) -> String {
        format!("Dish does not exist: {id}.")
    }
}
