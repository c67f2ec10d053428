//! Seed fixtures loaded at startup.

use std::path::Path;

use galley_types::{Dish, Order};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Initial contents for both collections, in listing order.
///
/// On disk this is a JSON document `{ "dishes": [...], "orders": [...] }`;
/// either key may be omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    pub fn from_json_str(s: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a seed file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let seed = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "loaded seed file"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "dishes": [
            { "id": "1", "name": "Dolcelatte and chickpea spaghetti",
              "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
              "price": 19, "image_url": "https://images.example/spaghetti.jpg" }
        ],
        "orders": [
            { "id": "1", "deliverTo": "308 Negra Arroyo Lane", "mobileNumber": "(505) 143-3369",
              "status": "delivered", "dishes": [{ "dishId": "1", "quantity": 2 }] }
        ]
    }"#;

    #[test]
    fn parses_fixture_document() {
        let seed = Seed::from_json_str(FIXTURE).unwrap();
        assert_eq!(seed.dishes.len(), 1);
        assert_eq!(seed.dishes[0].price, 19);
        assert_eq!(seed.orders[0].status.as_deref(), Some("delivered"));
        assert_eq!(seed.orders[0].dishes[0].quantity, 2);
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let seed = Seed::from_json_str("{}").unwrap();
        assert_eq!(seed, Seed::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.orders.len(), 1);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = Seed::from_json_str(r#"{ "dishes": [{ "id": 1 }] }"#).unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Seed::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
