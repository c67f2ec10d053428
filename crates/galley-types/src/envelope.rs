use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` wrapper used by every request and success response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The `{ "error": message }` body of every failure response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DishPayload;

    #[test]
    fn missing_data_defaults() {
        let envelope: Envelope<DishPayload> = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.data, DishPayload::default());
    }
}
