use galley_types::TransitionError;

/// Why a pipeline refused a submission.
///
/// Each variant carries the user-facing message verbatim; `Display` renders
/// only that message so it can be sent to the client unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A payload field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The order lifecycle forbids the requested change.
    #[error("{0}")]
    IllegalTransition(String),
}

impl Rejection {
    /// HTTP status code for this rejection.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::IllegalTransition(_) => 400,
            Self::NotFound(_) => 404,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::IllegalTransition(m) => m,
        }
    }
}

impl From<TransitionError> for Rejection {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::UndeclaredStatus(_) => Self::Validation(err.to_string()),
            TransitionError::Terminal(_) | TransitionError::NotDeletable => {
                Self::IllegalTransition(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_types::OrderStatus;

    #[test]
    fn status_codes() {
        assert_eq!(Rejection::Validation("x".into()).status_code(), 400);
        assert_eq!(Rejection::IllegalTransition("x".into()).status_code(), 400);
        assert_eq!(Rejection::NotFound("x".into()).status_code(), 404);
    }

    #[test]
    fn display_is_the_bare_message() {
        let r = Rejection::Validation("Dish must include a name".into());
        assert_eq!(r.to_string(), "Dish must include a name");
        assert_eq!(r.message(), "Dish must include a name");
    }

    #[test]
    fn transition_errors_map_by_kind() {
        let r: Rejection = TransitionError::Terminal(OrderStatus::Delivered).into();
        assert_eq!(r, Rejection::IllegalTransition("A delivered order cannot be changed".into()));
        let r: Rejection = TransitionError::UndeclaredStatus("invalid".into()).into();
        assert!(matches!(r, Rejection::Validation(_)));
    }
}
