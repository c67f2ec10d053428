//! Order lifecycle.
//!
//! Orders move freely between the three open states. `delivered` is
//! terminal: once stored, the order can no longer be changed. Deletion is a
//! separate guard that only admits `pending` orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TypeError;

/// The declared status values of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every declared status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }

    /// Returns `true` if no transition out of this status is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns `true` if an order in this status may be destroyed.
    pub fn is_deletable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if an order may move from `self` to `next`.
    ///
    /// Every non-terminal status may move to any declared status, including
    /// itself.
    pub fn can_transition_to(&self, _next: OrderStatus) -> bool {
        !self.is_terminal()
    }

    /// Comma-separated list of every declared status.
    pub fn declared_list() -> String {
        Self::ALL
            .iter()
            .map(OrderStatus::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeError::UnknownStatus(s.to_string()))
    }
}

/// Why a status change or a deletion was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested status is not one of the declared values.
    #[error("Order must have a status of {}", OrderStatus::declared_list())]
    UndeclaredStatus(String),

    /// The stored status is terminal.
    #[error("A {0} order cannot be changed")]
    Terminal(OrderStatus),

    /// Only pending orders may be destroyed.
    #[error("An order cannot be deleted unless it is pending.")]
    NotDeletable,
}

/// Decide whether an order whose stored status is `current` may take the
/// `requested` status.
///
/// The requested value is checked against the declared statuses first, so an
/// undeclared value fails regardless of the stored state. Stored statuses
/// that are not declared values (orders are created with whatever status the
/// caller supplied) count as non-terminal.
pub fn check_transition(
    current: Option<&str>,
    requested: &str,
) -> Result<OrderStatus, TransitionError> {
    let next: OrderStatus = requested
        .parse()
        .map_err(|_| TransitionError::UndeclaredStatus(requested.to_string()))?;

    match current.and_then(|s| s.parse::<OrderStatus>().ok()) {
        Some(stored) if !stored.can_transition_to(next) => Err(TransitionError::Terminal(stored)),
        _ => Ok(next),
    }
}

/// Decide whether an order whose stored status is `current` may be destroyed.
pub fn check_deletion(current: Option<&str>) -> Result<(), TransitionError> {
    match current.and_then(|s| s.parse::<OrderStatus>().ok()) {
        Some(stored) if stored.is_deletable() => Ok(()),
        _ => Err(TransitionError::NotDeletable),
    }
}
