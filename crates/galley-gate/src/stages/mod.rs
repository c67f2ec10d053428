//! Built-in pipeline stages.

pub mod field;
pub mod identity;
pub mod lifecycle;
pub mod locate;
pub mod quantity;

pub use field::{NonEmptyList, PositiveInteger, RequireField};
pub use identity::RouteIdMatches;
pub use lifecycle::{DeclaredStatus, DeletionEligible, StatusTransition};
pub use locate::Locate;
pub use quantity::LineQuantities;
