//! Validation pipeline for Galley.
//!
//! Every mutation of a dish or order must pass through a [`Pipeline`]
//! before it is applied. A pipeline is an ordered list of [`Stage`]s
//! (field validators, the resource locator, order lifecycle checks) run
//! against a shared [`Submission`]. The first stage that fails stops the
//! run, and its [`Rejection`] is the only one reported.
//!
//! # Quick Start
//!
//! ```rust
//! use galley_gate::{pipelines, Submission};
//! use galley_store::Collection;
//! use galley_types::DishPayload;
//! use serde_json::json;
//!
//! let dishes = Collection::new();
//! let payload: DishPayload = serde_json::from_value(json!({
//!     "name": "Taco", "description": "d", "price": -1, "image_url": "u",
//! })).unwrap();
//! let rejection = pipelines::dish_create()
//!     .run(Submission::new(&dishes, &payload))
//!     .unwrap_err();
//! assert_eq!(rejection.status_code(), 400);
//! assert_eq!(
//!     rejection.to_string(),
//!     "Dish must have a price that is an integer greater than 0",
//! );
//! ```

pub mod error;
pub mod pipeline;
pub mod pipelines;
pub mod stage;
pub mod stages;

pub use error::Rejection;
pub use pipeline::{Accepted, Pipeline, PipelineResult};
pub use pipelines::Pipelines;
pub use stage::{Stage, StageDecision, StageResult, Submission};
pub use stages::{
    DeclaredStatus, DeletionEligible, LineQuantities, Locate, NonEmptyList, PositiveInteger,
    RequireField, RouteIdMatches, StatusTransition,
};
