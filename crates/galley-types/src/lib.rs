//! Foundation types for Galley.
//!
//! Galley serves two in-memory resource collections, dishes and orders.
//! This crate holds the stored resource shapes, the partial payloads that
//! arrive over the wire, and the order lifecycle rules. Every other Galley
//! crate depends on `galley-types`.
//!
//! # Key Types
//!
//! - [`Dish`]: a menu item with a strictly-positive integer price
//! - [`Order`]: a delivery order holding one or more [`OrderLine`]s
//! - [`OrderStatus`]: lifecycle states and transition/deletion rules
//! - [`DishPayload`], [`OrderPayload`]: inbound bodies with every field optional
//! - [`Envelope`], [`ErrorBody`]: `{ data }` and `{ error }` wire wrappers

pub mod dish;
pub mod envelope;
pub mod error;
pub mod order;
pub mod payload;
pub mod resource;
pub mod status;

pub use dish::Dish;
pub use envelope::{Envelope, ErrorBody};
pub use error::TypeError;
pub use order::{Order, OrderLine};
pub use payload::{positive_integer, DishPayload, FieldKind, OrderPayload, Payload};
pub use resource::Resource;
pub use status::{check_deletion, check_transition, OrderStatus, TransitionError};
