//! In-memory resource storage for Galley.
//!
//! Each resource kind lives in its own [`Collection`]: an insertion-ordered
//! list keyed by string id that also owns identifier allocation for that
//! kind. [`InMemoryStore`] owns one collection per kind behind its own lock,
//! so a request can hold a collection for the whole validate-then-mutate
//! sequence while the other collection stays available.
//!
//! # Design Rules
//!
//! 1. Listing order is insertion order.
//! 2. Ids are decimal strings; allocation is the successor of the highest
//!    numeric id the collection has ever held.
//! 3. Ids are never reused, even after the resource holding one is removed.
//! 4. Lock poisoning is reported as an error, never unwrapped.

pub mod collection;
pub mod error;
pub mod ids;
pub mod memory;
pub mod seed;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use ids::{next_id, numeric_id, SEED_ID};
pub use memory::InMemoryStore;
pub use seed::Seed;
