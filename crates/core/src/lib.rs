//! Domain core of the performance dashboard backend.
//!
//! Maps dashboards' widgets and uploaded datasets to and from the flat
//! items of a single-table key-value store. Everything here is pure and
//! synchronous; storage and HTTP live in the `db` and `api` crates.

pub mod dataset;
pub mod error;
pub mod ids;
pub mod item;
pub mod keys;
pub mod types;
pub mod validation;
pub mod widget;

pub use error::{CoreError, CoreResult};
pub use ids::{IdSource, UuidIdSource};
pub use item::Item;
pub use keys::ItemKey;
