//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn ItemStore` as the first argument and speak domain types.

pub mod dataset_repo;
pub mod widget_repo;

pub use dataset_repo::DatasetRepo;
pub use widget_repo::WidgetRepo;
