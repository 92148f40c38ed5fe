pub mod dataset;
pub mod widget;
