//! Domain primitives shared by the store and the HTTP layer.

pub mod dashboard;
pub mod error;
pub mod funding;
pub mod types;
