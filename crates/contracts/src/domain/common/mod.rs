//! Common types and traits for all catalog entities

pub mod catalog_entity;
pub mod int_flag;
pub mod validation;

// Re-exports
pub use catalog_entity::CatalogEntity;
pub use validation::{CodeRule, MAX_NAME_LEN, MAX_QUANTITY};
