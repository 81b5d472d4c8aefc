//! Common types and traits for all console entities

pub mod aggregate_id;
pub mod base_model;
pub mod resource_meta;

// Re-exports
pub use aggregate_id::AggregateId;
pub use base_model::{BaseModel, ConsoleEntity};
pub use resource_meta::ResourceMeta;
