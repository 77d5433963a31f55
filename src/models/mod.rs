pub mod catalog;
pub mod types;

pub use catalog::{find_model, initial_models};
pub use types::{InputModality, ModelDescriptor, ModelVariant};
