//! Model catalog and shared model state for the Ollami desktop app.
//!
//! The crate ships a fixed catalog of known model families
//! ([`models::initial_models`]) and two observable cells bundled in
//! [`state::ModelStores`]: the list of models the UI renders, and the model
//! selected for the active session. Everything else (downloading, registry
//! traffic, persistence, rendering) lives in collaborators that read and
//! write these cells.

pub mod error;
pub mod models;
pub mod state;
pub mod store;

pub use error::{Error, Result};
pub use models::{find_model, initial_models, InputModality, ModelDescriptor, ModelVariant};
pub use state::ModelStores;
pub use store::{Store, Subscription};
