use crate::models::ModelDescriptor;
use crate::store::Store;

/// Shared model state, constructed once at startup and handed to whichever
/// components need it.
///
/// Cloning the struct clones handles to the same underlying cells, so every
/// holder observes the same state. `models` starts empty on purpose: the
/// startup routine decides when to seed it from
/// [`initial_models`](crate::models::initial_models).
#[derive(Clone)]
pub struct ModelStores {
    /// Every model the UI currently knows about, in display order.
    pub models: Store<Vec<ModelDescriptor>>,
    /// The model selected for the active session, if any.
    pub current_model: Store<Option<ModelDescriptor>>,
}

impl ModelStores {
    pub fn new() -> Self {
        Self {
            models: Store::new(Vec::new()),
            current_model: Store::new(None),
        }
    }
}

impl Default for ModelStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stores_hold_the_declared_defaults() {
        let stores = ModelStores::new();
        assert!(stores.models.get().is_empty());
        assert!(stores.current_model.get().is_none());
    }

    #[test]
    fn cloned_stores_share_state() {
        let stores = ModelStores::new();
        let other = stores.clone();

        other
            .models
            .set(crate::models::initial_models().to_vec());
        assert_eq!(stores.models.get().len(), 6);
    }
}
