use serde::{Deserialize, Serialize};

/// Input kinds a model variant accepts.
#[non_exhaustive]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputModality {
    Text,
    Image,
}

/// One parameter-size configuration of a model family.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariant {
    /// Free-form parameter-count label ("8b", "1.5b").
    pub parameters: String,
    /// Approximate download size in megabytes.
    pub size: u64,
    /// Context window in tokens.
    pub context: u64,
    pub input: Vec<InputModality>,
    /// Marks the default/recommended variant. At most one per family,
    /// by authoring discipline; absent on the wire means false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_latest: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ModelVariant {
    pub fn supports(&self, modality: InputModality) -> bool {
        self.input.contains(&modality)
    }
}

/// One catalog entry describing a named model family and its variants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub name: String,
    /// Pull reference (`name:tag`), the stable identifier for a family.
    pub image: String,
    /// Headline context window, generally the latest variant's.
    pub context: u64,
    /// Headline parameter label or range ("3B", "0.6B-235B").
    pub parameters: String,
    /// Ordered smallest-to-largest, never empty in authored data.
    pub versions: Vec<ModelVariant>,
    /// Icon asset filename, resolved by the UI asset loader.
    pub icon: String,
    /// Headline download size in gigabytes.
    pub size: f64,
    pub tags: Vec<String>,
    pub description: String,
    /// Local installation status, maintained by the installer.
    pub installed: bool,
    pub popularity: u64,
    /// User favorite flag, maintained by the UI.
    pub fav: bool,
    /// Styling/grouping key for the frontend theme.
    pub class_name: String,
}

impl ModelDescriptor {
    /// The variant marked latest, falling back to the first one.
    pub fn latest(&self) -> Option<&ModelVariant> {
        self.versions
            .iter()
            .find(|v| v.is_latest)
            .or_else(|| self.versions.first())
    }
}
