//! Material (wood species) Model

use serde::{Deserialize, Serialize};

/// Exterior material option (wood species)
///
/// Immutable reference data supplied by the catalog. Exactly one entry of a
/// catalog carries `is_custom = true`: the "name your own wood" variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOption {
    pub id: String,
    pub name: String,
    /// Base fill colour (`#rrggbb`)
    pub color: String,
    pub description: String,
    /// Texture blend intensity, 0.0 ..= 1.0
    pub texture_opacity: f64,
    #[serde(default)]
    pub is_custom: bool,
}

impl MaterialOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
        texture_opacity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            description: description.into(),
            texture_opacity,
            is_custom: false,
        }
    }

    /// Mark as the custom/unspecified variant
    pub fn custom(mut self) -> Self {
        self.is_custom = true;
        self
    }
}
