//! Preview projection

use serde::{Deserialize, Serialize};

use super::payload::{CUSTOM_FINISH_LABEL, trimmed_color};
use super::relevance::is_relevant;
use super::{ConfigField, Configuration};
use crate::models::{FinishCategory, FinishOption, MaterialOption};

/// Placeholder fill of a bare (unlined) interior
pub const NEUTRAL_INTERIOR_COLOR: &str = "#292524";

/// Surface texture overlay of the interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TexturePattern {
    Felt,
    LeatherGrain,
}

impl TexturePattern {
    fn for_category(category: FinishCategory) -> Option<Self> {
        match category {
            FinishCategory::PlushFabric
            | FinishCategory::SuedeLikeSynthetic
            | FinishCategory::Custom => Some(Self::Felt),
            FinishCategory::GenuineLeather | FinishCategory::SyntheticLeather => {
                Some(Self::LeatherGrain)
            }
            FinishCategory::NoFinish => None,
        }
    }
}

/// Everything the live preview renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewProjection {
    pub exterior_color: String,
    /// Wood grain overlay; absent for the custom material
    pub exterior_texture_opacity: Option<f64>,
    pub interior_color: String,
    pub interior_texture: Option<TexturePattern>,
    /// Lacquer sheen over a bare interior
    pub varnish_tint: bool,
    pub lodgement_indicator: bool,
    pub varnish_indicator: bool,
    /// Caption lines under the preview
    pub title: String,
    pub subtitle: String,
    /// Option notes listed beside the preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leather_animal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_interior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varnish: Option<bool>,
}

impl PreviewProjection {
    pub fn project(
        material: &MaterialOption,
        finish: &FinishOption,
        config: &Configuration,
    ) -> Self {
        let category = finish.category;
        let relevant = |field| is_relevant(category, field);
        let bare = category == FinishCategory::NoFinish;

        let interior_color = if bare {
            NEUTRAL_INTERIOR_COLOR.to_string()
        } else {
            finish.color.clone()
        };

        let title = if material.is_custom && !config.custom_wood.is_empty() {
            config.custom_wood.clone()
        } else {
            material.name.clone()
        };

        let subtitle = match category {
            FinishCategory::Custom => CUSTOM_FINISH_LABEL.to_string(),
            _ => finish.name.clone(),
        };

        let varnish = relevant(ConfigField::Varnish).then_some(config.varnish);

        Self {
            exterior_color: material.color.clone(),
            exterior_texture_opacity: (!material.is_custom).then_some(material.texture_opacity),
            interior_color,
            interior_texture: TexturePattern::for_category(category),
            varnish_tint: varnish == Some(true),
            lodgement_indicator: config.lodgement,
            varnish_indicator: varnish == Some(true),
            title,
            subtitle,
            leather_animal: relevant(ConfigField::LeatherAnimal)
                .then(|| config.leather_animal.clone()),
            custom_color: trimmed_color(config).filter(|_| relevant(ConfigField::CustomColor)),
            custom_interior: relevant(ConfigField::CustomInterior)
                .then(|| config.custom_interior.clone()),
            varnish,
        }
    }

    /// Configuration fields reflected in this projection
    pub fn active_fields(&self) -> Vec<ConfigField> {
        let mut fields = vec![ConfigField::Lodgement];
        if self.leather_animal.is_some() {
            fields.push(ConfigField::LeatherAnimal);
        }
        if self.custom_color.is_some() {
            fields.push(ConfigField::CustomColor);
        }
        if self.custom_interior.is_some() {
            fields.push(ConfigField::CustomInterior);
        }
        if self.varnish.is_some() {
            fields.push(ConfigField::Varnish);
        }
        fields.sort();
        fields
    }
}
