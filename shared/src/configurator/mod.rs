//! Box configurator core
//!
//! Selection state (material × finish × options) and the pure derivations
//! read from it:
//!
//! - [`Selection`]: the mutable state of one configurator session
//! - [`build_order_payload`]: flattened payload handed to order creation
//! - [`PreviewProjection`]: display parameters of the live preview
//! - [`relevant_fields`]: which options apply to which finish category
//! - [`OrderForm`]: lead form wrapping a selection, plus the submission flow
//!
//! Derived views are recomputed from the selection on every read and never
//! cached. Payload and preview both consult the same relevance table, so an
//! option that does not apply to the current category cannot leak into
//! either.

mod form;
mod payload;
mod preview;
mod relevance;
mod selection;

pub use form::{
    CurrentUserProvider, FormError, OrderForm, OrderSubmitter, PendingSubmission,
    SessionHandle, SubmitError,
};
pub use payload::{CUSTOM_FINISH_LABEL, OrderDetailPayload, build_order_payload};
pub use preview::{NEUTRAL_INTERIOR_COLOR, PreviewProjection, TexturePattern};
pub use relevance::{is_relevant, relevant_fields};
pub use selection::{ConfiguratorError, Selection, SelectionSnapshot};

use serde::{Deserialize, Serialize};

/// Free-form options of a configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Wood requested when the custom material is chosen
    pub custom_wood: String,
    /// Animal of origin, genuine leather only
    pub leather_animal: String,
    /// Colour wish, any category
    pub custom_color: String,
    /// Lining description, custom finish only
    pub custom_interior: String,
    /// Fitted insert
    pub lodgement: bool,
    /// Varnished bare interior, `none` finish only
    pub varnish: bool,
}

impl Configuration {
    /// Shallow merge of a single field
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::CustomWood(v) => self.custom_wood = v,
            ConfigUpdate::LeatherAnimal(v) => self.leather_animal = v,
            ConfigUpdate::CustomColor(v) => self.custom_color = v,
            ConfigUpdate::CustomInterior(v) => self.custom_interior = v,
            ConfigUpdate::Lodgement(v) => self.lodgement = v,
            ConfigUpdate::Varnish(v) => self.varnish = v,
        }
    }
}

/// Configuration field key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    CustomWood,
    LeatherAnimal,
    CustomColor,
    CustomInterior,
    Lodgement,
    Varnish,
}

/// One field update, typed by field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ConfigUpdate {
    CustomWood(String),
    LeatherAnimal(String),
    CustomColor(String),
    CustomInterior(String),
    Lodgement(bool),
    Varnish(bool),
}

impl ConfigUpdate {
    pub fn field(&self) -> ConfigField {
        match self {
            Self::CustomWood(_) => ConfigField::CustomWood,
            Self::LeatherAnimal(_) => ConfigField::LeatherAnimal,
            Self::CustomColor(_) => ConfigField::CustomColor,
            Self::CustomInterior(_) => ConfigField::CustomInterior,
            Self::Lodgement(_) => ConfigField::Lodgement,
            Self::Varnish(_) => ConfigField::Varnish,
        }
    }
}
