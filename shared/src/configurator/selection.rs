//! Selection state of one configurator session

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use super::payload::{OrderDetailPayload, build_order_payload};
use super::preview::PreviewProjection;
use super::{ConfigUpdate, Configuration};
use crate::catalog::{Catalog, CategoryTab};
use crate::models::{FinishCategory, FinishOption, MaterialOption};

/// Selection errors (ids outside the catalog)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfiguratorError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("unknown finish: {0}")]
    UnknownFinish(String),
}

/// Serializable form of a selection, as sent by the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub material_id: String,
    pub finish_id: String,
    #[serde(default)]
    pub configuration: Configuration,
}

/// Material, finish, options and the active tab
///
/// After every mutation `finish().category == active_category()`.
#[derive(Debug, Clone)]
pub struct Selection {
    catalog: Arc<Catalog>,
    material: MaterialOption,
    finish: FinishOption,
    configuration: Configuration,
    active_category: FinishCategory,
}

impl Selection {
    /// Fresh selection on the catalog defaults
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let material = catalog.default_material().clone();
        let finish = catalog.default_finish().clone();
        Self {
            active_category: finish.category,
            catalog,
            material,
            finish,
            configuration: Configuration::default(),
        }
    }

    /// Rebuild a selection from its snapshot
    pub fn from_snapshot(
        catalog: Arc<Catalog>,
        snapshot: &SelectionSnapshot,
    ) -> Result<Self, ConfiguratorError> {
        let mut selection = Self::new(catalog);
        selection.set_material(&snapshot.material_id)?;
        selection.set_finish(&snapshot.finish_id)?;
        selection.configuration = snapshot.configuration.clone();
        Ok(selection)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            material_id: self.material.id.clone(),
            finish_id: self.finish.id.clone(),
            configuration: self.configuration.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn material(&self) -> &MaterialOption {
        &self.material
    }

    pub fn finish(&self) -> &FinishOption {
        &self.finish
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn active_category(&self) -> FinishCategory {
        self.active_category
    }

    pub fn set_material(&mut self, id: &str) -> Result<(), ConfiguratorError> {
        let material = self
            .catalog
            .material(id)
            .ok_or_else(|| ConfiguratorError::UnknownMaterial(id.to_string()))?;
        self.material = material.clone();
        Ok(())
    }

    /// Pick a finish; the active tab follows its category
    pub fn set_finish(&mut self, id: &str) -> Result<(), ConfiguratorError> {
        let finish = self
            .catalog
            .finish(id)
            .ok_or_else(|| ConfiguratorError::UnknownFinish(id.to_string()))?;
        self.finish = finish.clone();
        self.active_category = finish.category;
        Ok(())
    }

    /// Switch tab and select the first finish of that category
    ///
    /// A category without catalog entries leaves the state unchanged. Text
    /// typed under another tab is kept; derivations filter it out.
    pub fn set_category(&mut self, category: FinishCategory) {
        if let Some(first) = self.catalog.first_in_category(category) {
            self.finish = first.clone();
            self.active_category = category;
        }
    }

    pub fn update_configuration(&mut self, update: ConfigUpdate) {
        self.configuration.apply(update);
    }

    /// Swatches of the active tab
    pub fn visible_finish_options(&self) -> Vec<&FinishOption> {
        self.catalog.visible_finish_options(self.active_category)
    }

    pub fn category_tabs(&self) -> Vec<CategoryTab> {
        self.catalog.category_tabs()
    }

    pub fn order_payload(&self) -> OrderDetailPayload {
        build_order_payload(&self.material, &self.finish, &self.configuration)
    }

    pub fn preview(&self) -> PreviewProjection {
        PreviewProjection::project(&self.material, &self.finish, &self.configuration)
    }
}
