//! Product catalog
//!
//! Immutable reference data for the configurator: exterior materials and
//! interior finishes. A [`Catalog`] is only obtainable through
//! [`Catalog::new`], which enforces the contract every consumer relies on:
//!
//! - both lists are non-empty
//! - ids are unique within each list
//! - every category tab has at least one finish entry
//! - exactly one material is the custom variant
//!
//! Catalogs come from a [`CatalogProvider`]: the built-in [`StandardCatalog`]
//! or a [`JsonFileCatalog`] pointing at an operator-supplied document.

mod standard;

pub use standard::StandardCatalog;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FinishCategory, FinishOption, MaterialOption};

/// Catalog contract violations and load failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no materials")]
    NoMaterials,

    #[error("catalog has no finishes")]
    NoFinishes,

    #[error("duplicate material id: {0}")]
    DuplicateMaterial(String),

    #[error("duplicate finish id: {0}")]
    DuplicateFinish(String),

    #[error("no finish entry for category {0}")]
    MissingCategory(FinishCategory),

    #[error("expected exactly one custom material, found {0}")]
    CustomMaterialCount(usize),

    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of catalog data
pub trait CatalogProvider: Send + Sync {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// One configurator tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTab {
    #[serde(rename = "id")]
    pub category: FinishCategory,
    pub label: String,
}

/// Validated catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    materials: Vec<MaterialOption>,
    finishes: Vec<FinishOption>,
}

/// Unvalidated wire form
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    materials: Vec<MaterialOption>,
    finishes: Vec<FinishOption>,
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = CatalogDocument::deserialize(deserializer)?;
        Catalog::new(doc.materials, doc.finishes).map_err(serde::de::Error::custom)
    }
}

impl Catalog {
    pub fn new(
        materials: Vec<MaterialOption>,
        finishes: Vec<FinishOption>,
    ) -> Result<Self, CatalogError> {
        if materials.is_empty() {
            return Err(CatalogError::NoMaterials);
        }
        if finishes.is_empty() {
            return Err(CatalogError::NoFinishes);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = materials.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(CatalogError::DuplicateMaterial(dup.id.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = finishes.iter().find(|f| !seen.insert(f.id.as_str())) {
            return Err(CatalogError::DuplicateFinish(dup.id.clone()));
        }

        if let Some(missing) = FinishCategory::ALL
            .into_iter()
            .find(|c| !finishes.iter().any(|f| f.category == *c))
        {
            return Err(CatalogError::MissingCategory(missing));
        }

        let custom_count = materials.iter().filter(|m| m.is_custom).count();
        if custom_count != 1 {
            return Err(CatalogError::CustomMaterialCount(custom_count));
        }

        Ok(Self {
            materials,
            finishes,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(materials: Vec<MaterialOption>, finishes: Vec<FinishOption>) -> Self {
        Self {
            materials,
            finishes,
        }
    }

    /// Built-in catalog of the workshop
    pub fn standard() -> Self {
        StandardCatalog.build()
    }

    pub fn materials(&self) -> &[MaterialOption] {
        &self.materials
    }

    pub fn finishes(&self) -> &[FinishOption] {
        &self.finishes
    }

    pub fn material(&self, id: &str) -> Option<&MaterialOption> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn finish(&self, id: &str) -> Option<&FinishOption> {
        self.finishes.iter().find(|f| f.id == id)
    }

    /// Default material (catalog position 0)
    pub fn default_material(&self) -> &MaterialOption {
        &self.materials[0]
    }

    /// Default finish (catalog position 0)
    pub fn default_finish(&self) -> &FinishOption {
        &self.finishes[0]
    }

    /// First finish of a category, in catalog order
    pub fn first_in_category(&self, category: FinishCategory) -> Option<&FinishOption> {
        self.finishes.iter().find(|f| f.category == category)
    }

    /// Swatches shown under a tab
    ///
    /// Catalog order is preserved. `none` and `custom` render no swatches.
    pub fn visible_finish_options(&self, category: FinishCategory) -> Vec<&FinishOption> {
        if !category.is_swatch_bearing() {
            return Vec::new();
        }
        self.finishes
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Tabs in fixed order, labelled from the first entry of each category
    pub fn category_tabs(&self) -> Vec<CategoryTab> {
        FinishCategory::ALL
            .into_iter()
            .map(|category| CategoryTab {
                category,
                label: self
                    .first_in_category(category)
                    .map(|f| f.category_name.clone())
                    .unwrap_or_else(|| category.as_str().to_string()),
            })
            .collect()
    }
}

/// Catalog loaded from a JSON document (`{"materials": [...], "finishes": [...]}`)
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let doc: CatalogDocument = serde_json::from_str(&raw)?;
        Catalog::new(doc.materials, doc.finishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(options: &[&FinishOption]) -> Vec<String> {
        options.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_visible_options_keep_catalog_order() {
        let catalog = Catalog::standard();
        assert_eq!(
            ids(&catalog.visible_finish_options(FinishCategory::PlushFabric)),
            ["v_red", "v_blue", "v_black"]
        );
        assert_eq!(
            ids(&catalog.visible_finish_options(FinishCategory::GenuineLeather)),
            ["l_black", "l_brown"]
        );
        for category in FinishCategory::ALL.into_iter().filter(|c| c.is_swatch_bearing()) {
            assert!(
                catalog
                    .visible_finish_options(category)
                    .iter()
                    .all(|f| f.category == category)
            );
        }
    }

    #[test]
    fn test_no_swatches_for_none_and_custom() {
        let catalog = Catalog::standard();
        assert!(catalog.visible_finish_options(FinishCategory::NoFinish).is_empty());
        assert!(catalog.visible_finish_options(FinishCategory::Custom).is_empty());
    }

    #[test]
    fn test_category_tabs() {
        let tabs = Catalog::standard().category_tabs();
        let labels: Vec<_> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Бархат",
                "Натур. Кожа",
                "Эко-Кожа",
                "Алькантара",
                "Без отделки",
                "Свой вариант"
            ]
        );
        assert_eq!(tabs[0].category, FinishCategory::PlushFabric);
    }

    #[test]
    fn test_rejects_missing_category() {
        let catalog = Catalog::standard();
        let finishes: Vec<_> = catalog
            .finishes()
            .iter()
            .filter(|f| f.category != FinishCategory::SuedeLikeSynthetic)
            .cloned()
            .collect();
        let err = Catalog::new(catalog.materials().to_vec(), finishes).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingCategory(FinishCategory::SuedeLikeSynthetic)
        ));
    }

    #[test]
    fn test_rejects_second_custom_material() {
        let catalog = Catalog::standard();
        let mut materials = catalog.materials().to_vec();
        materials.push(MaterialOption::new("walnut", "Орех", "#5c4033", "", 0.4).custom());
        let err = Catalog::new(materials, catalog.finishes().to_vec()).unwrap_err();
        assert!(matches!(err, CatalogError::CustomMaterialCount(2)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let catalog = Catalog::standard();
        let mut finishes = catalog.finishes().to_vec();
        finishes.push(finishes[0].clone());
        let err = Catalog::new(catalog.materials().to_vec(), finishes).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateFinish(id) if id == "v_red"));
    }

    #[test]
    fn test_rejects_empty_lists() {
        assert!(matches!(
            Catalog::new(Vec::new(), Catalog::standard().finishes().to_vec()),
            Err(CatalogError::NoMaterials)
        ));
        assert!(matches!(
            Catalog::new(Catalog::standard().materials().to_vec(), Vec::new()),
            Err(CatalogError::NoFinishes)
        ));
    }

    #[test]
    fn test_json_file_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&Catalog::standard()).unwrap()).unwrap();

        let loaded = JsonFileCatalog::new(&path).load().unwrap();
        assert_eq!(loaded, Catalog::standard());

        std::fs::write(&path, r#"{"materials": [], "finishes": []}"#).unwrap();
        assert!(matches!(
            JsonFileCatalog::new(&path).load(),
            Err(CatalogError::NoMaterials)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = JsonFileCatalog::new("/nonexistent/catalog.json").load().unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
