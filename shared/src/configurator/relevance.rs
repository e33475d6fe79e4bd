//! Category → option relevance table

use super::ConfigField::{self, *};
use crate::models::FinishCategory;

const SWATCH: &[ConfigField] = &[CustomColor, Lodgement];
const LEATHER: &[ConfigField] = &[CustomColor, LeatherAnimal, Lodgement];
const BARE: &[ConfigField] = &[CustomColor, Varnish, Lodgement];
const CUSTOM: &[ConfigField] = &[CustomColor, CustomInterior, Lodgement];

/// Options that apply under a finish category
///
/// `CustomWood` never appears here: it follows the material, not the finish.
pub fn relevant_fields(category: FinishCategory) -> &'static [ConfigField] {
    match category {
        FinishCategory::PlushFabric
        | FinishCategory::SyntheticLeather
        | FinishCategory::SuedeLikeSynthetic => SWATCH,
        FinishCategory::GenuineLeather => LEATHER,
        FinishCategory::NoFinish => BARE,
        FinishCategory::Custom => CUSTOM,
    }
}

pub fn is_relevant(category: FinishCategory, field: ConfigField) -> bool {
    relevant_fields(category).contains(&field)
}
