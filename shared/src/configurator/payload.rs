//! Order payload derivation

use serde::{Deserialize, Serialize};

use super::relevance::is_relevant;
use super::{ConfigField, Configuration};
use crate::models::{FinishCategory, FinishOption, MaterialOption};

/// Finish label used when the customer describes the lining themselves
pub const CUSTOM_FINISH_LABEL: &str = "Индивидуальная отделка";

/// Flattened configuration sent to order creation
///
/// Optional fields are omitted from JSON when they do not apply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailPayload {
    pub wood: String,
    /// Finish category label
    pub interior: String,
    /// Resolved finish name
    pub finish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_interior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leather_animal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    pub lodgement: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varnish: Option<bool>,
}

impl OrderDetailPayload {
    /// Configuration fields carried by this payload
    pub fn active_fields(&self) -> Vec<ConfigField> {
        let mut fields = vec![ConfigField::Lodgement];
        if self.custom_interior.is_some() {
            fields.push(ConfigField::CustomInterior);
        }
        if self.leather_animal.is_some() {
            fields.push(ConfigField::LeatherAnimal);
        }
        if self.custom_color.is_some() {
            fields.push(ConfigField::CustomColor);
        }
        if self.varnish.is_some() {
            fields.push(ConfigField::Varnish);
        }
        fields.sort();
        fields
    }
}

/// Derive the order payload from a selection
///
/// Total: every combination of catalog entries and configuration yields a
/// payload. Options irrelevant to the finish category are dropped here, so
/// stale text from another tab never reaches an order.
pub fn build_order_payload(
    material: &MaterialOption,
    finish: &FinishOption,
    config: &Configuration,
) -> OrderDetailPayload {
    let category = finish.category;
    let relevant = |field| is_relevant(category, field);

    let wood = if material.is_custom {
        config.custom_wood.clone()
    } else {
        material.name.clone()
    };

    let finish_name = match category {
        FinishCategory::Custom => CUSTOM_FINISH_LABEL.to_string(),
        _ => finish.name.clone(),
    };

    OrderDetailPayload {
        wood,
        interior: finish.category_name.clone(),
        finish: finish_name,
        custom_interior: relevant(ConfigField::CustomInterior)
            .then(|| config.custom_interior.clone()),
        leather_animal: relevant(ConfigField::LeatherAnimal)
            .then(|| config.leather_animal.clone()),
        custom_color: trimmed_color(config).filter(|_| relevant(ConfigField::CustomColor)),
        lodgement: config.lodgement,
        varnish: relevant(ConfigField::Varnish).then_some(config.varnish),
    }
}

/// Colour wish, when the customer actually typed one
pub(super) fn trimmed_color(config: &Configuration) -> Option<String> {
    let color = config.custom_color.trim();
    (!color.is_empty()).then(|| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::configurator::{ConfigUpdate, Selection};
    use std::sync::Arc;

    fn selection() -> Selection {
        Selection::new(Arc::new(Catalog::standard()))
    }

    #[test]
    fn test_default_selection_payload() {
        let mut s = selection();
        s.update_configuration(ConfigUpdate::Lodgement(true));

        let json = serde_json::to_value(s.order_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "wood": "Благородный Дуб",
                "interior": "Бархат",
                "finish": "Красный Бархат",
                "lodgement": true
            })
        );
    }

    #[test]
    fn test_leather_animal_dropped_after_switch() {
        let mut s = selection();
        s.set_category(FinishCategory::GenuineLeather);
        s.update_configuration(ConfigUpdate::LeatherAnimal("Python".to_string()));
        assert_eq!(s.order_payload().leather_animal.as_deref(), Some("Python"));

        s.set_category(FinishCategory::PlushFabric);
        let json = serde_json::to_value(s.order_payload()).unwrap();
        assert!(json.get("leatherAnimal").is_none());
    }

    #[test]
    fn test_leather_animal_present_even_empty() {
        let mut s = selection();
        s.set_category(FinishCategory::GenuineLeather);
        assert_eq!(s.order_payload().leather_animal.as_deref(), Some(""));
    }

    #[test]
    fn test_custom_material_with_empty_wood() {
        let mut s = selection();
        s.set_material("custom").unwrap();
        assert_eq!(s.order_payload().wood, "");

        s.update_configuration(ConfigUpdate::CustomWood("Карельская береза".to_string()));
        assert_eq!(s.order_payload().wood, "Карельская береза");
    }

    #[test]
    fn test_custom_wood_ignored_for_standard_material() {
        let mut s = selection();
        s.update_configuration(ConfigUpdate::CustomWood("Орех".to_string()));
        assert_eq!(s.order_payload().wood, "Благородный Дуб");
    }

    #[test]
    fn test_varnish_only_for_bare_interior() {
        let mut s = selection();
        s.set_category(FinishCategory::NoFinish);
        s.update_configuration(ConfigUpdate::Varnish(true));
        assert_eq!(s.order_payload().varnish, Some(true));

        s.set_category(FinishCategory::PlushFabric);
        let json = serde_json::to_value(s.order_payload()).unwrap();
        assert!(json.get("varnish").is_none());
    }

    #[test]
    fn test_varnish_false_still_present_for_bare_interior() {
        let mut s = selection();
        s.set_category(FinishCategory::NoFinish);
        let json = serde_json::to_value(s.order_payload()).unwrap();
        assert_eq!(json["varnish"], false);
    }

    #[test]
    fn test_lodgement_in_every_category() {
        for lodgement in [false, true] {
            for category in FinishCategory::ALL {
                let mut s = selection();
                s.update_configuration(ConfigUpdate::Lodgement(lodgement));
                s.set_category(category);
                let json = serde_json::to_value(s.order_payload()).unwrap();
                assert_eq!(json["lodgement"], lodgement, "category {category}");
            }
        }
    }

    #[test]
    fn test_custom_color_trimmed_any_category() {
        let mut s = selection();
        s.update_configuration(ConfigUpdate::CustomColor("  изумрудный ".to_string()));
        for category in FinishCategory::ALL {
            s.set_category(category);
            assert_eq!(s.order_payload().custom_color.as_deref(), Some("изумрудный"));
        }

        s.update_configuration(ConfigUpdate::CustomColor("   ".to_string()));
        assert!(s.order_payload().custom_color.is_none());
    }

    #[test]
    fn test_custom_finish() {
        let mut s = selection();
        s.set_category(FinishCategory::Custom);
        s.update_configuration(ConfigUpdate::CustomInterior("Шелк с вышивкой".to_string()));

        let payload = s.order_payload();
        assert_eq!(payload.interior, "Свой вариант");
        assert_eq!(payload.finish, CUSTOM_FINISH_LABEL);
        assert_eq!(payload.custom_interior.as_deref(), Some("Шелк с вышивкой"));

        s.set_category(FinishCategory::SuedeLikeSynthetic);
        assert!(s.order_payload().custom_interior.is_none());
    }

    #[test]
    fn test_active_fields_follow_relevance() {
        let mut s = selection();
        s.set_category(FinishCategory::GenuineLeather);
        assert_eq!(
            s.order_payload().active_fields(),
            [ConfigField::LeatherAnimal, ConfigField::Lodgement]
        );
    }
}
