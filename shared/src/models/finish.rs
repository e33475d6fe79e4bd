//! Finish (interior lining) Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interior finish category
///
/// Wire ids match the site's stored documents (`velvet`, `leather`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishCategory {
    /// Plush fabric (velvet)
    #[serde(rename = "velvet")]
    PlushFabric,
    /// Genuine leather
    #[serde(rename = "leather")]
    GenuineLeather,
    /// Synthetic (eco) leather
    #[serde(rename = "ecoleather")]
    SyntheticLeather,
    /// Suede-like synthetic (alcantara)
    #[serde(rename = "alcantara")]
    SuedeLikeSynthetic,
    /// Bare wood inside, optionally varnished
    #[serde(rename = "none")]
    NoFinish,
    /// Customer describes the lining in free text
    #[serde(rename = "custom")]
    Custom,
}

impl FinishCategory {
    /// Tab order of the configurator
    pub const ALL: [FinishCategory; 6] = [
        FinishCategory::PlushFabric,
        FinishCategory::GenuineLeather,
        FinishCategory::SyntheticLeather,
        FinishCategory::SuedeLikeSynthetic,
        FinishCategory::NoFinish,
        FinishCategory::Custom,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlushFabric => "velvet",
            Self::GenuineLeather => "leather",
            Self::SyntheticLeather => "ecoleather",
            Self::SuedeLikeSynthetic => "alcantara",
            Self::NoFinish => "none",
            Self::Custom => "custom",
        }
    }

    /// Categories that render colour swatches (everything except `none`/`custom`)
    pub const fn is_swatch_bearing(&self) -> bool {
        !matches!(self, Self::NoFinish | Self::Custom)
    }
}

impl fmt::Display for FinishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown finish category string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown finish category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for FinishCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Interior finish option (one swatch, or the sentinel of `none`/`custom`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishOption {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: FinishCategory,
    /// Human-readable category label (e.g. "Бархат")
    #[serde(rename = "typeName")]
    pub category_name: String,
    /// Base fill colour (`#rrggbb`)
    pub color: String,
}

impl FinishOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: FinishCategory,
        category_name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            category_name: category_name.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_ids() {
        let json = serde_json::to_string(&FinishCategory::SuedeLikeSynthetic).unwrap();
        assert_eq!(json, "\"alcantara\"");

        let parsed: FinishCategory = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, FinishCategory::NoFinish);
    }

    #[test]
    fn test_category_from_str() {
        for category in FinishCategory::ALL {
            assert_eq!(category.as_str().parse::<FinishCategory>(), Ok(category));
        }
        assert!("silk".parse::<FinishCategory>().is_err());
    }

    #[test]
    fn test_swatch_bearing() {
        let swatch: Vec<_> = FinishCategory::ALL
            .into_iter()
            .filter(|c| c.is_swatch_bearing())
            .collect();
        assert_eq!(swatch.len(), 4);
        assert!(!FinishCategory::NoFinish.is_swatch_bearing());
        assert!(!FinishCategory::Custom.is_swatch_bearing());
    }

    #[test]
    fn test_finish_option_uses_site_field_names() {
        let option = FinishOption::new(
            "l_black",
            "Черная Кожа",
            FinishCategory::GenuineLeather,
            "Натур. Кожа",
            "#171717",
        );
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["type"], "leather");
        assert_eq!(json["typeName"], "Натур. Кожа");
    }
}
