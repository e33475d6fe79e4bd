//! Built-in workshop catalog

use super::{Catalog, CatalogError, CatalogProvider};
use crate::models::{FinishCategory, FinishOption, MaterialOption};

/// The workshop's standard woods and linings
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl StandardCatalog {
    pub(super) fn build(&self) -> Catalog {
        Catalog {
            materials: materials(),
            finishes: finishes(),
        }
    }
}

impl CatalogProvider for StandardCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(materials(), finishes())
    }
}

fn materials() -> Vec<MaterialOption> {
    vec![
        MaterialOption::new(
            "oak",
            "Благородный Дуб",
            "#8B5A2B",
            "Классика столярного дела. Твердый, долговечный, с красивой текстурой. Символ надежности.",
            0.6,
        ),
        MaterialOption::new(
            "pine",
            "Карельская Сосна",
            "#D4B483",
            "Теплый оттенок и выраженный природный рисунок. Аромат хвои и уютная текстура.",
            0.55,
        ),
        MaterialOption::new(
            "ash",
            "Дальневосточный Ясень",
            "#C0B3A0",
            "По прочности не уступает дубу, но обладает более светлым и \"воздушным\" рисунком волокон.",
            0.7,
        ),
        MaterialOption::new(
            "beech",
            "Карпатский Бук",
            "#A67B5B",
            "Однородная текстура без ярко выраженных колец. Гладкий, твердый, идеально шлифуется.",
            0.5,
        ),
        MaterialOption::new(
            "custom",
            "Своя порода",
            "#57534e",
            "Укажите желаемую породу дерева, и мы найдем её для вашего проекта.",
            0.2,
        )
        .custom(),
    ]
}

fn finishes() -> Vec<FinishOption> {
    use FinishCategory::*;

    let swatch = |category: FinishCategory, label: &str| {
        let label = label.to_string();
        move |id: &str, name: &str, color: &str| {
            FinishOption::new(id, name, category, label.clone(), color)
        }
    };
    let velvet = swatch(PlushFabric, "Бархат");
    let leather = swatch(GenuineLeather, "Натур. Кожа");
    let eco = swatch(SyntheticLeather, "Эко-Кожа");
    let alcantara = swatch(SuedeLikeSynthetic, "Алькантара");

    vec![
        velvet("v_red", "Красный Бархат", "#7f1d1d"),
        velvet("v_blue", "Синий Бархат", "#1e3a8a"),
        velvet("v_black", "Черный Бархат", "#1a1a1a"),
        leather("l_black", "Черная Кожа", "#171717"),
        leather("l_brown", "Коричневая Кожа", "#5D4037"),
        eco("el_beige", "Бежевая Эко", "#d4c4a8"),
        eco("el_black", "Черная Эко", "#1c1917"),
        alcantara("a_grey", "Серая Алькантара", "#374151"),
        alcantara("a_black", "Черная Алькантара", "#0f172a"),
        FinishOption::new("none", "Без отделки", NoFinish, "Без отделки", "#292524"),
        FinishOption::new("custom", "Свой материал", Custom, "Свой вариант", "#44403c"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let loaded = StandardCatalog.load().unwrap();
        assert_eq!(loaded, Catalog::standard());
        assert_eq!(loaded.materials().len(), 5);
        assert_eq!(loaded.finishes().len(), 11);
    }

    #[test]
    fn test_defaults() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.default_material().id, "oak");
        assert_eq!(catalog.default_finish().id, "v_red");
        assert!(catalog.material("custom").is_some_and(|m| m.is_custom));
    }
}
