use crate::models::plant::{PlantSummary, PlantType};

fn plant(
    id: i64,
    common_name: &str,
    scientific_name: &str,
    plant_type: PlantType,
    spacing_inches: f64,
    sun: &str,
    water: &str,
) -> PlantSummary {
    PlantSummary {
        id,
        common_name: common_name.into(),
        scientific_name: Some(scientific_name.into()),
        plant_type: Some(plant_type),
        spacing_inches: Some(spacing_inches),
        sun_requirement: Some(sun.into()),
        water_needs: Some(water.into()),
        image_url: None,
        source: "seed".into(),
    }
}

/// Built-in plant catalogue used to seed the in-memory store.
/// Spacings are chosen to exercise footprints of 1 to 4 cells.
pub fn seed_plants() -> Vec<PlantSummary> {
    vec![
        plant(1, "Tomato", "Solanum lycopersicum", PlantType::Vegetable, 24.0, "full sun", "moderate"),
        plant(2, "Carrot", "Daucus carota", PlantType::Vegetable, 3.0, "full sun", "moderate"),
        plant(3, "Lettuce", "Lactuca sativa", PlantType::Vegetable, 10.0, "partial shade", "high"),
        plant(4, "Basil", "Ocimum basilicum", PlantType::Herb, 12.0, "full sun", "moderate"),
        plant(5, "Rosemary", "Salvia rosmarinus", PlantType::Herb, 24.0, "full sun", "low"),
        plant(6, "Zucchini", "Cucurbita pepo", PlantType::Vegetable, 36.0, "full sun", "high"),
        plant(7, "Bell Pepper", "Capsicum annuum", PlantType::Vegetable, 18.0, "full sun", "moderate"),
        plant(8, "Strawberry", "Fragaria ananassa", PlantType::Fruit, 12.0, "full sun", "moderate"),
        plant(9, "Blueberry", "Vaccinium corymbosum", PlantType::Shrub, 48.0, "full sun", "high"),
        plant(10, "Marigold", "Tagetes erecta", PlantType::Annual, 10.0, "full sun", "low"),
        plant(11, "Lavender", "Lavandula angustifolia", PlantType::Perennial, 24.0, "full sun", "low"),
        plant(12, "Garlic", "Allium sativum", PlantType::Bulb, 5.0, "full sun", "low"),
        plant(13, "Sunflower", "Helianthus annuus", PlantType::Flower, 18.0, "full sun", "moderate"),
        plant(14, "Dwarf Apple", "Malus domestica", PlantType::Tree, 48.0, "full sun", "moderate"),
        plant(15, "Thyme", "Thymus vulgaris", PlantType::Herb, 9.0, "full sun", "low"),
        plant(16, "Cucumber", "Cucumis sativus", PlantType::Vegetable, 36.0, "full sun", "high"),
    ]
}

/// Name + type filter and pagination over the catalogue, the shape the
/// picker consumes. `page` is 1-based.
pub fn search_plants(
    catalog: &[PlantSummary],
    name: Option<&str>,
    cycle: Option<PlantType>,
    page: usize,
    per_page: usize,
) -> (Vec<PlantSummary>, usize) {
    let name_lower = name.map(str::to_lowercase);
    let filtered: Vec<&PlantSummary> = catalog
        .iter()
        .filter(|p| {
            if let Some(ref needle) = name_lower {
                if !p.common_name.to_lowercase().contains(needle) {
                    return false;
                }
            }
            if let Some(cycle) = cycle {
                if p.plant_type != Some(cycle) {
                    return false;
                }
            }
            true
        })
        .collect();

    let total = filtered.len();
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();
    (items, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let catalog = seed_plants();
        let (items, total) = search_plants(&catalog, Some("TOM"), None, 1, 12);
        assert_eq!(total, 1);
        assert_eq!(items[0].common_name, "Tomato");
    }

    #[test]
    fn test_cycle_filter_narrows_to_one_type() {
        let catalog = seed_plants();
        let (items, _) = search_plants(&catalog, None, Some(PlantType::Herb), 1, 12);
        assert!(!items.is_empty());
        assert!(items.iter().all(|p| p.plant_type == Some(PlantType::Herb)));
    }

    #[test]
    fn test_pagination_slices_without_losing_total() {
        let catalog = seed_plants();
        let (page1, total) = search_plants(&catalog, None, None, 1, 5);
        let (page2, _) = search_plants(&catalog, None, None, 2, 5);
        assert_eq!(total, catalog.len());
        assert_eq!(page1.len(), 5);
        assert_eq!(page2.len(), 5);
        assert_ne!(page1[0].id, page2[0].id);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let catalog = seed_plants();
        let (items, total) = search_plants(&catalog, None, None, 99, 12);
        assert!(items.is_empty());
        assert_eq!(total, catalog.len());
    }
}
