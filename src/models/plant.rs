use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

/// Growth-habit category, used for grid colouring and picker filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Vegetable,
    Herb,
    Tree,
    Shrub,
    Annual,
    Perennial,
    Bulb,
    Fruit,
    Flower,
}

/// Catalogue entry as returned by the plant search.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantSummary {
    pub id: i64,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub plant_type: Option<PlantType>,
    /// Recommended spacing between plants, in inches. Drives the grid footprint.
    pub spacing_inches: Option<f64>,
    pub sun_requirement: Option<String>,
    pub water_needs: Option<String>,
    pub image_url: Option<String>,
    pub source: String,
}

/// Query parameters for `GET /api/plants`.
/// `name` is a partial, case-insensitive match on the common name;
/// `cycle` narrows to a single plant type.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PlantQuery {
    pub name: Option<String>,
    pub cycle: Option<PlantType>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// One page of plant search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantPage {
    pub items: Vec<PlantSummary>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl PlantPage {
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            self.total.div_ceil(self.per_page)
        }
    }
}
