use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::models::{Category, Location};

/// Immutable registry of the park's points of interest.
///
/// Keeps declaration order and a per-category index so filtered lookups only
/// touch matching locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct Catalog {
    locations: Vec<Location>,
    by_category: [Vec<usize>; 5],
}

impl Catalog {
    pub fn new(locations: Vec<Location>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for loc in &locations {
            if !seen.insert(loc.id.as_str()) {
                return Err(ConfigError::DuplicateLocation(loc.id.clone()));
            }
        }
        Ok(Self::indexed(locations))
    }

    /// Build the category index without checking ids; for built-in tables.
    pub(crate) fn indexed(locations: Vec<Location>) -> Self {
        let mut by_category: [Vec<usize>; 5] = Default::default();
        for (i, loc) in locations.iter().enumerate() {
            by_category[loc.category.index()].push(i);
        }

        Catalog {
            locations,
            by_category,
        }
    }

    /// Parse a JSON array of locations.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Self::new(locations)
    }

    /// Every location in declaration order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    /// Locations tagged `category`, in declaration order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Location> + Clone + '_ {
        self.by_category[category.index()]
            .iter()
            .map(move |&i| &self.locations[i])
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl TryFrom<Vec<Location>> for Catalog {
    type Error = ConfigError;

    fn try_from(locations: Vec<Location>) -> Result<Self, Self::Error> {
        Catalog::new(locations)
    }
}

impl From<Catalog> for Vec<Location> {
    fn from(catalog: Catalog) -> Self {
        catalog.locations
    }
}

macro_rules! locations {
    ($(($id:literal, $x:literal, $y:literal, $cat:ident, $name:literal)),* $(,)?) => {
        vec![$(Location::new($id, $x, $y, Category::$cat, $name)),*]
    };
}

/// Points of interest on the photographic park map (1800x1200).
pub fn photo_map_locations() -> Vec<Location> {
    locations![
        ("attr1", 375.0, 450.0, Attraction, "SpeedMonster"),
        ("attr2", 825.0, 375.0, Attraction, "Thundercoaster"),
        ("attr3", 900.0, 675.0, Attraction, "Loopen"),
        ("attr4", 525.0, 825.0, Attraction, "VikingRaft"),
        ("attr5", 1350.0, 600.0, Attraction, "StorBåt"),
        ("attr6", 675.0, 300.0, Attraction, "Pariserhjul"),
        ("food1", 975.0, 450.0, Food, "Hovedrestaurant"),
        ("food2", 600.0, 675.0, Food, "Restaurant Vest"),
        ("food3", 1200.0, 525.0, Food, "Burger Bar"),
        ("food4", 1125.0, 600.0, Food, "Kiosk Sentrum"),
        ("food5", 450.0, 600.0, Food, "Café Vest"),
        ("food6", 900.0, 825.0, Food, "Iskiosk"),
        ("wc1", 450.0, 300.0, Restroom, "WC Nord"),
        ("wc2", 1050.0, 525.0, Restroom, "WC Sentrum"),
        ("wc3", 750.0, 900.0, Restroom, "WC Sør"),
        ("wc4", 1275.0, 675.0, Restroom, "WC Øst"),
        ("aid1", 900.0, 300.0, FirstAid, "Førstehjelp Nord"),
        ("aid2", 750.0, 1000.0, FirstAid, "Førstehjelp Sør"),
        ("show1", 975.0, 525.0, Show, "Hovedscene"),
        ("show2", 1050.0, 750.0, Show, "Amfiteater"),
    ]
}

/// Points of interest on the illustrated park map (800x1200).
pub fn illustrated_map_locations() -> Vec<Location> {
    locations![
        ("attr1", 200.0, 250.0, Attraction, "Speedmonster"),
        ("attr2", 400.0, 400.0, Attraction, "Thundercoaster"),
        ("attr3", 600.0, 300.0, Attraction, "Loopen"),
        ("attr4", 300.0, 650.0, Attraction, "SuperSplash"),
        ("attr5", 500.0, 800.0, Attraction, "Pariserhjul"),
        ("attr6", 350.0, 950.0, Attraction, "VikingRaft"),
        ("food1", 250.0, 450.0, Food, "Burger Bar"),
        ("food2", 550.0, 550.0, Food, "Pizzeria"),
        ("food3", 400.0, 750.0, Food, "Iskiosk"),
        ("food4", 200.0, 1000.0, Food, "Café"),
        ("wc1", 150.0, 350.0, Restroom, "WC Nord"),
        ("wc2", 650.0, 450.0, Restroom, "WC Øst"),
        ("wc3", 300.0, 850.0, Restroom, "WC Sør"),
        ("wc4", 500.0, 600.0, Restroom, "WC Sentrum"),
        ("aid1", 400.0, 200.0, FirstAid, "Førstehjelp Nord"),
        ("aid2", 450.0, 1050.0, FirstAid, "Førstehjelp Sør"),
        ("show1", 500.0, 350.0, Show, "Hovedscene"),
        ("show2", 600.0, 700.0, Show, "Amfiteater"),
    ]
}
