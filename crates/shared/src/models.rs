use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A point in map space or viewport space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "attraksjon")]
    Attraction,
    #[serde(alias = "mat")]
    Food,
    #[serde(alias = "wc")]
    Restroom,
    #[serde(alias = "forstehjelp")]
    FirstAid,
    Show,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Attraction,
        Category::Food,
        Category::Restroom,
        Category::FirstAid,
        Category::Show,
    ];

    /// Stable id used by the category selector.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Attraction => "attraction",
            Category::Food => "food",
            Category::Restroom => "restroom",
            Category::FirstAid => "firstaid",
            Category::Show => "show",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Attraction => 0,
            Category::Food => 1,
            Category::Restroom => 2,
            Category::FirstAid => 3,
            Category::Show => 4,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category id `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attraction" | "attraksjon" => Ok(Category::Attraction),
            "food" | "mat" => Ok(Category::Food),
            "restroom" | "wc" => Ok(Category::Restroom),
            "firstaid" | "forstehjelp" => Ok(Category::FirstAid),
            "show" => Ok(Category::Show),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A point of interest on the park map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub category: Category,
    pub name: String,
}

impl Location {
    pub fn new(id: &str, x: f64, y: f64, category: Category, name: &str) -> Self {
        Location {
            id: id.to_string(),
            x,
            y,
            category,
            name: name.to_string(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Where guidance distances and bearings are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    /// The simulated user position, fixed in map space.
    FixedUser,
    /// The map-space point currently under the center of the viewport.
    ViewportCenter,
}

/// Display flags for one location marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerState {
    pub highlighted: bool,
    /// Another category is active; render faded.
    pub dimmed: bool,
    /// Another category is active and the map hides inactive markers.
    pub hidden: bool,
    pub selected: bool,
}
