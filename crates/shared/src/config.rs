use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Catalog};
use crate::models::{Point, Size};
use crate::viewport::ClampPolicy;

/// Meters per map pixel used by both built-in maps.
pub const DEFAULT_METERS_PER_PIXEL: f64 = 1.5;

/// Pan limit of the illustrated map, in pixels from the resting position.
pub const ILLUSTRATED_MAX_PAN: f64 = 150.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse map profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate location id `{0}`")]
    DuplicateLocation(String),
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidMapSize { width: f64, height: f64 },
    #[error("meters per pixel must be positive, got {0}")]
    InvalidScale(f64),
    #[error("max pan must not be negative, got {0}")]
    InvalidMaxPan(f64),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that distinguishes one park map variant from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapProfile {
    pub name: String,
    /// URL of the artwork drawn under the markers.
    #[serde(default)]
    pub image: Option<String>,
    pub map_size: Size,
    pub clamp: ClampPolicy,
    #[serde(default = "default_meters_per_pixel")]
    pub meters_per_pixel: f64,
    /// Simulated user position; guidance from the user frame starts here.
    pub user_position: Point,
    #[serde(default)]
    pub entrance: Option<Point>,
    /// Hide markers outside the active category instead of fading them.
    #[serde(default)]
    pub hide_inactive: bool,
    pub locations: Catalog,
}

fn default_meters_per_pixel() -> f64 {
    DEFAULT_METERS_PER_PIXEL
}

impl MapProfile {
    /// The photographic map: 1800x1200, edge-to-edge scrolling.
    pub fn photo_map() -> Self {
        MapProfile {
            name: "Tusenfryd".to_string(),
            image: None,
            map_size: Size::new(1800.0, 1200.0),
            clamp: ClampPolicy::Edge,
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
            user_position: Point::new(650.0, 475.0),
            entrance: Some(Point::new(900.0, 1000.0)),
            hide_inactive: false,
            locations: Catalog::indexed(catalog::photo_map_locations()),
        }
    }

    /// The illustrated map: 800x1200 artwork panned around its resting
    /// position within a fixed radius.
    pub fn illustrated_map() -> Self {
        MapProfile {
            name: "Tusenfryd (illustrert)".to_string(),
            image: None,
            map_size: Size::new(800.0, 1200.0),
            clamp: ClampPolicy::Radius {
                max_pan: ILLUSTRATED_MAX_PAN,
            },
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
            user_position: Point::new(400.0, 600.0),
            entrance: None,
            hide_inactive: true,
            locations: Catalog::indexed(catalog::illustrated_map_locations()),
        }
    }

    /// Parse and validate a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let profile: MapProfile = serde_json::from_str(json)?;
        profile.validate()?;
        tracing::info!(
            name = %profile.name,
            locations = profile.locations.len(),
            "Loaded map profile"
        );
        Ok(profile)
    }

    /// Read a JSON profile from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Reject configurations the viewport math cannot work with.
    ///
    /// Locations outside the map rectangle are reported but accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.map_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidMapSize { width, height });
        }
        if !(self.meters_per_pixel > 0.0) {
            return Err(ConfigError::InvalidScale(self.meters_per_pixel));
        }
        if let ClampPolicy::Radius { max_pan } = self.clamp {
            if !(max_pan >= 0.0) {
                return Err(ConfigError::InvalidMaxPan(max_pan));
            }
        }
        for loc in self.locations.all() {
            if loc.x < 0.0 || loc.x >= width || loc.y < 0.0 || loc.y >= height {
                tracing::warn!(id = %loc.id, x = loc.x, y = loc.y, "Location lies outside the map");
            }
        }
        Ok(())
    }
}

impl Default for MapProfile {
    fn default() -> Self {
        Self::photo_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PROFILE_JSON: &str = r#"{
        "name": "Test Park",
        "mapSize": {"width": 400.0, "height": 300.0},
        "clamp": {"policy": "radius", "maxPan": 50.0},
        "userPosition": {"x": 100.0, "y": 100.0},
        "locations": [
            {"id": "s1", "x": 200.0, "y": 100.0, "category": "show", "name": "Stage"}
        ]
    }"#;

    #[test]
    fn test_built_in_profiles_validate() {
        assert!(MapProfile::photo_map().validate().is_ok());
        assert!(MapProfile::illustrated_map().validate().is_ok());
        assert_eq!(MapProfile::photo_map().locations.len(), 20);
        assert_eq!(MapProfile::illustrated_map().locations.len(), 18);
        // No artwork ships with the crate; the layer draws a plain backdrop.
        assert!(MapProfile::photo_map().image.is_none());
        assert!(MapProfile::illustrated_map().image.is_none());
        assert!(MapProfile::illustrated_map().hide_inactive);
        assert!(!MapProfile::photo_map().hide_inactive);
    }

    #[test]
    fn test_from_json_defaults_scale() {
        let profile = MapProfile::from_json(PROFILE_JSON).unwrap();
        assert_eq!(profile.name, "Test Park");
        assert!((profile.meters_per_pixel - DEFAULT_METERS_PER_PIXEL).abs() < 1e-9);
        assert_eq!(profile.clamp, ClampPolicy::Radius { max_pan: 50.0 });
        assert!(profile.entrance.is_none());
        assert!(profile.image.is_none());
        assert!(!profile.hide_inactive);
        assert_eq!(profile.locations.len(), 1);
    }

    #[test]
    fn test_profile_json_round_trip() {
        let profile = MapProfile::photo_map();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(MapProfile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn test_rejects_non_positive_map() {
        let json = PROFILE_JSON.replace("\"width\": 400.0", "\"width\": 0.0");
        assert!(matches!(
            MapProfile::from_json(&json),
            Err(ConfigError::InvalidMapSize { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_max_pan() {
        let json = PROFILE_JSON.replace("\"maxPan\": 50.0", "\"maxPan\": -5.0");
        assert!(matches!(MapProfile::from_json(&json), Err(ConfigError::InvalidMaxPan(_))));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut profile = MapProfile::photo_map();
        profile.meters_per_pixel = 0.0;
        assert!(matches!(profile.validate(), Err(ConfigError::InvalidScale(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = PROFILE_JSON.replace(
            r#"{"id": "s1", "x": 200.0, "y": 100.0, "category": "show", "name": "Stage"}"#,
            r#"{"id": "s1", "x": 200.0, "y": 100.0, "category": "show", "name": "Stage"},
               {"id": "s1", "x": 10.0, "y": 10.0, "category": "food", "name": "Kiosk"}"#,
        );
        assert!(MapProfile::from_json(&json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PROFILE_JSON.as_bytes()).unwrap();
        let profile = MapProfile::load(file.path()).unwrap();
        assert_eq!(profile.user_position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = MapProfile::load(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Io { path: p, .. } if *p == path));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
