use crate::calc::{self, Resolution};
use crate::catalog::Catalog;
use crate::models::{Category, Point, ReferenceFrame};
use crate::viewport::ViewportTransform;

/// Direction and distance readouts for the surrounding UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuidanceResult {
    /// Needle rotation in degrees; 0 when compass mode is off.
    pub bearing_degrees: f64,
    pub distance_from_user: u32,
    pub distance_from_compass: u32,
    /// Id of the location nearest the user, if any.
    pub user_target: Option<String>,
    /// Id of the location nearest the viewport center, if compass mode is on.
    pub compass_target: Option<String>,
}

impl GuidanceResult {
    pub fn is_active(&self) -> bool {
        self.user_target.is_some() || self.compass_target.is_some()
    }

    /// The distance bubble is only worth showing for a non-zero distance.
    pub fn show_user_distance(&self) -> bool {
        self.distance_from_user > 0
    }

    pub fn show_compass_distance(&self) -> bool {
        self.distance_from_compass > 0
    }
}

/// Inputs the guidance readouts depend on.
#[derive(Debug, Clone, Copy)]
pub struct GuidanceInputs<'a> {
    pub catalog: &'a Catalog,
    pub category: Option<Category>,
    pub compass_enabled: bool,
    pub viewport: &'a ViewportTransform,
    pub user_position: Point,
    pub meters_per_pixel: f64,
}

impl<'a> GuidanceInputs<'a> {
    /// Nearest location of the selected category seen from `frame`.
    ///
    /// The user frame never resolves to a location standing exactly on the
    /// user position.
    pub fn resolve(&self, frame: ReferenceFrame) -> Option<Resolution<'a>> {
        let category = self.category?;
        let candidates = self.catalog.by_category(category);
        let (reference, exclude) = match frame {
            ReferenceFrame::FixedUser => (self.user_position, Some(self.user_position)),
            ReferenceFrame::ViewportCenter => (self.viewport.viewport_center_in_map_space()?, None),
        };
        calc::resolve(candidates, reference, exclude, self.meters_per_pixel)
    }
}

/// Recompute every readout from the current state.
///
/// A frame that resolves to nothing reports zero rather than keeping a
/// previous value.
pub fn compute(inputs: &GuidanceInputs<'_>) -> GuidanceResult {
    if inputs.category.is_none() {
        return GuidanceResult::default();
    }

    let mut result = GuidanceResult::default();
    if let Some(user) = inputs.resolve(ReferenceFrame::FixedUser) {
        result.distance_from_user = user.meters;
        result.user_target = Some(user.location.id.clone());
    }

    if inputs.compass_enabled {
        if let Some(compass) = inputs.resolve(ReferenceFrame::ViewportCenter) {
            result.bearing_degrees = compass.needle_degrees();
            result.distance_from_compass = compass.meters;
            result.compass_target = Some(compass.location.id.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Size};
    use crate::viewport::ClampPolicy;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Location::new("home", 100.0, 100.0, Category::Food, "Home Kiosk"),
            Location::new("east", 110.0, 100.0, Category::Food, "East Kiosk"),
            Location::new("south", 100.0, 300.0, Category::Show, "Stage"),
        ])
        .unwrap()
    }

    fn viewport() -> ViewportTransform {
        let mut vt = ViewportTransform::new(Size::new(1000.0, 1000.0), ClampPolicy::Edge);
        vt.measure(200.0, 200.0);
        vt
    }

    fn inputs<'a>(
        catalog: &'a Catalog,
        viewport: &'a ViewportTransform,
        category: Option<Category>,
        compass: bool,
    ) -> GuidanceInputs<'a> {
        GuidanceInputs {
            catalog,
            category,
            compass_enabled: compass,
            viewport,
            user_position: Point::new(100.0, 100.0),
            meters_per_pixel: 1.5,
        }
    }

    #[test]
    fn test_no_category_is_inactive() {
        let cat = catalog();
        let vt = viewport();
        let g = compute(&inputs(&cat, &vt, None, true));
        assert_eq!(g, GuidanceResult::default());
        assert!(!g.is_active());
    }

    #[test]
    fn test_user_frame_skips_coincident_location() {
        let cat = catalog();
        let vt = viewport();
        let g = compute(&inputs(&cat, &vt, Some(Category::Food), false));
        assert_eq!(g.user_target.as_deref(), Some("east"));
        assert_eq!(g.distance_from_user, 15);
        assert_eq!(g.bearing_degrees, 0.0);
        assert_eq!(g.distance_from_compass, 0);
    }

    #[test]
    fn test_compass_frame_does_not_exclude() {
        let cat = catalog();
        let mut vt = viewport();
        // Center (100, 100) sits on "home".
        vt.set_offset(0.0, 0.0);
        let g = compute(&inputs(&cat, &vt, Some(Category::Food), true));
        assert_eq!(g.compass_target.as_deref(), Some("home"));
        assert_eq!(g.distance_from_compass, 0);
        assert!(!g.show_compass_distance());
    }

    #[test]
    fn test_compass_bearing_points_south() {
        let cat = catalog();
        let vt = viewport();
        let g = compute(&inputs(&cat, &vt, Some(Category::Show), true));
        assert_eq!(g.compass_target.as_deref(), Some("south"));
        assert_eq!(g.distance_from_compass, 300);
        assert!((g.bearing_degrees - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_candidates_clear_distance() {
        let cat = catalog();
        let vt = viewport();
        let g = compute(&inputs(&cat, &vt, Some(Category::Restroom), true));
        assert_eq!(g.distance_from_user, 0);
        assert_eq!(g.distance_from_compass, 0);
        assert!(!g.show_user_distance());
    }

    #[test]
    fn test_unmeasured_viewport_has_no_compass_readout() {
        let cat = catalog();
        let vt = ViewportTransform::new(Size::new(1000.0, 1000.0), ClampPolicy::Edge);
        let g = compute(&inputs(&cat, &vt, Some(Category::Show), true));
        assert_eq!(g.distance_from_user, 300);
        assert_eq!(g.distance_from_compass, 0);
        assert!(g.compass_target.is_none());
    }
}
