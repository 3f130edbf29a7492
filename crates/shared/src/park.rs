use crate::calc;
use crate::config::MapProfile;
use crate::drag::{DragController, GestureEnd};
use crate::guidance::{self, GuidanceInputs, GuidanceResult};
use crate::models::{Category, Location, MarkerState, Point, UnknownCategory};
use crate::viewport::ViewportTransform;

/// Tap distance (map pixels) within which a marker counts as hit.
pub const TAP_SELECT_RADIUS: f64 = 30.0;

type Listener = Box<dyn FnMut(&GuidanceResult)>;

/// Owner of all interactive map state.
///
/// Each slice (category, compass flag, viewport, drag session, selected
/// location) is written only through the methods below. Changes that can
/// move the guidance readouts notify every subscriber with a fresh
/// [`GuidanceResult`].
pub struct ParkView {
    profile: MapProfile,
    viewport: ViewportTransform,
    drag: DragController,
    category: Option<Category>,
    compass_enabled: bool,
    selected_location: Option<String>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for ParkView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkView")
            .field("profile", &self.profile.name)
            .field("viewport", &self.viewport)
            .field("drag", &self.drag)
            .field("category", &self.category)
            .field("compass_enabled", &self.compass_enabled)
            .field("selected_location", &self.selected_location)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ParkView {
    pub fn new(profile: MapProfile) -> Self {
        let viewport = ViewportTransform::new(profile.map_size, profile.clamp);
        ParkView {
            profile,
            viewport,
            drag: DragController::new(),
            category: None,
            compass_enabled: false,
            selected_location: None,
            listeners: Vec::new(),
        }
    }

    pub fn profile(&self) -> &MapProfile {
        &self.profile
    }

    pub fn offset(&self) -> Point {
        self.viewport.offset()
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.category
    }

    pub fn compass_enabled(&self) -> bool {
        self.compass_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn selected_location(&self) -> Option<&Location> {
        let id = self.selected_location.as_deref()?;
        self.profile.locations.get(id)
    }

    /// Register a callback run after every guidance-relevant change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&GuidanceResult) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current readouts, computed from scratch.
    pub fn guidance(&self) -> GuidanceResult {
        guidance::compute(&GuidanceInputs {
            catalog: &self.profile.locations,
            category: self.category,
            compass_enabled: self.compass_enabled,
            viewport: &self.viewport,
            user_position: self.profile.user_position,
            meters_per_pixel: self.profile.meters_per_pixel,
        })
    }

    fn publish(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let result = self.guidance();
        for listener in &mut self.listeners {
            listener(&result);
        }
    }

    // --- Selection ---

    /// Apply the category selector's output: an id string or nothing.
    pub fn select_category(&mut self, id: Option<&str>) -> Result<(), UnknownCategory> {
        let category = id.map(str::parse::<Category>).transpose()?;
        self.set_category(category);
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        tracing::debug!(category = ?category, "Category selected");
        self.category = category;
        self.publish();
    }

    /// Select `category`, or clear it when it is already active.
    pub fn toggle_category(&mut self, category: Category) {
        if self.category == Some(category) {
            self.set_category(None);
        } else {
            self.set_category(Some(category));
        }
    }

    pub fn set_compass(&mut self, enabled: bool) {
        tracing::debug!(enabled, "Compass mode");
        self.compass_enabled = enabled;
        self.publish();
    }

    pub fn toggle_compass(&mut self) {
        self.set_compass(!self.compass_enabled);
    }

    /// Mark a location as selected (marker click). Unknown ids clear the
    /// selection.
    pub fn select_location(&mut self, id: Option<&str>) {
        self.selected_location = id
            .and_then(|id| self.profile.locations.get(id))
            .map(|loc| loc.id.clone());
    }

    // --- Viewport ---

    /// Record the container size. The first successful measurement centers
    /// the map on the user.
    pub fn measure_viewport(&mut self, width: f64, height: f64) {
        let first = !self.viewport.is_measured();
        self.viewport.measure(width, height);
        tracing::debug!(width, height, measured = self.viewport.is_measured(), "Viewport measured");
        if first && self.viewport.is_measured() {
            self.viewport.center_on(self.profile.user_position);
        }
        self.publish();
    }

    /// Pan so the user position is centered again.
    pub fn recenter(&mut self) {
        match self.viewport.center_on(self.profile.user_position) {
            Some(offset) => tracing::debug!(x = offset.x, y = offset.y, "Recentered on user"),
            None => tracing::debug!("Recenter skipped, viewport not measured"),
        }
        self.publish();
    }

    fn pan_to(&mut self, proposed: Point) {
        let offset = self.viewport.set_offset(proposed.x, proposed.y);
        tracing::trace!(x = offset.x, y = offset.y, "Pan");
        self.publish();
    }

    // --- Gestures ---

    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.begin(pointer, self.viewport.offset());
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(proposed) = self.drag.update(pointer) {
            self.pan_to(proposed);
        }
    }

    /// Pointer released. A press that never moved past the tap threshold
    /// selects the marker under it.
    pub fn pointer_up(&mut self) -> Option<GestureEnd> {
        let ended = self.drag.end();
        if let Some(GestureEnd::Tap(at)) = ended {
            self.tap(at);
        }
        ended
    }

    /// Leaving the surface ends the gesture without treating it as a tap.
    pub fn pointer_leave(&mut self) {
        self.drag.end();
    }

    pub fn touch_start(&mut self, touches: &[Point]) {
        self.drag.touch_start(touches, self.viewport.offset());
    }

    pub fn touch_move(&mut self, touches: &[Point]) {
        if let Some(proposed) = self.drag.touch_move(touches) {
            self.pan_to(proposed);
        }
    }

    pub fn touch_end(&mut self) -> Option<GestureEnd> {
        self.pointer_up()
    }

    pub fn touch_cancel(&mut self) {
        self.pointer_leave();
    }

    /// Select the marker nearest a tap, or clear the selection.
    ///
    /// `at` is in the same container-relative space the gesture was reported in.
    fn tap(&mut self, at: Point) {
        let map_point = self.viewport.viewport_to_map(at);
        let hit = calc::find_nearest(self.profile.locations.all(), map_point, None)
            .filter(|n| n.distance_px <= TAP_SELECT_RADIUS)
            .map(|n| n.location.id.clone());
        tracing::debug!(x = map_point.x, y = map_point.y, hit = ?hit, "Tap");
        self.selected_location = hit;
    }

    // --- Derived display state ---

    pub fn marker_state(&self, location: &Location) -> MarkerState {
        let highlighted = self.category == Some(location.category);
        let inactive = self.category.is_some() && !highlighted;
        MarkerState {
            highlighted,
            dimmed: inactive,
            hidden: inactive && self.profile.hide_inactive,
            selected: self.selected_location.as_deref() == Some(location.id.as_str()),
        }
    }

    /// Every location with its display flags, in catalog order.
    pub fn marker_states(&self) -> impl Iterator<Item = (&Location, MarkerState)> + '_ {
        self.profile
            .locations
            .all()
            .iter()
            .map(move |loc| (loc, self.marker_state(loc)))
    }

    /// Whether any location of the active category is currently on screen.
    pub fn highlighted_visible(&self) -> bool {
        let Some(category) = self.category else {
            return true;
        };
        self.viewport
            .any_visible(self.profile.locations.by_category(category).map(Location::position))
    }
}

impl Default for ParkView {
    fn default() -> Self {
        Self::new(MapProfile::default())
    }
}
