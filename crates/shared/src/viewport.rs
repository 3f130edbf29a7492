use serde::{Deserialize, Serialize};

use crate::models::{Point, Size};

/// Rule bounding how far the map may be panned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum ClampPolicy {
    /// The map edges may not be dragged inside the viewport.
    Edge,
    /// Each offset component stays within `[-max_pan, max_pan]`.
    Radius {
        #[serde(rename = "maxPan")]
        max_pan: f64,
    },
}

impl ClampPolicy {
    /// Clamp a requested offset. `None` when the policy needs a viewport size
    /// that has not been measured yet.
    pub fn clamp(&self, offset: Point, map: Size, viewport: Option<Size>) -> Option<Point> {
        match *self {
            ClampPolicy::Edge => {
                let vp = viewport?;
                let min_x = (vp.width - map.width).min(0.0);
                let min_y = (vp.height - map.height).min(0.0);
                Some(Point::new(offset.x.clamp(min_x, 0.0), offset.y.clamp(min_y, 0.0)))
            }
            ClampPolicy::Radius { max_pan } => {
                // A negative or NaN limit pins the map at rest.
                let limit = max_pan.max(0.0);
                Some(Point::new(
                    offset.x.clamp(-limit, limit),
                    offset.y.clamp(-limit, limit),
                ))
            }
        }
    }
}

/// Pan state of the map layer inside the visible container.
///
/// Map space is the pixel grid of the map image; viewport space is the
/// container. A map point `p` is drawn at `p + offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    offset: Point,
    map: Size,
    viewport: Option<Size>,
    policy: ClampPolicy,
}

impl ViewportTransform {
    pub fn new(map: Size, policy: ClampPolicy) -> Self {
        ViewportTransform {
            offset: Point::ORIGIN,
            map,
            viewport: None,
            policy,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn map_size(&self) -> Size {
        self.map
    }

    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    pub fn policy(&self) -> ClampPolicy {
        self.policy
    }

    pub fn is_measured(&self) -> bool {
        self.viewport.is_some()
    }

    /// Record the rendered container size. Zero or negative sizes leave the
    /// transform unmeasured. The current offset is re-clamped to the new size.
    pub fn measure(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Some(Size::new(width, height));
        } else {
            self.viewport = None;
        }
        let current = self.offset;
        self.set_offset(current.x, current.y);
    }

    /// Request a new pan offset; the stored value is clamped by the active
    /// policy and returned. An edge-clamped transform ignores requests until
    /// the viewport has been measured.
    pub fn set_offset(&mut self, x: f64, y: f64) -> Point {
        if let Some(clamped) = self.policy.clamp(Point::new(x, y), self.map, self.viewport) {
            self.offset = clamped;
        }
        self.offset
    }

    /// The map-space point under the middle of the viewport.
    pub fn viewport_center_in_map_space(&self) -> Option<Point> {
        let vp = self.viewport?;
        Some(vp.center() - self.offset)
    }

    /// Offset that puts `focal` (map space) in the middle of the viewport,
    /// after clamping.
    pub fn compute_initial_offset(&self, focal: Point) -> Option<Point> {
        let vp = self.viewport?;
        self.policy.clamp(vp.center() - focal, self.map, self.viewport)
    }

    /// Pan so `focal` sits in the middle of the viewport, as far as the clamp
    /// allows. No-op while unmeasured.
    pub fn center_on(&mut self, focal: Point) -> Option<Point> {
        let offset = self.compute_initial_offset(focal)?;
        self.offset = offset;
        Some(offset)
    }

    pub fn map_to_viewport(&self, p: Point) -> Point {
        p + self.offset
    }

    pub fn viewport_to_map(&self, p: Point) -> Point {
        p - self.offset
    }

    /// Whether a map point is drawn inside the container.
    pub fn is_visible(&self, p: Point) -> bool {
        let Some(vp) = self.viewport else {
            return false;
        };
        let s = self.map_to_viewport(p);
        s.x >= 0.0 && s.x <= vp.width && s.y >= 0.0 && s.y <= vp.height
    }

    /// True if any of `points` is on screen. An empty set, or an unmeasured
    /// viewport, counts as visible.
    pub fn any_visible<I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        if !self.is_measured() {
            return true;
        }
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return true;
        }
        points.any(|p| self.is_visible(p))
    }
}
