use crate::models::{Location, Point};

/// Offset added to a screen-space bearing so the navigation needle, which
/// points up at rest, turns toward the target.
const NEEDLE_OFFSET_DEGREES: f64 = 90.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Screen-space bearing from `from` to `to` in radians.
/// Coordinate system: X = east, Y = south (screen coords).
/// 0 points east, positive angles turn clockwise toward south.
pub fn bearing_radians(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Rotation in degrees for an upward-pointing needle icon.
pub fn needle_degrees(angle_radians: f64) -> f64 {
    angle_radians.to_degrees() + NEEDLE_OFFSET_DEGREES
}

/// Convert a map-pixel distance to whole meters, rounding half away from zero.
pub fn pixels_to_meters(distance_px: f64, meters_per_pixel: f64) -> u32 {
    (distance_px * meters_per_pixel).round() as u32
}

/// The closest candidate found by [`find_nearest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub location: &'a Location,
    pub distance_px: f64,
}

/// Linear scan for the candidate closest to `reference`.
///
/// Ties go to the first candidate in iteration order. Candidates sitting
/// exactly on `exclude` are skipped.
pub fn find_nearest<'a, I>(candidates: I, reference: Point, exclude: Option<Point>) -> Option<Nearest<'a>>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut best: Option<Nearest<'a>> = None;
    for loc in candidates {
        let pos = loc.position();
        if exclude == Some(pos) {
            continue;
        }
        let d = distance(reference, pos);
        if best.map_or(true, |b| d < b.distance_px) {
            best = Some(Nearest {
                location: loc,
                distance_px: d,
            });
        }
    }
    best
}

/// Nearest location with its distance and bearing already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub location: &'a Location,
    pub distance_px: f64,
    pub meters: u32,
    pub angle_radians: f64,
}

impl Resolution<'_> {
    pub fn needle_degrees(&self) -> f64 {
        needle_degrees(self.angle_radians)
    }
}

/// Find the nearest candidate and derive meters and bearing from `reference`.
pub fn resolve<'a, I>(
    candidates: I,
    reference: Point,
    exclude: Option<Point>,
    meters_per_pixel: f64,
) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'a Location>,
{
    let nearest = find_nearest(candidates, reference, exclude)?;
    Some(Resolution {
        location: nearest.location,
        distance_px: nearest.distance_px,
        meters: pixels_to_meters(nearest.distance_px, meters_per_pixel),
        angle_radians: bearing_radians(reference, nearest.location.position()),
    })
}
