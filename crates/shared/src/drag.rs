use crate::calc::distance;
use crate::models::Point;

/// Mouse travel in pixels before a press stops counting as a tap.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Touch travel in pixels before a press stops counting as a tap.
pub const TOUCH_DRAG_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Pointer position minus the pan offset at gesture start; keeps the
        /// map point under the finger fixed.
        grab: Point,
        origin: Point,
        threshold: f64,
        moved: bool,
    },
}

/// How a finished gesture should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// The pointer never left the tap threshold; carries the press position.
    Tap(Point),
    Pan,
}

/// Mouse / single-touch pan gesture tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl Default for DragController {
    fn default() -> Self {
        DragController {
            state: DragState::Idle,
        }
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start a mouse drag. Ignored while a session is already active.
    pub fn begin(&mut self, pointer: Point, current_offset: Point) {
        self.begin_with_threshold(pointer, current_offset, DRAG_THRESHOLD);
    }

    fn begin_with_threshold(&mut self, pointer: Point, current_offset: Point, threshold: f64) {
        if self.is_dragging() {
            return;
        }
        self.state = DragState::Dragging {
            grab: pointer - current_offset,
            origin: pointer,
            threshold,
            moved: false,
        };
    }

    /// Proposed (unclamped) offset for the new pointer position, or `None`
    /// when no drag is active.
    pub fn update(&mut self, pointer: Point) -> Option<Point> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Dragging {
                grab,
                origin,
                threshold,
                moved,
            } => {
                if !*moved && distance(*origin, pointer) > *threshold {
                    *moved = true;
                }
                Some(pointer - *grab)
            }
        }
    }

    /// Finish the session. Release, leaving the surface and touch cancel all
    /// land here.
    pub fn end(&mut self) -> Option<GestureEnd> {
        let ended = match self.state {
            DragState::Idle => None,
            DragState::Dragging { moved: true, .. } => Some(GestureEnd::Pan),
            DragState::Dragging { origin, .. } => Some(GestureEnd::Tap(origin)),
        };
        self.state = DragState::Idle;
        ended
    }

    /// Start a touch drag from the first touch point; further fingers are
    /// ignored.
    pub fn touch_start(&mut self, touches: &[Point], current_offset: Point) {
        if let Some(first) = touches.first() {
            self.begin_with_threshold(*first, current_offset, TOUCH_DRAG_THRESHOLD);
        }
    }

    /// Follow the first touch point.
    pub fn touch_move(&mut self, touches: &[Point]) -> Option<Point> {
        let first = *touches.first()?;
        self.update(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_then_move_proposes_offset() {
        let mut drag = DragController::new();
        drag.begin(Point::new(100.0, 100.0), Point::ORIGIN);
        let proposed = drag.update(Point::new(120.0, 130.0)).unwrap();
        assert_eq!(proposed, Point::new(20.0, 30.0));
    }

    #[test]
    fn test_grab_keeps_point_under_pointer() {
        let mut drag = DragController::new();
        drag.begin(Point::new(200.0, 150.0), Point::new(-400.0, -300.0));
        let proposed = drag.update(Point::new(190.0, 170.0)).unwrap();
        assert_eq!(proposed, Point::new(-410.0, -280.0));
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut drag = DragController::new();
        assert!(drag.update(Point::new(5.0, 5.0)).is_none());
        drag.begin(Point::ORIGIN, Point::ORIGIN);
        drag.end();
        assert!(drag.update(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_small_movement_is_tap() {
        let mut drag = DragController::new();
        drag.begin(Point::new(10.0, 10.0), Point::ORIGIN);
        drag.update(Point::new(12.0, 11.0));
        assert_eq!(drag.end(), Some(GestureEnd::Tap(Point::new(10.0, 10.0))));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_large_movement_is_pan_even_if_returned() {
        let mut drag = DragController::new();
        drag.begin(Point::new(10.0, 10.0), Point::ORIGIN);
        drag.update(Point::new(40.0, 10.0));
        drag.update(Point::new(10.0, 10.0));
        assert_eq!(drag.end(), Some(GestureEnd::Pan));
    }

    #[test]
    fn test_end_when_idle() {
        let mut drag = DragController::new();
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn test_second_begin_is_ignored() {
        let mut drag = DragController::new();
        drag.begin(Point::new(100.0, 100.0), Point::ORIGIN);
        drag.begin(Point::new(300.0, 300.0), Point::new(-50.0, -50.0));
        let proposed = drag.update(Point::new(110.0, 100.0)).unwrap();
        assert_eq!(proposed, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_touch_tracks_first_point_only() {
        let mut drag = DragController::new();
        drag.touch_start(&[Point::new(50.0, 50.0), Point::new(200.0, 200.0)], Point::ORIGIN);
        let proposed = drag
            .touch_move(&[Point::new(60.0, 45.0), Point::new(500.0, 500.0)])
            .unwrap();
        assert_eq!(proposed, Point::new(10.0, -5.0));
    }

    #[test]
    fn test_touch_uses_larger_threshold() {
        let mut drag = DragController::new();
        drag.touch_start(&[Point::new(50.0, 50.0)], Point::ORIGIN);
        drag.touch_move(&[Point::new(55.0, 50.0)]);
        assert_eq!(drag.end(), Some(GestureEnd::Tap(Point::new(50.0, 50.0))));
    }

    #[test]
    fn test_touch_without_points() {
        let mut drag = DragController::new();
        drag.touch_start(&[], Point::ORIGIN);
        assert!(!drag.is_dragging());
        assert!(drag.touch_move(&[]).is_none());
    }
}
