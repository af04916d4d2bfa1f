//! Press/drag/release disambiguation for the map surface.
//!
//! A press starts a drag immediately: the camera tracks the pointer from the
//! first move. The gesture only counts as a click if the pointer never strays
//! more than the drag threshold from where it went down. Click resolution
//! happens in [`GestureController::pointer_up`]; the browser's own `click`
//! event is never consulted, so a drag cannot also select.

use super::camera::Camera;
use crate::config::ViewerConfig;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    /// Pointer position minus pan at press time; `pan = pointer - anchor`.
    anchor: Point,
    /// Screen position where the press started.
    origin: Point,
    /// Latched once the pointer exceeds the threshold on either axis.
    has_dragged: bool,
}

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// Released close to where it started; carries the release position.
    Click(Point),
    /// Released after panning.
    Pan,
}

#[derive(Clone, Debug)]
pub struct GestureController {
    drag: Option<DragState>,
    threshold: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl GestureController {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            drag: None,
            threshold: cfg.drag_threshold_px,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the current gesture has moved past the threshold.
    pub fn has_dragged(&self) -> bool {
        self.drag.is_some_and(|d| d.has_dragged)
    }

    pub fn pointer_down(&mut self, pos: Point, camera: &Camera) {
        self.drag = Some(DragState {
            anchor: pos - camera.pan(),
            origin: pos,
            has_dragged: false,
        });
    }

    /// Moves the camera with the pointer. Returns `false` when idle.
    pub fn pointer_move(&mut self, pos: Point, camera: &mut Camera) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        camera.set_pan(pos - drag.anchor);
        let dx = (pos.x - drag.origin.x).abs();
        let dy = (pos.y - drag.origin.y).abs();
        if !drag.has_dragged && (dx > self.threshold || dy > self.threshold) {
            drag.has_dragged = true;
            log::debug!("gesture became a drag at ({:.1}, {:.1})", pos.x, pos.y);
        }
        true
    }

    /// Ends the gesture. `None` for a release without a matching press.
    pub fn pointer_up(&mut self, pos: Point, camera: &mut Camera) -> Option<GestureEnd> {
        if !self.pointer_move(pos, camera) {
            return None;
        }
        let dragged = self.has_dragged();
        self.drag = None;
        if dragged {
            Some(GestureEnd::Pan)
        } else {
            Some(GestureEnd::Click(pos))
        }
    }

    /// Abandons the gesture without a click, e.g. on `touchcancel`.
    pub fn cancel(&mut self) {
        self.drag = None;
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GestureController, Camera) {
        (GestureController::default(), Camera::default())
    }

    #[test]
    fn small_wiggle_is_a_click() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(100.0, 100.0), &cam);
        assert!(g.is_dragging());
        g.pointer_move(Point::new(103.0, 96.0), &mut cam);
        g.pointer_move(Point::new(105.0, 95.0), &mut cam);
        assert!(!g.has_dragged());
        let end = g.pointer_up(Point::new(104.0, 98.0), &mut cam);
        assert_eq!(end, Some(GestureEnd::Click(Point::new(104.0, 98.0))));
        assert!(!g.is_dragging());
    }

    #[test]
    fn exceeding_threshold_is_a_pan() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(100.0, 100.0), &cam);
        g.pointer_move(Point::new(100.0, 106.0), &mut cam);
        assert!(g.has_dragged());
        // coming back does not un-latch
        g.pointer_move(Point::new(100.0, 100.0), &mut cam);
        assert!(g.has_dragged());
        let end = g.pointer_up(Point::new(100.0, 100.0), &mut cam);
        assert_eq!(end, Some(GestureEnd::Pan));
    }

    #[test]
    fn release_far_away_without_moves_is_a_pan() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(0.0, 0.0), &cam);
        let end = g.pointer_up(Point::new(40.0, 0.0), &mut cam);
        assert_eq!(end, Some(GestureEnd::Pan));
    }

    #[test]
    fn camera_follows_pointer_from_first_move() {
        let (mut g, mut cam) = setup();
        cam.set_pan(Point::new(10.0, 20.0));
        g.pointer_down(Point::new(100.0, 100.0), &cam);
        g.pointer_move(Point::new(102.0, 101.0), &mut cam);
        assert_eq!(cam.pan(), Point::new(12.0, 21.0));
        g.pointer_move(Point::new(150.0, 80.0), &mut cam);
        assert_eq!(cam.pan(), Point::new(60.0, 0.0));
    }

    #[test]
    fn repeated_drags_start_from_current_pan() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(0.0, 0.0), &cam);
        g.pointer_move(Point::new(50.0, 0.0), &mut cam);
        g.pointer_up(Point::new(50.0, 0.0), &mut cam);
        assert_eq!(cam.pan(), Point::new(50.0, 0.0));

        // Camera changed between gestures, e.g. by a wheel zoom.
        cam.pan_by(Point::new(0.0, 7.0));

        g.pointer_down(Point::new(200.0, 200.0), &cam);
        g.pointer_move(Point::new(230.0, 190.0), &mut cam);
        g.pointer_up(Point::new(230.0, 190.0), &mut cam);
        assert_eq!(cam.pan(), Point::new(80.0, -3.0));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (mut g, mut cam) = setup();
        let before = cam;
        assert_eq!(g.pointer_up(Point::new(5.0, 5.0), &mut cam), None);
        assert!(!g.pointer_move(Point::new(9.0, 9.0), &mut cam));
        assert_eq!(cam, before);
    }

    #[test]
    fn exactly_threshold_is_still_a_click() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(10.0, 10.0), &cam);
        g.pointer_move(Point::new(15.0, 5.0), &mut cam);
        let end = g.pointer_up(Point::new(15.0, 5.0), &mut cam);
        assert_eq!(end, Some(GestureEnd::Click(Point::new(15.0, 5.0))));
    }

    #[test]
    fn cancel_drops_the_gesture_without_a_click() {
        let (mut g, mut cam) = setup();
        g.pointer_down(Point::new(10.0, 10.0), &cam);
        g.cancel();
        assert!(!g.is_dragging());
        assert_eq!(g.pointer_up(Point::new(10.0, 10.0), &mut cam), None);
    }
}
