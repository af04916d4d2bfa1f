pub mod camera;
pub mod gesture;
pub mod search;
pub mod selection;

use std::rc::Rc;

pub use camera::{Camera, ZoomDirection};
pub use gesture::{GestureController, GestureEnd};
pub use search::SearchFocus;
pub use selection::hit_test;

use crate::config::ViewerConfig;
use crate::geometry::{Point, Size};
use crate::model::{Layout, Plot};
use crate::render::Scene;

/// All mutable viewer state. Input handlers call the transition methods
/// below; the renderer reads a [`Scene`] snapshot.
#[derive(Clone, Debug)]
pub struct ViewerState {
    layout: Rc<Layout>,
    config: ViewerConfig,
    camera: Camera,
    gesture: GestureController,
    search: SearchFocus,
    selected: Option<usize>,
    status_visible: bool,
    /// `None` until the canvas has been measured.
    viewport: Option<Size>,
}

impl ViewerState {
    pub fn new(layout: Rc<Layout>, config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(&config),
            gesture: GestureController::new(&config),
            layout,
            config,
            search: SearchFocus::default(),
            selected: None,
            status_visible: true,
            viewport: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    pub fn set_viewport(&mut self, size: Size) {
        self.viewport = (!size.is_empty()).then_some(size);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_plot(&self) -> Option<&Plot> {
        self.selected().and_then(|i| self.layout().plot(i))
    }

    pub fn matched(&self) -> Option<usize> {
        self.search.matched()
    }

    pub fn matched_plot(&self) -> Option<&Plot> {
        self.matched().and_then(|i| self.layout().plot(i))
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn status_visible(&self) -> bool {
        self.status_visible
    }

    pub fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn pointer_down(&mut self, pos: Point) {
        if self.viewport.is_none() {
            return;
        }
        self.gesture.pointer_down(pos, &self.camera);
    }

    /// Returns whether the camera moved.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        self.gesture.pointer_move(pos, &mut self.camera)
    }

    /// Ends the gesture; a click re-runs selection. Returns whether the
    /// selection changed.
    pub fn pointer_up(&mut self, pos: Point) -> bool {
        match self.gesture.pointer_up(pos, &mut self.camera) {
            Some(GestureEnd::Click(screen)) => self.select_at(screen),
            Some(GestureEnd::Pan) | None => false,
        }
    }

    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
    }

    /// Selects the plot under a screen position, or clears the selection.
    pub fn select_at(&mut self, screen: Point) -> bool {
        let content = self.camera.to_content(screen);
        let hit = hit_test(&self.layout.plots, content);
        log::debug!(
            "click at content ({:.1}, {:.1}) -> {:?}",
            content.x,
            content.y,
            hit.and_then(|i| self.layout.plot(i)).map(|p| &p.id)
        );
        let changed = hit != self.selected;
        self.selected = hit;
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn wheel(&mut self, pos: Point, delta_y: f64) {
        if self.viewport.is_none() {
            return;
        }
        if let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) {
            self.camera.zoom_at(pos, direction);
        }
    }

    /// Zoom step around the viewport center, as used by the zoom buttons.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        if let Some(viewport) = self.viewport {
            self.camera.zoom_centered(viewport, direction);
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Updates the search query. A new match re-frames the camera on it,
    /// overriding any manual pan. Returns whether anything changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        let Some(matched) = self.search.update(&self.layout.plots, query) else {
            return false;
        };
        if let Some(plot) = matched.and_then(|i| self.layout.plot(i)) {
            let viewport = self.viewport.unwrap_or(self.config.fallback_viewport);
            self.camera
                .focus_on(plot.centroid(), self.config.focus_zoom, viewport);
            log::debug!("search {query:?} framed plot {}", plot.id);
        }
        true
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            layout: &self.layout,
            camera: &self.camera,
            selected: self.selected,
            matched: self.search.matched(),
            status_visible: self.status_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlotStatus;

    fn rect(label: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Plot {
        Plot {
            id: label.into(),
            label: label.into(),
            status: PlotStatus::Available,
            polygon: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            area_sq_ft: 1000,
            rotation_degrees: None,
            is_common_area: false,
            is_garden: false,
            label_anchor: None,
        }
    }

    fn viewer() -> ViewerState {
        let layout = Layout {
            plots: vec![
                rect("8", 0.0, 0.0, 100.0, 100.0),
                rect("9", 200.0, 0.0, 300.0, 100.0),
                rect("19", 50.0, 50.0, 150.0, 150.0),
            ],
            ..Default::default()
        };
        let mut v = ViewerState::new(Rc::new(layout), ViewerConfig::default());
        v.set_viewport(Size::new(800.0, 700.0));
        v
    }

    fn bundled() -> ViewerState {
        let (layout, config) = Layout::from_json(crate::LAYOUT_JSON).unwrap();
        let mut v = ViewerState::new(Rc::new(layout), config);
        v.set_viewport(Size::new(800.0, 700.0));
        v
    }

    #[test]
    fn click_selects_plot_under_cursor() {
        let mut v = viewer();
        // zoom 0.35, pan 0: screen (87.5, 17.5) -> content (250, 50)
        v.pointer_down(Point::new(87.5, 17.5));
        assert!(v.pointer_up(Point::new(87.5, 17.5)));
        assert_eq!(v.selected_plot().map(|p| p.label.as_str()), Some("9"));
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let mut v = viewer();
        v.pointer_down(Point::new(10.0, 10.0));
        v.pointer_up(Point::new(10.0, 10.0));
        assert_eq!(v.selected(), Some(0));
        v.pointer_down(Point::new(300.0, 300.0));
        assert!(v.pointer_up(Point::new(300.0, 300.0)));
        assert_eq!(v.selected(), None);
    }

    #[test]
    fn drag_does_not_select() {
        let mut v = viewer();
        v.pointer_down(Point::new(10.0, 10.0));
        v.pointer_move(Point::new(16.0, 10.0));
        assert!(!v.pointer_up(Point::new(16.0, 10.0)));
        assert_eq!(v.selected(), None);
        assert_eq!(v.camera().pan(), Point::new(6.0, 0.0));
    }

    #[test]
    fn click_right_after_drag_still_selects() {
        let mut v = viewer();
        v.pointer_down(Point::new(10.0, 10.0));
        v.pointer_move(Point::new(30.0, 10.0));
        assert!(!v.pointer_up(Point::new(30.0, 10.0)));
        // a drag only withholds its own release; the next press is a fresh click
        let screen = v.camera().to_screen(Point::new(250.0, 50.0));
        v.pointer_down(screen);
        assert!(v.pointer_up(screen));
        assert_eq!(v.selected_plot().map(|p| p.label.as_str()), Some("9"));
    }

    #[test]
    fn wiggle_below_threshold_still_selects() {
        let mut v = viewer();
        v.pointer_down(Point::new(10.0, 10.0));
        v.pointer_move(Point::new(14.0, 6.0));
        assert!(v.pointer_up(Point::new(14.0, 6.0)));
        // pan moved with the pointer, so the release point is resolved with
        // the updated camera
        assert_eq!(v.camera().pan(), Point::new(4.0, -4.0));
        assert_eq!(v.selected(), Some(0));
    }

    #[test]
    fn overlapping_click_selects_earlier_plot() {
        let mut v = viewer();
        // content (75, 75) lies in plots 0 and 2
        let screen = v.camera().to_screen(Point::new(75.0, 75.0));
        v.pointer_down(screen);
        v.pointer_up(screen);
        assert_eq!(v.selected(), Some(0));
    }

    #[test]
    fn search_frames_match() {
        let mut v = bundled();
        assert!(v.set_query("9"));
        let plot = v.matched_plot().unwrap();
        assert_eq!(plot.label, "9");
        assert_eq!(v.camera().zoom(), 1.2);
        let on_screen = v.camera().to_screen(Point::new(741.0, 543.25));
        assert!((on_screen.x - 400.0).abs() < 1e-9);
        assert!((on_screen.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn search_without_match_leaves_camera() {
        let mut v = bundled();
        v.pointer_down(Point::new(0.0, 0.0));
        v.pointer_move(Point::new(40.0, 25.0));
        v.pointer_up(Point::new(40.0, 25.0));
        let before = *v.camera();
        v.set_query("zzz");
        assert_eq!(*v.camera(), before);
        assert_eq!(v.matched(), None);
    }

    #[test]
    fn clearing_query_clears_match_only() {
        let mut v = bundled();
        v.set_query("common");
        assert_eq!(v.matched_plot().map(|p| p.id.as_str()), Some("common1"));
        let framed = *v.camera();
        assert!(v.set_query(""));
        assert_eq!(v.matched(), None);
        assert_eq!(*v.camera(), framed);
    }

    #[test]
    fn requery_overrides_manual_pan() {
        let mut v = viewer();
        v.set_query("9");
        let framed = *v.camera();
        v.pointer_down(Point::new(100.0, 100.0));
        v.pointer_move(Point::new(300.0, 300.0));
        v.pointer_up(Point::new(300.0, 300.0));
        assert_ne!(*v.camera(), framed);
        v.set_query("");
        v.set_query("9");
        assert_eq!(*v.camera(), framed);
    }

    #[test]
    fn search_uses_fallback_viewport_before_layout() {
        let (layout, config) = Layout::from_json(crate::LAYOUT_JSON).unwrap();
        let mut v = ViewerState::new(Rc::new(layout), config);
        v.set_query("9");
        let on_screen = v.camera().to_screen(Point::new(741.0, 543.25));
        assert!((on_screen.x - 400.0).abs() < 1e-9);
        assert!((on_screen.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn unready_viewport_ignores_gestures() {
        let mut v = ViewerState::new(Rc::new(Layout::default()), ViewerConfig::default());
        v.set_viewport(Size::new(0.0, 0.0));
        let before = *v.camera();
        v.pointer_down(Point::new(10.0, 10.0));
        assert!(!v.pointer_move(Point::new(90.0, 10.0)));
        v.wheel(Point::new(10.0, 10.0), -1.0);
        v.zoom_step(ZoomDirection::In);
        assert_eq!(*v.camera(), before);
        assert!(!v.is_dragging());
    }

    #[test]
    fn wheel_zooms_around_pointer() {
        let mut v = viewer();
        let pos = Point::new(321.0, 123.0);
        let before = v.camera().to_content(pos);
        v.wheel(pos, -120.0);
        assert!(v.camera().zoom() > 0.35);
        let after = v.camera().to_content(pos);
        assert!((after.x - before.x).abs() < 1e-9 && (after.y - before.y).abs() < 1e-9);
        v.wheel(pos, 120.0);
        assert!((v.camera().zoom() - 0.35).abs() < 1e-12);
    }

    #[test]
    fn wheel_during_drag_keeps_drag_alive() {
        let mut v = viewer();
        v.pointer_down(Point::new(10.0, 10.0));
        v.wheel(Point::new(10.0, 10.0), -1.0);
        assert!(v.is_dragging());
        let zoomed = v.camera().zoom();
        assert!(zoomed > 0.35);
        assert_ne!(v.camera().pan(), Point::ZERO);

        // The drag keeps the anchor captured at press time, so the next move
        // discards the zoom's pan correction (the zoom level itself stays).
        v.pointer_move(Point::new(40.0, 10.0));
        assert_eq!(v.camera().pan(), Point::new(30.0, 0.0));
        assert_eq!(v.camera().zoom(), zoomed);
        assert!(!v.pointer_up(Point::new(40.0, 10.0)));
    }

    #[test]
    fn reset_and_clear() {
        let mut v = viewer();
        v.zoom_step(ZoomDirection::In);
        v.select_at(v.camera().to_screen(Point::new(25.0, 25.0)));
        v.reset_camera();
        assert_eq!(v.camera().zoom(), 0.35);
        assert_eq!(v.camera().pan(), Point::ZERO);
        assert!(v.clear_selection());
        assert!(!v.clear_selection());
    }

    #[test]
    fn status_toggle_keeps_selection_and_match() {
        let mut v = viewer();
        v.set_query("8");
        v.select_at(v.camera().to_screen(Point::new(250.0, 50.0)));
        v.set_status_visible(false);
        v.set_status_visible(true);
        assert_eq!(v.matched(), Some(0));
        assert_eq!(v.selected(), Some(1));
    }
}
