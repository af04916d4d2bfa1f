use crate::config::ViewerConfig;
use crate::geometry::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up (negative delta) zooms in. A zero delta carries no
    /// direction.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Pan/zoom state. `screen = pan + content * zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    zoom: f64,
    pan: Point,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    default_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl Camera {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            zoom: cfg.default_zoom,
            pan: Point::ZERO,
            min_zoom: cfg.min_zoom,
            max_zoom: cfg.max_zoom,
            zoom_step: cfg.zoom_step,
            default_zoom: cfg.default_zoom,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn to_content(&self, screen: Point) -> Point {
        (screen - self.pan) / self.zoom
    }

    pub fn to_screen(&self, content: Point) -> Point {
        self.pan + content * self.zoom
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// One zoom step keeping the content under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) {
        let anchor_content = self.to_content(anchor);
        let target = match direction {
            ZoomDirection::In => self.zoom * self.zoom_step,
            ZoomDirection::Out => self.zoom / self.zoom_step,
        };
        self.zoom = self.clamp_zoom(target);
        // shift back whatever drift the new zoom gave the anchor
        self.pan_by(anchor - self.to_screen(anchor_content));
    }

    /// Zoom step anchored at the middle of the viewport.
    pub fn zoom_centered(&mut self, viewport: Size, direction: ZoomDirection) {
        self.zoom_at(viewport.center(), direction);
    }

    pub fn reset(&mut self) {
        self.zoom = self.default_zoom;
        self.pan = Point::ZERO;
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan + delta;
    }

    /// Absolute pan, used by drag gestures that track the pointer directly.
    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Zooms to `zoom` and centers `content` in the viewport.
    pub fn focus_on(&mut self, content: Point, zoom: f64, viewport: Size) {
        self.zoom = self.clamp_zoom(zoom);
        self.pan = viewport.center() - content * self.zoom;
    }
}
