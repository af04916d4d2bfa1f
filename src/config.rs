use serde::Deserialize;

use crate::error::LayoutError;
use crate::geometry::Size;

/// Viewer tunables. Every field can be overridden from the `"viewer"` object
/// of the layout file; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplicative factor applied per zoom step.
    pub zoom_step: f64,
    /// Zoom restored by the reset control.
    pub default_zoom: f64,
    /// Zoom used when a search result is framed.
    pub focus_zoom: f64,
    /// Movement on either axis beyond this turns a press into a drag.
    pub drag_threshold_px: f64,
    /// Viewport assumed for search framing before the canvas is measured.
    pub fallback_viewport: Size,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.25,
            max_zoom: 3.0,
            zoom_step: 1.3,
            default_zoom: 0.35,
            focus_zoom: 1.2,
            drag_threshold_px: 5.0,
            fallback_viewport: Size::new(800.0, 700.0),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(LayoutError::InvalidConfig(format!(
                "zoom range [{}, {}] is empty or non-positive",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.default_zoom) {
            return Err(LayoutError::InvalidConfig(format!(
                "default zoom {} outside [{}, {}]",
                self.default_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_step > 1.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "zoom step {} must be greater than 1",
                self.zoom_step
            )));
        }
        if self.drag_threshold_px < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "drag threshold {} must be non-negative",
                self.drag_threshold_px
            )));
        }
        Ok(())
    }
}
