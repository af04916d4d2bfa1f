//! Scene painting. [`paint_scene`] is a pure function of the viewer state and
//! draws back to front through a [`Painter`], so it can be called after every
//! input event.

mod canvas;

use crate::geometry::{Point, Size};
use crate::model::{Layout, Plot, PlotStatus};
use crate::state::Camera;

pub const BACKDROP: &str = "#111827";
pub const ROAD_FILL: &str = "#505050";
pub const OUTLINE: &str = "#000000";
pub const AVAILABLE: &str = "#46AADB";
pub const SOLD: &str = "#D40B2B";
pub const NO_INFO: &str = "#838383";
pub const HIGHLIGHT: &str = "#2b86db";
/// Fill for every non-garden plot while status colors are hidden.
pub const NEUTRAL: &str = "#CFC4AA";
pub const GARDEN: &str = "#7CAF5E";
pub const FOLIAGE: &str = "#5A9041";
pub const LABEL_DARK: &str = "#292929";
pub const LABEL_LIGHT: &str = "#ffffff";
pub const GUIDE_LINE: &str = "#FFFFFF";

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Arial, sans-serif";
const BOUNDARY_WIDTH: f64 = 4.0;
const PLOT_BORDER_WIDTH: f64 = 3.0;
const GUIDE_WIDTH: f64 = 3.0;
const GUIDE_DASH: [f64; 2] = [15.0, 10.0];

// Tree clusters around a garden's centroid.
const TREE_OFFSETS: [(f64, f64); 8] = [
    (-80.0, -100.0),
    (60.0, -80.0),
    (-50.0, 50.0),
    (70.0, 60.0),
    (-10.0, -30.0),
    (20.0, 20.0),
    (-100.0, 20.0),
    (90.0, -20.0),
];
const TREE_RADIUS: f64 = 15.0;
const LEAF_RADIUS: f64 = 10.0;
const LEAF_SPREAD: f64 = 8.0;

// Highlighted labels split into a name line and an area line.
const NAME_LINE_OFFSET: f64 = -12.0;
const AREA_LINE_OFFSET: f64 = 15.0;

pub fn status_color(status: PlotStatus) -> &'static str {
    match status {
        PlotStatus::Available => AVAILABLE,
        PlotStatus::Sold => SOLD,
        PlotStatus::NoInfo => NO_INFO,
    }
}

/// Fill for a plot. Gardens ignore every other state; highlight beats status.
pub fn plot_fill(plot: &Plot, highlighted: bool, status_visible: bool) -> &'static str {
    if plot.is_garden {
        GARDEN
    } else if highlighted {
        HIGHLIGHT
    } else if !status_visible {
        NEUTRAL
    } else {
        status_color(plot.status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Centered horizontally and vertically on the anchor.
    Center,
    /// Anchor is the top-left corner of the text.
    TopLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text<'a> {
    pub text: &'a str,
    pub anchor: Point,
    /// Rotation about `anchor`, in radians.
    pub rotation: f64,
    /// Vertical offset from `anchor`, measured in the rotated frame.
    pub offset_y: f64,
    pub font: String,
    pub color: &'static str,
    pub align: TextAlign,
}

/// Drawing backend. Coordinates after [`Painter::set_view`] are in content
/// space.
pub trait Painter {
    /// Fills the whole viewport in screen space.
    fn clear(&mut self, viewport: Size, color: &str);
    fn set_view(&mut self, zoom: f64, pan: Point);
    fn fill_polygon(&mut self, points: &[Point], color: &str);
    fn stroke_polygon(&mut self, points: &[Point], color: &str, width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64, dash: &[f64]);
    fn fill_text(&mut self, text: &Text<'_>);
}

/// Everything a frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub layout: &'a Layout,
    pub camera: &'a Camera,
    pub selected: Option<usize>,
    pub matched: Option<usize>,
    pub status_visible: bool,
}

impl Scene<'_> {
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selected == Some(index) || self.matched == Some(index)
    }
}

fn bold(px: u32) -> String {
    format!("bold {px}px {FONT_STACK}")
}

pub fn paint_scene(painter: &mut impl Painter, viewport: Size, scene: &Scene<'_>) {
    painter.clear(viewport, BACKDROP);
    painter.set_view(scene.camera.zoom(), scene.camera.pan());

    let layout = scene.layout;
    if layout.boundary.len() >= 3 {
        painter.fill_polygon(&layout.boundary, ROAD_FILL);
        painter.stroke_polygon(&layout.boundary, OUTLINE, BOUNDARY_WIDTH);
    }

    for (i, plot) in layout.plots.iter().enumerate() {
        paint_plot(painter, plot, scene.is_highlighted(i), scene.status_visible);
    }
    for (i, plot) in layout.plots.iter().enumerate() {
        paint_label(painter, plot, scene.is_highlighted(i));
    }

    paint_overlays(painter, layout);
}

fn paint_plot(painter: &mut impl Painter, plot: &Plot, highlighted: bool, status_visible: bool) {
    painter.fill_polygon(&plot.polygon, plot_fill(plot, highlighted, status_visible));
    painter.stroke_polygon(&plot.polygon, OUTLINE, PLOT_BORDER_WIDTH);
    if plot.is_garden {
        paint_trees(painter, plot.centroid());
    }
}

fn paint_trees(painter: &mut impl Painter, center: Point) {
    for (dx, dy) in TREE_OFFSETS {
        let tree = center + Point::new(dx, dy);
        painter.fill_circle(tree, TREE_RADIUS, FOLIAGE);
        painter.fill_circle(tree + Point::new(-LEAF_SPREAD, -LEAF_SPREAD), LEAF_RADIUS, FOLIAGE);
        painter.fill_circle(tree + Point::new(LEAF_SPREAD, -LEAF_SPREAD), LEAF_RADIUS, FOLIAGE);
    }
}

fn paint_label(painter: &mut impl Painter, plot: &Plot, highlighted: bool) {
    let name = Text {
        text: &plot.label,
        anchor: plot.display_anchor(),
        rotation: plot.rotation_degrees.unwrap_or(0.0).to_radians(),
        offset_y: 0.0,
        font: bold(40),
        color: if highlighted { LABEL_LIGHT } else { LABEL_DARK },
        align: TextAlign::Center,
    };

    // Common areas carry a long name and no saleable area.
    if plot.is_common_area {
        painter.fill_text(&Text {
            font: bold(24),
            ..name
        });
        return;
    }
    if !highlighted {
        painter.fill_text(&name);
        return;
    }
    let area = plot.area_label();
    painter.fill_text(&Text {
        offset_y: NAME_LINE_OFFSET,
        ..name.clone()
    });
    painter.fill_text(&Text {
        text: &area,
        offset_y: AREA_LINE_OFFSET,
        font: bold(18),
        ..name
    });
}

fn paint_overlays(painter: &mut impl Painter, layout: &Layout) {
    if layout.guide_line.len() >= 2 {
        painter.stroke_polyline(&layout.guide_line, GUIDE_LINE, GUIDE_WIDTH, &GUIDE_DASH);
    }
    for road in &layout.road_labels {
        painter.fill_text(&Text {
            text: &road.text,
            anchor: road.at,
            rotation: road.rotation_degrees.to_radians(),
            offset_y: 0.0,
            font: bold(20),
            color: LABEL_DARK,
            align: TextAlign::TopLeft,
        });
    }
}
