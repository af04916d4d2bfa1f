//! Site layout data: plots, the outer boundary and static overlays.
//! Loaded once from the embedded dataset and immutable afterwards.

use serde::Deserialize;

use crate::config::ViewerConfig;
use crate::error::LayoutError;
use crate::geometry::{Point, centroid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStatus {
    Available,
    Sold,
    #[serde(alias = "no-info")]
    NoInfo,
}

impl PlotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlotStatus::Available => "Available",
            PlotStatus::Sold => "Sold",
            PlotStatus::NoInfo => "No Info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub id: String,
    pub label: String,
    pub status: PlotStatus,
    /// Content-space vertices, implicitly closed. Always at least three.
    pub polygon: Vec<Point>,
    pub area_sq_ft: u32,
    pub rotation_degrees: Option<f64>,
    pub is_common_area: bool,
    pub is_garden: bool,
    /// Explicit label position for shapes whose vertex mean sits off-center.
    pub label_anchor: Option<Point>,
}

impl Plot {
    pub fn centroid(&self) -> Point {
        centroid(&self.polygon)
    }

    /// Where the label is drawn.
    pub fn display_anchor(&self) -> Point {
        self.label_anchor.unwrap_or_else(|| self.centroid())
    }

    pub fn area_label(&self) -> String {
        format!("{} ft²", group_thousands(self.area_sq_ft))
    }
}

/// Plot entry as it appears in the dataset, before validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlot {
    id: String,
    label: String,
    status: PlotStatus,
    polygon: Vec<Point>,
    #[serde(default)]
    area_sq_ft: u32,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    is_common_area: bool,
    #[serde(default)]
    is_garden: bool,
    #[serde(default)]
    label_anchor: Option<Point>,
}

impl TryFrom<RawPlot> for Plot {
    type Error = LayoutError;

    fn try_from(raw: RawPlot) -> Result<Self, Self::Error> {
        if raw.polygon.len() < 3 {
            return Err(LayoutError::TooFewVertices {
                id: raw.id,
                count: raw.polygon.len(),
            });
        }
        Ok(Plot {
            id: raw.id,
            label: raw.label,
            status: raw.status,
            polygon: raw.polygon,
            area_sq_ft: raw.area_sq_ft,
            rotation_degrees: raw.rotation.filter(|r| *r != 0.0),
            is_common_area: raw.is_common_area,
            is_garden: raw.is_garden,
            label_anchor: raw.label_anchor,
        })
    }
}

/// Static text painted on the map, e.g. road names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadLabel {
    pub text: String,
    pub at: Point,
    #[serde(default)]
    pub rotation_degrees: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Outline of the whole site, painted under the plots.
    pub boundary: Vec<Point>,
    /// Dashed reference line painted over everything.
    pub guide_line: Vec<Point>,
    pub road_labels: Vec<RoadLabel>,
    pub plots: Vec<Plot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutFile {
    #[serde(default)]
    viewer: Option<ViewerConfig>,
    #[serde(default)]
    boundary: Vec<Point>,
    #[serde(default)]
    guide_line: Vec<Point>,
    #[serde(default)]
    road_labels: Vec<RoadLabel>,
    plots: Vec<RawPlot>,
}

impl Layout {
    /// Parses a layout file. Plots with invalid polygons are skipped with a
    /// warning, and an invalid `"viewer"` block falls back to the defaults.
    pub fn from_json(json: &str) -> Result<(Layout, ViewerConfig), LayoutError> {
        let file: LayoutFile = serde_json::from_str(json)?;

        let config = match file.viewer {
            Some(cfg) => match cfg.validate() {
                Ok(()) => cfg,
                Err(e) => {
                    log::warn!("{e}; using default viewer config");
                    ViewerConfig::default()
                }
            },
            None => ViewerConfig::default(),
        };

        let total = file.plots.len();
        let plots: Vec<Plot> = file
            .plots
            .into_iter()
            .filter_map(|raw| match Plot::try_from(raw) {
                Ok(plot) => Some(plot),
                Err(e) => {
                    log::warn!("skipping plot: {e}");
                    None
                }
            })
            .collect();
        log::info!("loaded {} of {} plots", plots.len(), total);

        let layout = Layout {
            boundary: file.boundary,
            guide_line: file.guide_line,
            road_labels: file.road_labels,
            plots,
        };
        Ok((layout, config))
    }

    pub fn plot(&self, index: usize) -> Option<&Plot> {
        self.plots.get(index)
    }
}

/// `10800` -> `10,800`
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
