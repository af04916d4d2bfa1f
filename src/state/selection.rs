use crate::geometry::{Point, point_in_polygon};
use crate::model::Plot;

/// First plot, in declaration order, whose polygon contains `content`.
/// Overlapping plots resolve to the earlier entry.
pub fn hit_test(plots: &[Plot], content: Point) -> Option<usize> {
    plots
        .iter()
        .position(|plot| point_in_polygon(content, &plot.polygon))
}
