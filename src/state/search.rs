use crate::model::Plot;

/// Index of the first plot whose label contains `query`, ignoring case.
/// An empty query matches nothing.
pub fn find_match(plots: &[Plot], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    plots
        .iter()
        .position(|plot| plot.label.to_lowercase().contains(&needle))
}

/// Query text and the plot it currently resolves to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFocus {
    query: String,
    matched: Option<usize>,
}

impl SearchFocus {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matched(&self) -> Option<usize> {
        self.matched
    }

    /// Re-resolves the match for a new query. Returns `None` when the query
    /// did not change, otherwise the new match.
    pub fn update(&mut self, plots: &[Plot], query: &str) -> Option<Option<usize>> {
        if self.query == query {
            return None;
        }
        self.query = query.to_owned();
        self.matched = find_match(plots, query);
        Some(self.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::PlotStatus;

    fn plot(label: &str) -> Plot {
        Plot {
            id: label.to_lowercase(),
            label: label.into(),
            status: PlotStatus::Sold,
            polygon: vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            area_sq_ft: 0,
            rotation_degrees: None,
            is_common_area: false,
            is_garden: false,
            label_anchor: None,
        }
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let plots = [plot("1"), plot("COMMON PLOT 1"), plot("12")];
        assert_eq!(find_match(&plots, "common"), Some(1));
        assert_eq!(find_match(&plots, "Plot"), Some(1));
        assert_eq!(find_match(&plots, "2"), Some(2));
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let plots = [plot("12"), plot("1"), plot("21")];
        assert_eq!(find_match(&plots, "1"), Some(0));
    }

    #[test]
    fn empty_or_unmatched_query_has_no_match() {
        let plots = [plot("1")];
        assert_eq!(find_match(&plots, ""), None);
        assert_eq!(find_match(&plots, "x"), None);
    }

    #[test]
    fn update_reports_only_changes() {
        let plots = [plot("8"), plot("9")];
        let mut search = SearchFocus::default();
        assert_eq!(search.update(&plots, "9"), Some(Some(1)));
        assert_eq!(search.update(&plots, "9"), None);
        assert_eq!(search.update(&plots, "7"), Some(None));
        assert_eq!(search.matched(), None);
        assert_eq!(search.query(), "7");
        assert_eq!(search.update(&plots, ""), Some(None));
    }
}
