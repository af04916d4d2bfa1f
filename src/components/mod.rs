pub mod app;
pub mod camera_controls;
pub mod controls_panel;
pub mod legend;
pub mod legend_panel;
pub mod map_view;
pub mod north_indicator;
pub mod plot_info_panel;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::ViewerState;

/// Viewer state shared between the canvas host and the overlay chrome.
/// Compares by identity so passing it as a prop never triggers re-renders.
#[derive(Clone)]
pub struct SharedViewer(pub Rc<RefCell<ViewerState>>);

impl PartialEq for SharedViewer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
