use std::rc::Rc;

use super::{
    SharedViewer, camera_controls::CameraControls, controls_panel::ControlsPanel,
    legend_panel::LegendPanel, map_view::MapView, north_indicator::NorthIndicator,
    plot_info_panel::PlotInfoPanel,
};
use crate::config::ViewerConfig;
use crate::model::Layout;
use crate::state::{ViewerState, ZoomDirection};
use yew::prelude::*;

/// Bumped after every change made to the shared viewer, so the chrome
/// re-reads it and the map redraws.
#[derive(Default, PartialEq)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

fn load_viewer() -> ViewerState {
    let (layout, config) = match Layout::from_json(crate::LAYOUT_JSON) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("site layout failed to load: {err}");
            (Layout::default(), ViewerConfig::default())
        }
    };
    ViewerState::new(Rc::new(layout), config)
}

#[function_component(App)]
pub fn app() -> Html {
    let viewer = SharedViewer(use_mut_ref(load_viewer));
    let revision = use_reducer(Revision::default);

    let bump = {
        let dispatcher = revision.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(()))
    };
    // Applies `f` to the viewer and refreshes when it reports a change.
    let update = |f: fn(&mut ViewerState) -> bool| {
        let viewer = viewer.clone();
        let bump = bump.clone();
        Callback::from(move |()| {
            let changed = f(&mut *viewer.0.borrow_mut());
            if changed {
                bump.emit(());
            }
        })
    };

    let on_zoom_in = update(|v| {
        v.zoom_step(ZoomDirection::In);
        true
    });
    let on_zoom_out = update(|v| {
        v.zoom_step(ZoomDirection::Out);
        true
    });
    let on_reset = update(|v| {
        v.reset_camera();
        true
    });
    let on_close = update(ViewerState::clear_selection);
    let on_query = {
        let viewer = viewer.clone();
        let bump = bump.clone();
        Callback::from(move |query: String| {
            let changed = viewer.0.borrow_mut().set_query(&query);
            if changed {
                bump.emit(());
            }
        })
    };
    let on_toggle_status = {
        let viewer = viewer.clone();
        let bump = bump.clone();
        Callback::from(move |visible: bool| {
            viewer.0.borrow_mut().set_status_visible(visible);
            bump.emit(());
        })
    };

    let (query, matched_label, status_visible, selected, zoom) = {
        let v = viewer.0.borrow();
        (
            v.query().to_owned(),
            v.matched_plot().map(|p| p.label.clone()),
            v.status_visible(),
            v.selected_plot().cloned(),
            v.camera().zoom(),
        )
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#111827; color:#fff; font-family:sans-serif;">
        <MapView viewer={viewer.clone()} revision={revision.0} on_change={bump} />
        <ControlsPanel
            query={query}
            status_visible={status_visible}
            matched_label={matched_label}
            on_query={on_query}
            on_toggle_status={on_toggle_status}
        />
        <NorthIndicator />
        <CameraControls on_zoom_in={on_zoom_in} on_zoom_out={on_zoom_out} on_reset={on_reset} zoom={zoom} />
        { if status_visible { html!{ <LegendPanel /> } } else { html!{} } }
        <PlotInfoPanel plot={selected} status_visible={status_visible} on_close={on_close} />
    </div>}
}
