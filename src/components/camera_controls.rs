use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    /// Current zoom, shown as a percentage.
    pub zoom: f64,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(17,24,39,0.9); border:1px solid #374151; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo} title="Zoom out"> {"-"} </button>
        <span style="min-width:44px; text-align:center; font-size:12px;">{ format!("{:.0}%", props.zoom * 100.0) }</span>
        <button onclick={zi} title="Zoom in"> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={reset} title="Reset view"> {"1:1"} </button>
    </div>}
}
