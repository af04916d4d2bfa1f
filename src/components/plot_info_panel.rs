use crate::model::Plot;
use crate::render::plot_fill;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlotInfoPanelProps {
    pub plot: Option<Plot>,
    pub status_visible: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PlotInfoPanel(props: &PlotInfoPanelProps) -> Html {
    let Some(plot) = &props.plot else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let panel_style = "position:absolute; right:12px; top:12px; \
        background:rgba(17,24,39,0.95); border:1px solid #374151; border-radius:8px; \
        padding:12px 16px; min-width:200px; font-size:13px; color:#e5e7eb;";
    let header_style = "font-weight:600; font-size:15px; margin-bottom:8px; display:flex; align-items:center; gap:8px;";
    let stat_row_style = "display:flex; justify-content:space-between; margin:4px 0; font-size:12px;";
    let stat_label_style = "color:#9ca3af;";
    let dot_style = format!(
        "display:inline-block; width:12px; height:12px; border-radius:50%; border:1px solid #000; background:{};",
        plot_fill(plot, false, props.status_visible)
    );

    let title = if plot.is_common_area {
        plot.label.clone()
    } else {
        format!("Plot {}", plot.label)
    };
    let status_row = if props.status_visible && !plot.is_common_area {
        html! {
            <div style={stat_row_style}>
                <span style={stat_label_style}>{"Status"}</span>
                <span>{ plot.status.label() }</span>
            </div>
        }
    } else {
        html! {}
    };
    let area_row = if plot.is_common_area {
        html! {}
    } else {
        html! {
            <div style={stat_row_style}>
                <span style={stat_label_style}>{"Area"}</span>
                <span>{ plot.area_label() }</span>
            </div>
        }
    };

    html! {<div style={panel_style}>
        <div style={header_style}>
            <span style={dot_style}></span>
            <span style="flex:1;">{ title }</span>
            <button onclick={close_cb} title="Close">{"×"}</button>
        </div>
        { status_row }
        { area_row }
    </div>}
}
