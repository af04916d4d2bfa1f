use yew::prelude::*;

use crate::model::PlotStatus;
use crate::render::status_color;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub status: PlotStatus,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let swatch = format!(
        "display:inline-block; width:12px; height:12px; background:{}; border:1px solid #000; border-radius:50%;",
        status_color(props.status)
    );
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style={swatch}></span> <span>{ props.status.label() }</span> </div> }
}
