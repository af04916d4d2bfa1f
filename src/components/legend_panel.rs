use super::legend::LegendRow;
use crate::model::PlotStatus;
use yew::prelude::*;

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(17,24,39,0.9); border:1px solid #374151; border-radius:8px; padding:8px; min-width:140px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow status={PlotStatus::Available} />
        <LegendRow status={PlotStatus::Sold} />
        <LegendRow status={PlotStatus::NoInfo} />
    </div>}
}
