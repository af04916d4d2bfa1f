use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub query: String,
    pub status_visible: bool,
    pub on_query: Callback<String>,
    pub on_toggle_status: Callback<bool>,
    /// Label of the plot the query currently frames, if any.
    pub matched_label: Option<String>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let search_cb = {
        let cb = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let status_cb = {
        let cb = props.on_toggle_status.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    let hint = match (&props.matched_label, props.query.is_empty()) {
        (_, true) => html! {},
        (Some(label), false) => html! { <div style="font-size:11px; color:#9ca3af;">{ format!("Showing {label}") }</div> },
        (None, false) => html! { <div style="font-size:11px; color:#f87171;">{"No matching plot"}</div> },
    };
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(17,24,39,0.9); border:1px solid #374151; border-radius:8px; padding:8px; min-width:220px; display:flex; flex-direction:column; gap:6px;">
        <input
            type="search"
            placeholder="Search plot number"
            value={props.query.clone()}
            oninput={search_cb}
            style="padding:4px 6px; border-radius:6px; border:1px solid #374151; background:#1f2937; color:#fff;"
        />
        { hint }
        <label style="display:flex; align-items:center; gap:6px; font-size:13px;">
            <input type="checkbox" checked={props.status_visible} onchange={status_cb} />
            {"Show status"}
        </label>
    </div>}
}
