use yew::prelude::*;

use crate::components::grid_mix_chart::GridMixChart;
use crate::components::grid_mix_table::GridMixTable;
use crate::components::status::{Status, StatusKind};
use crate::models::fetch::FetchState;
use crate::models::viewer::ViewerView;

#[derive(Properties, PartialEq)]
pub struct GridMixViewerProps {
    pub state: FetchState,
    pub selected: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(GridMixViewer)]
pub fn grid_mix_viewer(props: &GridMixViewerProps) -> Html {
    match ViewerView::resolve(&props.state, &props.selected) {
        ViewerView::Loading => html! {
            <Status kind={StatusKind::Loading} message="Loading generation data..." />
        },
        ViewerView::Error(msg) => html! {
            <Status kind={StatusKind::Error} message={msg} on_retry={props.on_retry.clone()} />
        },
        ViewerView::Prompt => html! {
            <Status kind={StatusKind::Info} message="Select a balancing authority to view its generation mix." />
        },
        ViewerView::NoData => html! {
            <Status
                kind={StatusKind::Info}
                message="No generation data available for the selected balancing authority."
            />
        },
        ViewerView::Populated(data) => html! {
            <>
                <GridMixChart data={data.clone()} />
                <GridMixTable {data} />
            </>
        },
    }
}
