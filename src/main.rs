use grid_mix_dashboard::components::{AuthoritySelector, GridMixViewer, MapPanel};
use grid_mix_dashboard::hooks::use_grid_mix::use_grid_mix;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let selected = use_state(String::new);
    let grid_mix = use_grid_mix((*selected).clone());

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |authority: String| selected.set(authority))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Electricity Demand and Generation"}</h1>
            </header>

            <main class="app-main">
                <section class="map-section">
                    <MapPanel />
                </section>

                <section class="selector-section">
                    <h2>{"Balancing Authority"}</h2>
                    <AuthoritySelector selected={(*selected).clone()} {on_select} />
                </section>

                <section class="grid-mix-section">
                    <GridMixViewer
                        state={grid_mix.state.clone()}
                        selected={(*selected).clone()}
                        on_retry={grid_mix.retry.clone()}
                    />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
