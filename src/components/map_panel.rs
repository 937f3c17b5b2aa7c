use yew::prelude::*;

use crate::config::map_embed_url;

/// Decorative map of the contiguous US. The embedded frame, and every tile it
/// loaded, goes away with the component.
#[function_component(MapPanel)]
pub fn map_panel() -> Html {
    html! {
        <div class="map-panel">
            <iframe
                id="map"
                title="Map of the contiguous United States"
                src={map_embed_url()}
                loading="lazy"
            />
            <p class="map-attribution">{"© OpenStreetMap contributors"}</p>
        </div>
    }
}
