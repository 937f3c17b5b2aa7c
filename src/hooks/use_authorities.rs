use crate::models::fetch::AuthorityListState;
use crate::services::api::fetch_balancing_authorities;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Loads the balancing authority list once, on mount. Failures are not retried.
#[hook]
pub fn use_authorities() -> UseStateHandle<AuthorityListState> {
    let state = use_state(|| AuthorityListState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_balancing_authorities().await;
                if aborted_check.get() {
                    return;
                }

                match &result {
                    Ok(list) => gloo::console::log!(&format!(
                        "Loaded {} balancing authorities",
                        list.len()
                    )),
                    Err(e) => gloo::console::error!(&format!("Error fetching authorities: {e}")),
                }
                state.set(AuthorityListState::from_result(result));
            });

            move || aborted.set(true)
        });
    }

    state
}
