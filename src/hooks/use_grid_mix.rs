use crate::models::fetch::{FetchController, FetchState, FetchTicket};
use crate::services::api::fetch_grid_mix;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle returned by `use_grid_mix` hook
#[derive(Clone, PartialEq)]
pub struct GridMixHandle {
    pub state: FetchState,
    pub retry: Callback<()>,
}

/// Fetches the grid mix whenever `authority` changes.
///
/// The controller decides which response may land: anything answered after a
/// newer selection, or after unmount, is dropped.
#[hook]
pub fn use_grid_mix(authority: String) -> GridMixHandle {
    let controller = use_mut_ref(FetchController::new);
    let state = use_state(FetchState::default);
    let unmounted = use_mut_ref(|| false);

    {
        let controller = controller.clone();
        let state = state.clone();
        let unmounted = unmounted.clone();

        use_effect_with(authority, move |authority| {
            let ticket = controller.borrow_mut().select(authority);
            state.set(controller.borrow().state().clone());

            if let Some(ticket) = ticket {
                spawn_fetch(controller, state, ticket, unmounted.clone());
            }

            || ()
        });
    }

    {
        let unmounted = unmounted.clone();
        use_effect_with((), move |_| move || *unmounted.borrow_mut() = true);
    }

    // Everything captured is a shared handle, so the callback never needs rebuilding
    let retry = {
        let state = state.clone();

        use_callback((), move |(), _| {
            let ticket = controller.borrow_mut().retry();
            state.set(controller.borrow().state().clone());

            if let Some(ticket) = ticket {
                spawn_fetch(controller.clone(), state.clone(), ticket, unmounted.clone());
            }
        })
    };

    GridMixHandle {
        state: (*state).clone(),
        retry,
    }
}

fn spawn_fetch(
    controller: Rc<RefCell<FetchController>>,
    state: UseStateHandle<FetchState>,
    ticket: FetchTicket,
    unmounted: Rc<RefCell<bool>>,
) {
    gloo::console::log!(&format!(
        "Fetching grid mix for {} (request {})",
        ticket.authority(),
        ticket.generation()
    ));

    spawn_local(async move {
        let result = fetch_grid_mix(ticket.authority()).await;
        if *unmounted.borrow() {
            return;
        }

        match &result {
            Ok(mix) => {
                let odd_units = mix.unexpected_units().count();
                if odd_units > 0 {
                    gloo::console::warn!(&format!(
                        "{odd_units} grid mix records for {} are not in megawatthours",
                        ticket.authority()
                    ));
                }
            }
            Err(e) => gloo::console::error!(&format!(
                "Error fetching grid mix for {}: {e}",
                ticket.authority()
            )),
        }

        let mut controller = controller.borrow_mut();
        if controller.resolve(&ticket, result) {
            state.set(controller.state().clone());
        } else {
            gloo::console::log!(&format!(
                "Discarded stale grid mix response for {}",
                ticket.authority()
            ));
        }
    });
}
