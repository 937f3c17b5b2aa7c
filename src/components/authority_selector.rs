use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::status::{Status, StatusKind};
use crate::hooks::use_authorities::use_authorities;
use crate::models::fetch::AuthorityListState;

#[derive(Properties, PartialEq)]
pub struct AuthoritySelectorProps {
    pub selected: AttrValue,
    pub on_select: Callback<String>,
}

/// Balancing authority dropdown. The first option clears the selection.
#[function_component(AuthoritySelector)]
pub fn authority_selector(props: &AuthoritySelectorProps) -> Html {
    let authorities = use_authorities();

    let on_change = {
        let callback = props.on_select.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    match &*authorities {
        AuthorityListState::Loading => html! {
            <Status kind={StatusKind::Loading} />
        },
        AuthorityListState::Error(msg) => html! {
            <Status kind={StatusKind::Error} message={msg.clone()} />
        },
        AuthorityListState::Ready(list) => html! {
            <select
                class="authority-selector"
                onchange={on_change}
                aria-label="Select a balancing authority"
                title="Select a balancing authority"
            >
                <option value="" selected={props.selected.is_empty()}>
                    {"Select a Balancing Authority"}
                </option>
                if list.is_empty() {
                    <option disabled=true>{"No options available"}</option>
                } else {
                    {
                        list.iter().map(|code| {
                            let selected = *code == *props.selected;
                            html! {
                                <option key={code.clone()} value={code.clone()} {selected}>{code.clone()}</option>
                            }
                        }).collect::<Html>()
                    }
                }
            </select>
        },
    }
}
