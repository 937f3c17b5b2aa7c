use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum StatusKind {
    Loading,
    Error,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: StatusKind,
    #[prop_or_default]
    pub message: AttrValue,
    /// Shown as a button next to error messages when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Spinner or one-line alert banner.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match props.kind {
        StatusKind::Loading => html! {
            <div class="status loading" role="status">
                <div class="spinner"></div>
                if !props.message.is_empty() {
                    <p>{props.message.clone()}</p>
                }
            </div>
        },
        StatusKind::Error => {
            let retry = props.on_retry.clone().map(|cb| {
                html! {
                    <button class="retry-button" onclick={move |_| cb.emit(())}>{"Retry"}</button>
                }
            });

            html! {
                <div class="status error" role="alert">
                    <p>{props.message.clone()}</p>
                    {retry}
                </div>
            }
        }
        StatusKind::Info => html! {
            <div class="status info" role="status">
                <p>{props.message.clone()}</p>
            </div>
        },
    }
}
