use super::{fetch::FetchState, grid_mix::GridMix};
use std::rc::Rc;

/// What the grid-mix section shows.
#[derive(Clone, PartialEq, Debug)]
pub enum ViewerView {
    Loading,
    Error(String),
    /// Nothing selected yet.
    Prompt,
    /// The authority returned no records.
    NoData,
    Populated(Rc<GridMix>),
}

impl ViewerView {
    /// Picks the view for the current fetch state and selection.
    ///
    /// Precedence: loading, error, no selection, empty result, populated.
    pub fn resolve(state: &FetchState, selected: &str) -> Self {
        match state {
            FetchState::Loading => Self::Loading,
            FetchState::Error(msg) => Self::Error(msg.clone()),
            _ if selected.is_empty() => Self::Prompt,
            FetchState::Ready(mix) if !mix.is_empty() => Self::Populated(mix.clone()),
            FetchState::Ready(_) => Self::NoData,
            FetchState::Idle => Self::Prompt,
        }
    }
}
