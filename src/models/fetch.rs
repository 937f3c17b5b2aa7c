use super::{error::AppError, grid_mix::GridMix};
use std::rc::Rc;

/// Message shown when grid-mix data cannot be loaded. Details go to the log.
pub const GRID_MIX_ERROR: &str = "Failed to load grid mix data";

/// Message shown when the authority list cannot be loaded.
pub const AUTHORITIES_ERROR: &str = "Failed to load balancing authorities";

#[derive(Clone, PartialEq, Debug, Default)]
pub enum FetchState {
    /// No authority selected.
    #[default]
    Idle,
    Loading,
    Ready(Rc<GridMix>),
    Error(String),
}

impl FetchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the records if they are loaded
    pub const fn data(&self) -> Option<&Rc<GridMix>> {
        match self {
            Self::Ready(mix) => Some(mix),
            _ => None,
        }
    }
}

/// Identifies one grid-mix request issued by a [`FetchController`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FetchTicket {
    generation: u64,
    authority: String,
}

impl FetchTicket {
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the grid-mix state for the selected authority.
///
/// Every request bumps a generation counter. A response is only committed if
/// its ticket carries the current generation, so a slow answer for an earlier
/// selection can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct FetchController {
    selected: String,
    generation: u64,
    state: FetchState,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Switches to `authority`, superseding any request in flight.
    ///
    /// Returns the ticket to fetch for, or `None` when the selection was
    /// cleared and the controller went back to idle.
    pub fn select(&mut self, authority: &str) -> Option<FetchTicket> {
        self.selected = authority.to_string();
        self.generation += 1;

        if authority.is_empty() {
            self.state = FetchState::Idle;
            return None;
        }

        self.state = FetchState::Loading;
        Some(FetchTicket {
            generation: self.generation,
            authority: self.selected.clone(),
        })
    }

    /// Re-issues the request for the current selection.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let selected = std::mem::take(&mut self.selected);
        self.select(&selected)
    }

    /// Commits the outcome of `ticket`'s request.
    ///
    /// Returns `false` and leaves the state untouched if the ticket has been
    /// superseded.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<GridMix, AppError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = match result {
            Ok(mix) => FetchState::Ready(Rc::new(mix)),
            Err(_) => FetchState::Error(GRID_MIX_ERROR.to_string()),
        };
        true
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }
}

/// State of the one-off authority list request.
#[derive(Clone, PartialEq, Debug)]
pub enum AuthorityListState {
    Loading,
    Ready(Rc<Vec<String>>),
    Error(String),
}

impl AuthorityListState {
    pub fn from_result(result: Result<Vec<String>, AppError>) -> Self {
        match result {
            Ok(list) => Self::Ready(Rc::new(list)),
            Err(_) => Self::Error(AUTHORITIES_ERROR.to_string()),
        }
    }

    /// Authorities offered for selection; empty unless the list loaded.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Ready(list) => list,
            _ => &[],
        }
    }
}
