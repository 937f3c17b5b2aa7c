pub mod chart;
pub mod error;
pub mod fetch;
pub mod grid_mix;
pub mod sort;
pub mod viewer;
