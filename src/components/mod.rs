pub mod authority_selector;
pub mod grid_mix_chart;
pub mod grid_mix_table;
pub mod grid_mix_viewer;
pub mod map_panel;
pub mod status;

pub use authority_selector::AuthoritySelector;
pub use grid_mix_viewer::GridMixViewer;
pub use map_panel::MapPanel;
