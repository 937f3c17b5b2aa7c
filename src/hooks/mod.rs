pub mod use_authorities;
pub mod use_grid_mix;
