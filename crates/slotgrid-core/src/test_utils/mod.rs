pub mod fake_grid;

pub use fake_grid::*;
