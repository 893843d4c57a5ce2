pub mod control_bar;
pub mod force_matrix;
