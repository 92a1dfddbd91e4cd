pub mod naive;
pub mod sweep_line;
