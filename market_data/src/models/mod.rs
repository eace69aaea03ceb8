pub mod bar;
pub mod series;
