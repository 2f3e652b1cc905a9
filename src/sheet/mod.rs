pub mod models;
pub mod reader;

pub use models::*;
pub use reader::{open_sheet, unit_rows, UnitRows};
