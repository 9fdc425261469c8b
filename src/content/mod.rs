//! Game content - Base catalogs and the shipped maps

mod catalog;
pub mod maps;

pub use catalog::populate_catalogs;
