pub mod languages;
pub mod translate;
