pub mod document;
pub mod params;
