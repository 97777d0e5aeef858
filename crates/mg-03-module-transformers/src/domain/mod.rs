pub mod asset;
pub mod params;
