pub mod endpoints;
pub mod frames;
pub mod params;
pub mod transport;
