pub mod location;
pub mod directions;

pub use location::{CurrentLocation, LatLng, Location};
pub use directions::Directions;
