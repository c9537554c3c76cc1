pub mod observation;
pub mod region;

pub use observation::{kelvin_to_fahrenheit, ObservationRecord};
pub use region::RegionStats;
