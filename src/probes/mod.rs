pub mod geo;
pub mod system;

pub use geo::GeoSnapshot;
pub use system::MachineInfo;
