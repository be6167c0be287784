pub mod geometry;
pub mod variant;

pub use geometry::DeviceGeometry;
pub use variant::BrailleVariant;
