// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{max_component, normalize, reflect, NORMALIZE_EPSILON};
