mod axes;
mod particle;
pub mod universe;

pub use self::axes::Axes;
pub use self::particle::{Body, PointMass, find_coincident, ensure_no_coincident};
pub use self::universe::Universe;
