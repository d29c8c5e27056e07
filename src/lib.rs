extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;

pub mod constants;
pub mod error;
pub use self::error::{Result, SimulationError};

mod particles;
pub use self::particles::Axes;
pub use self::particles::Body;
pub use self::particles::PointMass;
pub use self::particles::Universe;

mod integrator;
pub use self::integrator::*;

pub mod case;
pub use self::case::{Case, BodyCase};

pub mod tools;
pub mod logging;
