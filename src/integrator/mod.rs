mod leapfrog;
mod shared;
pub mod trajectory;
pub mod output;

pub use self::leapfrog::*;
pub use self::shared::SharedLeapFrog;
pub use self::trajectory::{Bounds, BodyState, Frame, TrajectoryLog};
