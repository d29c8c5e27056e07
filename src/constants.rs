use std;

//// Physical constants
// Astronomical units, solar masses and years.
pub const PI : f64 = std::f64::consts::PI;
pub const TWO_PI : f64 = std::f64::consts::PI * 2.;
pub const G  : f64 = 4. * PI * PI;  // Gravitational constant (AU^3 Msun^-1 yr^-2)

//// Integrator defaults
pub const DEFAULT_TIME_STEP : f64 = 0.001;      // years
pub const DEFAULT_EPSILON : f64 = 5.0;          // AU/yr, maximum change of speed per step when the correction is enabled
pub const DEFAULT_CORRECTION_ENABLED : bool = false;
pub const DEFAULT_TICK_INTERVAL_MS : u64 = 10;  // Presentation only, the kernel never reads it
pub const DEFAULT_TICKS : u64 = 1000;
pub const DEFAULT_RECOVERY_SNAPSHOT_PERIOD : u64 = 100; // ticks

//// Display
pub const VIEW_MARGIN_FRACTION : f64 = 0.1;     // Padding added around the trajectories' extent

//// Random particles
pub const RANDOM_MASS_RANGE : (f64, f64) = (1., 20.);           // Msun
pub const RANDOM_POSITION_RANGE : (f64, f64) = (-10., 10.);     // AU
pub const RANDOM_VELOCITY_RANGE : (f64, f64) = (-10., 10.);     // AU/yr
pub const RANDOM_NAME_LENGTH : usize = 5;
pub const RANDOM_NAME_ALPHABET : &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const MAX_RANDOM_DRAWS_PER_BODY : usize = 100;

pub const DEFAULT_BODY_NAME : &str = "body";
pub const DEFAULT_BODY_COLOR : &str = "#000000";
