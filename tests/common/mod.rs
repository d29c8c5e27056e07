pub mod universe;

use leapfrog2d::constants::PI;

pub fn simulation_properties() -> (f64, f64, bool) {
    let time_step: f64 = 0.001; // years
    let epsilon: f64 = 5.0; // AU/yr
    let correction_enabled = false;
    (time_step, epsilon, correction_enabled)
}

/// Equal masses one AU apart, counter-moving at pi AU/yr.
pub fn symmetric_binary() -> Vec<leapfrog2d::Body> {
    vec![
        leapfrog2d::Body::new(1., leapfrog2d::Axes::new(0., 0.), leapfrog2d::Axes::new(0., PI), "A", "#ff0000").unwrap(),
        leapfrog2d::Body::new(1., leapfrog2d::Axes::new(1., 0.), leapfrog2d::Axes::new(0., -PI), "B", "#0000ff").unwrap(),
    ]
}

/// Bodies at rest, the lighter one first.
pub fn unequal_binary_at_rest() -> Vec<leapfrog2d::Body> {
    vec![
        leapfrog2d::Body::new(1., leapfrog2d::Axes::new(0., 0.), leapfrog2d::Axes::zero(), "light", "#00ff00").unwrap(),
        leapfrog2d::Body::new(2., leapfrog2d::Axes::new(1., 0.), leapfrog2d::Axes::zero(), "heavy", "#ff00ff").unwrap(),
    ]
}

pub fn lonely_body() -> Vec<leapfrog2d::Body> {
    vec![
        leapfrog2d::Body::new(1., leapfrog2d::Axes::new(2., -1.), leapfrog2d::Axes::new(0.5, 0.25), "alone", "#123456").unwrap(),
    ]
}
