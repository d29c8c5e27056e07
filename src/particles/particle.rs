use super::super::constants::{G, DEFAULT_BODY_NAME, DEFAULT_BODY_COLOR};
use super::super::error::{Result, ensure_positive, ensure_finite, SimulationError};
use super::Axes;

/// Gravitational source as seen by the other bodies during one force evaluation
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointMass {
    pub mass: f64,
    pub position: Axes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    mass: f64,          // Msun
    pub position: Axes, // AU
    pub velocity: Axes, // AU/yr
    last_acceleration: Axes, // AU/yr^2, only meaningful within the step that computed it
    pub name: String,
    pub color: String,  // Hexadecimal representation (#rrggbb)
}

impl Body {
    pub fn new(mass: f64, position: Axes, velocity: Axes, name: &str, color: &str) -> Result<Body> {
        let mass = ensure_positive("mass", mass)?;
        for (parameter, value) in [
                ("position.x", position.x), ("position.y", position.y),
                ("velocity.x", velocity.x), ("velocity.y", velocity.y)].iter() {
            ensure_finite(*parameter, *value)?;
        }
        Ok(Body {
            mass: mass,
            position: position,
            velocity: velocity,
            last_acceleration: Axes::zero(),
            name: name.to_string(),
            color: color.to_string(),
        })
    }

    pub fn anonymous(mass: f64, position: Axes, velocity: Axes) -> Result<Body> {
        Body::new(mass, position, velocity, DEFAULT_BODY_NAME, DEFAULT_BODY_COLOR)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn last_acceleration(&self) -> Axes {
        self.last_acceleration
    }

    pub fn as_point_mass(&self) -> PointMass {
        PointMass { mass: self.mass, position: self.position }
    }

    /// Net gravitational acceleration produced by every entry of `field` except
    /// the one at `index`, which is this body itself.
    ///
    /// A source placed exactly at this body's position makes the result
    /// non-finite, callers are expected to avoid coincident bodies.
    pub fn compute_acceleration(&mut self, index: usize, field: &[PointMass]) -> Axes {
        let mut acceleration = Axes::zero();
        for (j, source) in field.iter().enumerate() {
            if j == index {
                continue;
            }
            let relative_position = source.position - self.position;
            let distance = relative_position.norm();
            acceleration += relative_position * (G * source.mass / distance.powi(3));
        }
        self.last_acceleration = acceleration;
        acceleration
    }

    /// Half kick: `v += a dt/2` with the acceleration recomputed from `field`.
    pub fn update_velocity(&mut self, index: usize, field: &[PointMass], time_step: f64) -> Axes {
        let acceleration = self.compute_acceleration(index, field);
        self.velocity += acceleration * (time_step / 2.);
        self.velocity
    }

    /// Drift: `x += v dt` using the velocity left by the last kick.
    pub fn update_position(&mut self, time_step: f64) -> Axes {
        self.position += self.velocity * time_step;
        self.position
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn angular_momentum(&self) -> f64 {
        self.mass * self.position.cross(self.velocity)
    }
}

/// Returns the first pair of bodies (by index) sharing the same position.
pub fn find_coincident(bodies: &[Body]) -> Option<(usize, usize)> {
    for (i, body_a) in bodies.iter().enumerate() {
        for (j, body_b) in bodies[i+1..].iter().enumerate() {
            if body_a.position == body_b.position {
                return Some((i, i + 1 + j));
            }
        }
    }
    None
}

pub fn ensure_no_coincident(bodies: &[Body]) -> Result<()> {
    match find_coincident(bodies) {
        Some((first, second)) => Err(SimulationError::DegenerateConfiguration { first: first, second: second }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_mass_is_rejected() {
        assert!(Body::anonymous(0., Axes::zero(), Axes::zero()).is_err());
        assert!(Body::anonymous(-1., Axes::zero(), Axes::zero()).is_err());
        assert!(Body::anonymous(1., Axes::new(f64::NAN, 0.), Axes::zero()).is_err());
    }

    #[test]
    fn acceleration_points_towards_the_source() {
        let mut body = Body::anonymous(1., Axes::zero(), Axes::zero()).unwrap();
        let field = [body.as_point_mass(), PointMass { mass: 2., position: Axes::new(2., 0.) }];
        let acceleration = body.compute_acceleration(0, &field);
        assert_eq!(acceleration, Axes::new(G * 2. / 4., 0.));
        assert_eq!(body.last_acceleration(), acceleration);
    }

    #[test]
    fn kick_then_drift() {
        let mut body = Body::anonymous(1., Axes::zero(), Axes::new(1., 0.)).unwrap();
        let field = [body.as_point_mass(), PointMass { mass: 1., position: Axes::new(0., 1.) }];
        let velocity = body.update_velocity(0, &field, 0.1);
        assert_eq!(velocity, Axes::new(1., G * 0.05));
        let position = body.update_position(0.1);
        assert_eq!(position, Axes::new(0.1, G * 0.05 * 0.1));
    }

    #[test]
    fn coincident_bodies_are_detected() {
        let bodies = vec![
            Body::anonymous(1., Axes::new(0., 0.), Axes::zero()).unwrap(),
            Body::anonymous(1., Axes::new(1., 0.), Axes::zero()).unwrap(),
            Body::anonymous(1., Axes::new(1., 0.), Axes::zero()).unwrap(),
        ];
        assert_eq!(find_coincident(&bodies), Some((1, 2)));
        assert!(find_coincident(&bodies[..2]).is_none());
    }
}
