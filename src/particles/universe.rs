use super::super::constants::G;
use super::super::error::{Result, SimulationError};
use super::{Axes, Body, PointMass};

/// Ordered collection of bodies. The order is the display/export order and
/// also the order in which the integrator updates them within a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Universe {
    pub particles: Vec<Body>,
}

impl Universe {
    pub fn new(particles: Vec<Body>) -> Universe {
        Universe { particles: particles }
    }

    pub fn n_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn push(&mut self, body: Body) -> &Body {
        let index = self.particles.len();
        self.particles.push(body);
        &self.particles[index]
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.particles.iter()
    }

    /// Masses and positions of every body at this instant.
    pub fn gravitational_field(&self) -> Vec<PointMass> {
        self.particles.iter().map(|particle| particle.as_point_mass()).collect()
    }

    /// Accelerations of every body computed from the same instant, without moving anything.
    pub fn gravity_calculate_acceleration(&mut self) -> Vec<Axes> {
        let field = self.gravitational_field();
        self.particles.iter_mut()
            .enumerate()
            .map(|(i, particle)| particle.compute_acceleration(i, &field))
            .collect()
    }

    /// Rejects a body that would share its position with one already present.
    pub fn ensure_free_position(&self, position: Axes) -> Result<()> {
        match self.particles.iter().position(|particle| particle.position == position) {
            Some(first) => Err(SimulationError::DegenerateConfiguration { first: first, second: self.particles.len() }),
            None => Ok(()),
        }
    }

    pub fn compute_total_energy(&self) -> f64 {
        let mut e_kin = 0.;
        let mut e_pot = 0.;

        // Kinetic energy
        for particle in self.particles.iter() {
            e_kin += particle.kinetic_energy();
        }
        // Gravitational potential energy
        for (i, particle_a) in self.particles.iter().enumerate() {
            for particle_b in self.particles[i+1..].iter() {
                let distance = (particle_a.position - particle_b.position).norm();
                e_pot -= G * particle_a.mass() * particle_b.mass() / distance;
            }
        }

        e_kin + e_pot
    }

    /// z component of the total angular momentum (the only non-null one in the plane)
    pub fn compute_total_angular_momentum(&self) -> f64 {
        self.particles.iter().map(|particle| particle.angular_momentum()).sum()
    }

    pub fn calculate_center_of_mass(&self) -> (Axes, Axes) {
        let mut center_of_mass_position = Axes::zero();
        let mut center_of_mass_velocity = Axes::zero();
        let mut center_of_mass_mass = 0.;

        for particle in self.particles.iter() {
            center_of_mass_position += particle.position * particle.mass();
            center_of_mass_velocity += particle.velocity * particle.mass();
            center_of_mass_mass += particle.mass();
        }
        if center_of_mass_mass > 0. {
            center_of_mass_position = center_of_mass_position * (1. / center_of_mass_mass);
            center_of_mass_velocity = center_of_mass_velocity * (1. / center_of_mass_mass);
        }

        (center_of_mass_position, center_of_mass_velocity)
    }
}
