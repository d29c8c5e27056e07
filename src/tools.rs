use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use super::constants::*;
use super::error::{Result, SimulationError};
use super::integrator::LeapFrog;
use super::particles::{Axes, Body};

/// `#rrggbb` from a uniformly drawn 24 bit value
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

pub fn random_name<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| RANDOM_NAME_ALPHABET[rng.gen_range(0..RANDOM_NAME_ALPHABET.len())] as char)
        .collect()
}

fn uniform<R: Rng>(rng: &mut R, range: (f64, f64)) -> f64 {
    rng.gen_range(range.0..=range.1)
}

pub fn random_body<R: Rng>(rng: &mut R) -> Result<Body> {
    let mass = uniform(rng, RANDOM_MASS_RANGE);
    let position = Axes::new(uniform(rng, RANDOM_POSITION_RANGE), uniform(rng, RANDOM_POSITION_RANGE));
    let velocity = Axes::new(uniform(rng, RANDOM_VELOCITY_RANGE), uniform(rng, RANDOM_VELOCITY_RANGE));
    let color = random_color(rng);
    let name = random_name(rng, RANDOM_NAME_LENGTH);
    Body::new(mass, position, velocity, &name, &color)
}

/// Draws `n` bodies that do not share their position with each other nor
/// with any of the `existing` ones. The same seed always gives the same bodies.
pub fn random_bodies(n: usize, seed: u64, existing: &[Body]) -> Result<Vec<Body>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bodies: Vec<Body> = Vec::with_capacity(n);
    for _ in 0..n {
        let mut draws = 0;
        let body = loop {
            let candidate = random_body(&mut rng)?;
            let occupied = existing.iter().chain(bodies.iter())
                .position(|body| body.position == candidate.position);
            match occupied {
                None => break candidate,
                Some(first) if draws + 1 >= MAX_RANDOM_DRAWS_PER_BODY => {
                    return Err(SimulationError::DegenerateConfiguration {
                        first: first,
                        second: existing.len() + bodies.len(),
                    });
                },
                Some(_) => draws += 1,
            }
        };
        bodies.push(body);
    }
    Ok(bodies)
}

/// Adds `n` random bodies to the integrator and returns how many it holds now.
pub fn generate_random_particles(universe_integrator: &mut LeapFrog, n: usize, seed: u64) -> Result<usize> {
    let bodies = random_bodies(n, seed, &universe_integrator.universe().particles)?;
    for body in bodies.into_iter() {
        universe_integrator.add_body(body);
    }
    info!("Generated {} random particles (seed {})", n, seed);
    Ok(universe_integrator.get_n_particles())
}
