use std::fs;
use std::path::PathBuf;
use std::process;

pub fn integrator(bodies: Vec<leapfrog2d::Body>, force_evaluation: leapfrog2d::ForceEvaluation) -> leapfrog2d::LeapFrog {
    let (time_step, epsilon, correction_enabled) = super::simulation_properties();
    let universe = leapfrog2d::Universe::new(bodies);
    leapfrog2d::LeapFrog::new(time_step, epsilon, correction_enabled, universe)
        .unwrap()
        .with_force_evaluation(force_evaluation)
}

pub fn iterate(universe_integrator: &mut leapfrog2d::LeapFrog, ticks: u64) {
    for _ in 0..ticks {
        assert!(universe_integrator.iterate().is_some());
    }
}

pub fn assert_same_state(universe: &leapfrog2d::Universe, parallel_universe: &leapfrog2d::Universe) {
    assert_eq!(universe.n_particles(), parallel_universe.n_particles());
    for (particle, parallel_particle) in universe.iter().zip(parallel_universe.iter()) {
        assert_eq!(particle.name, parallel_particle.name);
        assert_eq!(particle.color, parallel_particle.color);
        assert_approx_eq!(particle.mass(), parallel_particle.mass());
        assert_approx_eq!(particle.position.x, parallel_particle.position.x);
        assert_approx_eq!(particle.position.y, parallel_particle.position.y);
        assert_approx_eq!(particle.velocity.x, parallel_particle.velocity.x);
        assert_approx_eq!(particle.velocity.y, parallel_particle.velocity.y);
    }
}

/// Fresh directory under the system temporary directory, unique per test and process.
pub fn data_dirname(test_name: &str) -> PathBuf {
    let dirname = std::env::temp_dir().join(format!("leapfrog2d-{}-{}", test_name, process::id()));
    if dirname.exists() {
        fs::remove_dir_all(&dirname).unwrap();
    }
    fs::create_dir_all(&dirname).unwrap();
    dirname
}
