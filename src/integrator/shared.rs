use std::sync::{Arc, Mutex, MutexGuard};
use super::super::error::Result;
use super::super::particles::Axes;
use super::leapfrog::{LeapFrog, StepReport};
use super::trajectory::Frame;

/// Integrator shared between the thread that ticks it and the threads that
/// edit the particle set or export its history.
///
/// Every operation holds the same lock, so a step never interleaves with an
/// `add` or a `clear`, and readers only ever observe whole frames.
#[derive(Debug, Clone)]
pub struct SharedLeapFrog {
    inner: Arc<Mutex<LeapFrog>>,
}

impl SharedLeapFrog {
    pub fn new(universe_integrator: LeapFrog) -> SharedLeapFrog {
        SharedLeapFrog { inner: Arc::new(Mutex::new(universe_integrator)) }
    }

    fn lock(&self) -> MutexGuard<'_, LeapFrog> {
        // A panic in another holder leaves at most one partially advanced step behind
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn step(&self, tick: u64) -> Option<StepReport> {
        self.lock().step(tick)
    }

    pub fn iterate(&self) -> Option<StepReport> {
        self.lock().iterate()
    }

    pub fn add(&self, mass: f64, position: Axes, velocity: Axes, name: &str, color: &str) -> Result<()> {
        self.lock().add(mass, position, velocity, name, color).map(|_| ())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn configure(&self, time_step: Option<f64>, epsilon: Option<f64>, correction_enabled: Option<bool>) -> Result<()> {
        self.lock().configure(time_step, epsilon, correction_enabled)
    }

    /// Copies of the frames appended after the first `already_seen` ones.
    pub fn frames_since(&self, already_seen: usize) -> Vec<Frame> {
        self.lock().trajectory().frames_since(already_seen).to_vec()
    }

    /// Runs `f` with exclusive access, e.g. to export a consistent snapshot.
    pub fn with<R, F: FnOnce(&LeapFrog) -> R>(&self, f: F) -> R {
        f(&self.lock())
    }

    pub fn with_mut<R, F: FnOnce(&mut LeapFrog) -> R>(&self, f: F) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn reader_sees_whole_frames_while_another_thread_steps() {
        let shared = SharedLeapFrog::new(LeapFrog::default());
        shared.add(1., Axes::new(0., 0.), Axes::new(0., 1.), "A", "#ff0000").unwrap();
        shared.add(1., Axes::new(1., 0.), Axes::new(0., -1.), "B", "#00ff00").unwrap();

        let stepper = {
            let shared = shared.clone();
            thread::spawn(move || {
                for tick in 0..200 {
                    shared.step(tick);
                }
            })
        };

        let mut seen = 0;
        while seen < 200 {
            for frame in shared.frames_since(seen) {
                assert_eq!(frame.tick, seen as u64);
                assert_eq!(frame.states.len(), 2);
                seen += 1;
            }
        }
        stepper.join().unwrap();
        assert_eq!(shared.with(|universe_integrator| universe_integrator.trajectory().len()), 200);
    }

    #[test]
    fn clear_is_atomic_with_respect_to_readers() {
        let shared = SharedLeapFrog::new(LeapFrog::default());
        shared.add(1., Axes::new(0., 0.), Axes::zero(), "A", "#ff0000").unwrap();
        shared.add(1., Axes::new(2., 0.), Axes::zero(), "B", "#00ff00").unwrap();
        shared.step(0);
        shared.clear();
        shared.with(|universe_integrator| {
            assert_eq!(universe_integrator.get_n_particles(), 0);
            assert!(universe_integrator.trajectory().is_empty());
        });
        assert!(shared.step(1).is_none());
    }
}
