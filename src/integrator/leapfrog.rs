use super::super::constants::{DEFAULT_TIME_STEP, DEFAULT_EPSILON, DEFAULT_CORRECTION_ENABLED};
use super::super::error::{Result, ensure_positive};
use super::super::particles::{Axes, Body, Universe};
use super::trajectory::{Bounds, TrajectoryLog};
use tracing::{debug, info, warn};

/// How the bodies perceive each other while they are being updated in a step.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForceEvaluation {
    /// Every force is computed from the positions the bodies had when the step started.
    Snapshot,
    /// Bodies later in the collection see the positions already advanced by
    /// the bodies updated before them in the same step.
    Sequential,
}

impl Default for ForceEvaluation {
    fn default() -> ForceEvaluation {
        ForceEvaluation::Snapshot
    }
}

/// Time step that the next step will use.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum TimeStepState {
    Nominal,
    Corrected(f64),
}

/// Velocity change of one body during a step, with the acceleration that produced it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Kick {
    pub index: usize,
    pub previous_velocity: Axes,
    pub velocity: Axes,
    pub acceleration: Axes,
}

impl Kick {
    pub fn velocity_change(&self) -> f64 {
        (self.velocity - self.previous_velocity).norm()
    }

    /// Time step that would have kept the change of speed at `epsilon`, if it was exceeded.
    pub fn corrected_time_step(&self, epsilon: f64) -> Option<f64> {
        if self.velocity_change() > epsilon {
            Some(epsilon / self.acceleration.norm())
        } else {
            None
        }
    }
}

/// What the display needs to know after a step.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub time_step: f64,
    pub next_time_step: f64,
    /// Index of the body whose velocity change set `next_time_step`, if any
    pub corrected_by: Option<usize>,
    /// Extent of every position recorded since the last clear
    pub bounds: Bounds,
}

/// Kick-drift leapfrog for a planar system of point masses.
///
/// Each step performs, body after body, a velocity half kick `v += a dt/2`
/// followed by a full drift `x += v dt`. The complementary half kick is the
/// one performed at the beginning of the next step.
///
/// When the time step correction is enabled, a body whose velocity changes by
/// more than `epsilon` in a step sets the time step of the following step to
/// `epsilon / |a|`. If several bodies trigger it in the same step, the last one
/// in the collection order wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeapFrog {
    time_step: f64,
    time_step_state: TimeStepState,
    epsilon: f64,
    correction_enabled: bool,
    force_evaluation: ForceEvaluation,
    pub universe: Universe,
    trajectory: TrajectoryLog,
    pub current_time: f64,
    current_iteration: u64,
}

impl Default for LeapFrog {
    fn default() -> LeapFrog {
        LeapFrog {
            time_step: DEFAULT_TIME_STEP,
            time_step_state: TimeStepState::Nominal,
            epsilon: DEFAULT_EPSILON,
            correction_enabled: DEFAULT_CORRECTION_ENABLED,
            force_evaluation: ForceEvaluation::default(),
            universe: Universe::default(),
            trajectory: TrajectoryLog::new(),
            current_time: 0.,
            current_iteration: 0,
        }
    }
}

impl LeapFrog {
    pub fn new(time_step: f64, epsilon: f64, correction_enabled: bool, universe: Universe) -> Result<LeapFrog> {
        let mut universe_integrator = LeapFrog::default();
        universe_integrator.configure(Some(time_step), Some(epsilon), Some(correction_enabled))?;
        universe_integrator.universe = universe;
        Ok(universe_integrator)
    }

    pub fn with_force_evaluation(mut self, force_evaluation: ForceEvaluation) -> LeapFrog {
        self.force_evaluation = force_evaluation;
        self
    }

    pub fn get_n_particles(&self) -> usize {
        self.universe.n_particles()
    }

    pub fn get_current_time(&self) -> f64 {
        self.current_time
    }

    pub fn get_current_iteration(&self) -> u64 {
        self.current_iteration
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn trajectory(&self) -> &TrajectoryLog {
        &self.trajectory
    }

    pub fn nominal_time_step(&self) -> f64 {
        self.time_step
    }

    /// Time step the next step will use unless the correction gets disabled before it.
    pub fn effective_time_step(&self) -> f64 {
        match self.time_step_state {
            TimeStepState::Nominal => self.time_step,
            TimeStepState::Corrected(time_step) => time_step,
        }
    }

    pub fn time_step_state(&self) -> TimeStepState {
        self.time_step_state
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn correction_enabled(&self) -> bool {
        self.correction_enabled
    }

    pub fn force_evaluation(&self) -> ForceEvaluation {
        self.force_evaluation
    }

    pub fn set_force_evaluation(&mut self, force_evaluation: ForceEvaluation) {
        self.force_evaluation = force_evaluation;
    }

    /// Updates the user controlled parameters. Nothing changes if any of the
    /// provided values is invalid. The effective time step is not recomputed
    /// here, the new values are picked up by the next step.
    pub fn configure(&mut self, time_step: Option<f64>, epsilon: Option<f64>, correction_enabled: Option<bool>) -> Result<()> {
        let validated_time_step = match time_step {
            Some(value) => Some(ensure_positive("time_step", value).map_err(|e| { warn!("{}", e); e })?),
            None => None,
        };
        let validated_epsilon = match epsilon {
            Some(value) => Some(ensure_positive("epsilon", value).map_err(|e| { warn!("{}", e); e })?),
            None => None,
        };

        if let Some(time_step) = validated_time_step {
            if time_step != self.time_step {
                info!("The time step changed from {} to {} years", self.time_step, time_step);
            }
            self.time_step = time_step;
        }
        if let Some(epsilon) = validated_epsilon {
            if epsilon != self.epsilon {
                info!("Epsilon changed from {} to {} AU/yr", self.epsilon, epsilon);
            }
            self.epsilon = epsilon;
        }
        if let Some(correction_enabled) = correction_enabled {
            if correction_enabled != self.correction_enabled {
                info!("Time step correction {}", if correction_enabled { "enabled" } else { "disabled" });
            }
            self.correction_enabled = correction_enabled;
        }
        Ok(())
    }

    pub fn add(&mut self, mass: f64, position: Axes, velocity: Axes, name: &str, color: &str) -> Result<&Body> {
        let body = Body::new(mass, position, velocity, name, color)?;
        self.universe.ensure_free_position(body.position)?;
        Ok(self.add_body(body))
    }

    pub fn add_body(&mut self, body: Body) -> &Body {
        debug!("Adding body '{}' ({} Msun) at ({}, {})", body.name, body.mass(), body.position.x, body.position.y);
        self.universe.push(body)
    }

    /// Removes every body together with the whole trajectory log.
    pub fn clear(&mut self) {
        info!("Clearing {} bodies and {} recorded frames", self.universe.n_particles(), self.trajectory.len());
        self.universe.clear();
        self.trajectory.clear();
    }

    /// Performs the next step tagging it with the internal iteration counter.
    pub fn iterate(&mut self) -> Option<StepReport> {
        let tick = self.current_iteration;
        self.step(tick)
    }

    /// Advances every body by one step. Returns `None` without touching
    /// anything when there are no bodies.
    pub fn step(&mut self, tick: u64) -> Option<StepReport> {
        if self.universe.is_empty() {
            return None;
        }

        if !self.correction_enabled {
            self.time_step_state = TimeStepState::Nominal;
        }
        let time_step = self.effective_time_step();
        let epsilon = self.epsilon;
        let correction_enabled = self.correction_enabled;
        let sequential = self.force_evaluation == ForceEvaluation::Sequential;

        let mut field = self.universe.gravitational_field();
        let mut correction: Option<(usize, f64)> = None;
        for (i, particle) in self.universe.particles.iter_mut().enumerate() {
            let previous_velocity = particle.velocity;
            let velocity = particle.update_velocity(i, &field, time_step);
            let position = particle.update_position(time_step);
            if sequential {
                field[i].position = position;
            }

            if correction_enabled {
                let kick = Kick {
                    index: i,
                    previous_velocity: previous_velocity,
                    velocity: velocity,
                    acceleration: particle.last_acceleration(),
                };
                if let Some(corrected_time_step) = kick.corrected_time_step(epsilon) {
                    correction = Some((kick.index, corrected_time_step));
                }
            }
        }

        if let Some((index, corrected_time_step)) = correction {
            debug!("Body #{} changed its velocity by more than {} AU/yr, next time step: {} years", index, epsilon, corrected_time_step);
            self.time_step_state = TimeStepState::Corrected(corrected_time_step);
        }

        self.current_time += time_step;
        self.current_iteration += 1;
        self.trajectory.record(tick, &self.universe.particles);
        let bounds = self.trajectory.bounds()?;

        Some(StepReport {
            tick: tick,
            time_step: time_step,
            next_time_step: self.effective_time_step(),
            corrected_by: correction.map(|(index, _)| index),
            bounds: bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick(previous: (f64, f64), current: (f64, f64), acceleration: (f64, f64)) -> Kick {
        Kick {
            index: 0,
            previous_velocity: Axes::from(previous),
            velocity: Axes::from(current),
            acceleration: Axes::from(acceleration),
        }
    }

    #[test]
    fn kick_within_epsilon_keeps_the_time_step() {
        assert_eq!(kick((0., 0.), (0.3, 0.4), (6., 8.)).corrected_time_step(0.6), None);
    }

    #[test]
    fn kick_above_epsilon_bounds_the_next_change_of_speed() {
        let corrected = kick((0., 0.), (0.3, 0.4), (6., 8.)).corrected_time_step(0.25);
        assert_eq!(corrected, Some(0.025));
    }

    #[test]
    fn empty_step_is_a_no_op() {
        let mut universe_integrator = LeapFrog::default();
        assert!(universe_integrator.step(0).is_none());
        assert_eq!(universe_integrator.get_current_iteration(), 0);
        assert!(universe_integrator.trajectory().is_empty());
    }

    #[test]
    fn defaults() {
        let universe_integrator = LeapFrog::default();
        assert_eq!(universe_integrator.nominal_time_step(), DEFAULT_TIME_STEP);
        assert_eq!(universe_integrator.effective_time_step(), DEFAULT_TIME_STEP);
        assert_eq!(universe_integrator.epsilon(), DEFAULT_EPSILON);
        assert!(!universe_integrator.correction_enabled());
        assert_eq!(universe_integrator.force_evaluation(), ForceEvaluation::Snapshot);
        assert_eq!(universe_integrator.time_step_state(), TimeStepState::Nominal);
    }

    #[test]
    fn rejected_configuration_changes_nothing() {
        let mut universe_integrator = LeapFrog::default();
        // Valid time step but invalid epsilon: neither is applied
        assert!(universe_integrator.configure(Some(0.5), Some(0.), Some(true)).is_err());
        assert_eq!(universe_integrator.nominal_time_step(), DEFAULT_TIME_STEP);
        assert_eq!(universe_integrator.epsilon(), DEFAULT_EPSILON);
        assert!(!universe_integrator.correction_enabled());
    }
}
