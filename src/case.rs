//! JSON description of a simulation to start.
//!
//! ```json
//! {
//!   "time_step": 0.001,
//!   "epsilon": 5.0,
//!   "correction_enabled": true,
//!   "force_evaluation": "Snapshot",
//!   "ticks": 1000,
//!   "recovery_snapshot_period": 100,
//!   "tick_interval_ms": 10,
//!   "bodies": [
//!     { "name": "A", "mass": 1.0, "position": { "x": 0.0, "y": 0.0 },
//!       "velocity": { "x": 0.0, "y": 3.14159 }, "color": "#ff0000" },
//!     { "name": "B", "mass": 1.0, "position": { "x": 1.0, "y": 0.0 },
//!       "velocity": { "x": 0.0, "y": -3.14159 }, "color": "#0000ff" }
//!   ]
//! }
//! ```
//!
//! Every field but `bodies` is optional.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use super::constants::*;
use super::error::{Result, SimulationError};
use super::integrator::{ForceEvaluation, LeapFrog};
use super::particles::{Axes, Body, ensure_no_coincident};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyCase {
    #[serde(default = "default_name")]
    pub name: String,
    pub mass: f64,
    pub position: Axes,
    #[serde(default)]
    pub velocity: Axes,
    #[serde(default = "default_color")]
    pub color: String,
}

impl<'a> From<&'a Body> for BodyCase {
    fn from(body: &'a Body) -> BodyCase {
        BodyCase {
            name: body.name.clone(),
            mass: body.mass(),
            position: body.position,
            velocity: body.velocity,
            color: body.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_correction_enabled")]
    pub correction_enabled: bool,
    #[serde(default)]
    pub force_evaluation: ForceEvaluation,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default = "default_recovery_snapshot_period")]
    pub recovery_snapshot_period: u64,
    /// Delay between ticks for interactive front ends, ignored by the integrator
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    pub bodies: Vec<BodyCase>,
}

fn default_name() -> String { DEFAULT_BODY_NAME.to_string() }
fn default_color() -> String { DEFAULT_BODY_COLOR.to_string() }
fn default_time_step() -> f64 { DEFAULT_TIME_STEP }
fn default_epsilon() -> f64 { DEFAULT_EPSILON }
fn default_correction_enabled() -> bool { DEFAULT_CORRECTION_ENABLED }
fn default_ticks() -> u64 { DEFAULT_TICKS }
fn default_recovery_snapshot_period() -> u64 { DEFAULT_RECOVERY_SNAPSHOT_PERIOD }
fn default_tick_interval_ms() -> u64 { DEFAULT_TICK_INTERVAL_MS }

impl Default for Case {
    fn default() -> Case {
        Case {
            time_step: DEFAULT_TIME_STEP,
            epsilon: DEFAULT_EPSILON,
            correction_enabled: DEFAULT_CORRECTION_ENABLED,
            force_evaluation: ForceEvaluation::default(),
            ticks: DEFAULT_TICKS,
            recovery_snapshot_period: DEFAULT_RECOVERY_SNAPSHOT_PERIOD,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            bodies: Vec::new(),
        }
    }
}

impl Case {
    pub fn from_json(json_encoded: &str) -> Result<Case> {
        Ok(serde_json::from_str(json_encoded)?)
    }

    pub fn read(path: &Path) -> Result<Case> {
        if !path.exists() {
            return Err(SimulationError::MissingFile(path.display().to_string()));
        }
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn build_bodies(&self) -> Result<Vec<Body>> {
        let bodies = self.bodies.iter()
            .map(|body| Body::new(body.mass, body.position, body.velocity, &body.name, &body.color))
            .collect::<Result<Vec<Body>>>()?;
        ensure_no_coincident(&bodies)?;
        Ok(bodies)
    }

    /// Validated integrator ready to be stepped.
    pub fn into_integrator(&self) -> Result<LeapFrog> {
        let mut universe_integrator = LeapFrog::default().with_force_evaluation(self.force_evaluation);
        universe_integrator.configure(Some(self.time_step), Some(self.epsilon), Some(self.correction_enabled))?;
        for body in self.build_bodies()?.into_iter() {
            universe_integrator.add_body(body);
        }
        Ok(universe_integrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_the_defaults() {
        let case = Case::from_json(r#"{ "bodies": [ { "mass": 1.0, "position": { "x": 1.0, "y": 2.0 } } ] }"#).unwrap();
        assert_eq!(case.time_step, DEFAULT_TIME_STEP);
        assert_eq!(case.epsilon, DEFAULT_EPSILON);
        assert_eq!(case.correction_enabled, DEFAULT_CORRECTION_ENABLED);
        assert_eq!(case.force_evaluation, ForceEvaluation::Snapshot);
        assert_eq!(case.bodies[0].name, DEFAULT_BODY_NAME);
        assert_eq!(case.bodies[0].velocity, Axes::zero());
    }

    #[test]
    fn coincident_initial_positions_are_rejected() {
        let mut case = Case::default();
        for name in ["A", "B"].iter() {
            case.bodies.push(BodyCase {
                name: name.to_string(),
                mass: 1.,
                position: Axes::new(3., 3.),
                velocity: Axes::zero(),
                color: DEFAULT_BODY_COLOR.to_string(),
            });
        }
        match case.into_integrator() {
            Err(SimulationError::DegenerateConfiguration { first, second }) => assert_eq!((first, second), (0, 1)),
            other => panic!("unexpected result {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_time_step_is_rejected() {
        let case = Case::from_json(r#"{ "time_step": -1.0, "bodies": [] }"#).unwrap();
        match case.into_integrator() {
            Err(SimulationError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "time_step"),
            other => panic!("unexpected result {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn sequential_evaluation_is_carried_to_the_integrator() {
        let case = Case::from_json(r#"{ "force_evaluation": "Sequential", "bodies": [] }"#).unwrap();
        assert_eq!(case.into_integrator().unwrap().force_evaluation(), ForceEvaluation::Sequential);
    }
}
