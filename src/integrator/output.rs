use std::fs;
use std::fs::File;
use std::io::{Read, Write, BufReader, BufWriter};
use std::path::Path;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::info;
use super::super::error::{Result, SimulationError};
use super::super::particles::{Axes, Body, Universe};
use super::leapfrog::LeapFrog;
use super::trajectory::TrajectoryLog;


////////////////////////////////////////////////////////////////////////////////
//- Recovery snapshots
////////////////////////////////////////////////////////////////////////////////

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |extension| extension == "json")
}

/// Serializes the whole integrator (bodies, time step state and history) so
/// that an interrupted run can be resumed. JSON is used for `.json` paths,
/// bincode otherwise. An existing snapshot is kept as a backup, one per hour.
pub fn write_recovery_snapshot(snapshot_path: &Path, universe_integrator: &LeapFrog) -> Result<()> {
    if snapshot_path.exists() {
        let stamp = OffsetDateTime::now_utc().format(format_description!("[year][month][day]T[hour]"))?;
        let backup_extension = match snapshot_path.extension() {
            Some(extension) => format!("{}.{}", stamp, extension.to_string_lossy()),
            None => stamp,
        };
        fs::rename(snapshot_path, snapshot_path.with_extension(backup_extension))?;
    }

    let mut writer = BufWriter::new(File::create(snapshot_path)?);
    if is_json(snapshot_path) {
        serde_json::to_writer_pretty(&mut writer, universe_integrator)?;
    } else {
        bincode::serialize_into(&mut writer, universe_integrator)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn restore_snapshot(snapshot_path: &Path) -> Result<LeapFrog> {
    if !snapshot_path.exists() {
        return Err(SimulationError::MissingFile(snapshot_path.display().to_string()));
    }
    let mut reader = BufReader::new(File::open(snapshot_path)?);
    let universe_integrator: LeapFrog = if is_json(snapshot_path) {
        let mut json_encoded = String::new();
        reader.read_to_string(&mut json_encoded)?;
        serde_json::from_str(&json_encoded)?
    } else {
        bincode::deserialize_from(&mut reader)?
    };
    info!("Restored simulation from '{}' at tick {} (year {:0.3})",
          snapshot_path.display(), universe_integrator.get_current_iteration(), universe_integrator.get_current_time());
    Ok(universe_integrator)
}


////////////////////////////////////////////////////////////////////////////////
//- Particle snapshot
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticleRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Mass")]
    pub mass: f64,
    #[serde(rename = "Position X")]
    pub position_x: f64,
    #[serde(rename = "Position Y")]
    pub position_y: f64,
    #[serde(rename = "Velocity X")]
    pub velocity_x: f64,
    #[serde(rename = "Velocity Y")]
    pub velocity_y: f64,
    #[serde(rename = "Color")]
    pub color: String,
}

impl<'a> From<&'a Body> for ParticleRecord {
    fn from(body: &'a Body) -> ParticleRecord {
        ParticleRecord {
            name: body.name.clone(),
            mass: body.mass(),
            position_x: body.position.x,
            position_y: body.position.y,
            velocity_x: body.velocity.x,
            velocity_y: body.velocity.y,
            color: body.color.clone(),
        }
    }
}

impl ParticleRecord {
    pub fn into_body(self) -> Result<Body> {
        Body::new(self.mass,
                  Axes::new(self.position_x, self.position_y),
                  Axes::new(self.velocity_x, self.velocity_y),
                  &self.name, &self.color)
    }
}

/// One row per body with its current state.
pub fn write_particle_snapshot<W: Write>(writer: W, universe: &Universe) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for particle in universe.iter() {
        csv_writer.serialize(ParticleRecord::from(particle))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_particle_snapshot<R: Read>(reader: R) -> Result<Vec<Body>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bodies = Vec::new();
    for record in csv_reader.deserialize::<ParticleRecord>() {
        bodies.push(record?.into_body()?);
    }
    Ok(bodies)
}

pub fn write_particle_snapshot_file(path: &Path, universe: &Universe) -> Result<()> {
    write_particle_snapshot(BufWriter::new(File::create(path)?), universe)?;
    info!("Saved {} particles to '{}'", universe.n_particles(), path.display());
    Ok(())
}

pub fn read_particle_snapshot_file(path: &Path) -> Result<Vec<Body>> {
    if !path.exists() {
        return Err(SimulationError::MissingFile(path.display().to_string()));
    }
    read_particle_snapshot(BufReader::new(File::open(path)?))
}


////////////////////////////////////////////////////////////////////////////////
//- History
////////////////////////////////////////////////////////////////////////////////

pub fn history_header(bodies: &[Body]) -> Vec<String> {
    let mut header = Vec::with_capacity(1 + 4 * bodies.len());
    header.push("Frame".to_string());
    for body in bodies.iter() {
        header.push(format!("{} PosX", body.name));
        header.push(format!("{} PosY", body.name));
        header.push(format!("{} VelX", body.name));
        header.push(format!("{} VelY", body.name));
    }
    header
}

/// One row per recorded frame. The columns follow `bodies` as they are now:
/// frames recorded before a body was added leave its cells empty.
pub fn write_history<W: Write>(writer: W, bodies: &[Body], trajectory: &TrajectoryLog) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(history_header(bodies))?;

    let empty = String::new();
    for frame in trajectory.frames() {
        let mut row = Vec::with_capacity(1 + 4 * bodies.len());
        row.push(frame.tick.to_string());
        for i in 0..bodies.len() {
            match frame.states.get(i) {
                Some(state) => {
                    row.push(state.position.x.to_string());
                    row.push(state.position.y.to_string());
                    row.push(state.velocity.x.to_string());
                    row.push(state.velocity.y.to_string());
                },
                None => {
                    for _ in 0..4 {
                        row.push(empty.clone());
                    }
                },
            }
        }
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_history_file(path: &Path, universe_integrator: &LeapFrog) -> Result<()> {
    write_history(BufWriter::new(File::create(path)?),
                  &universe_integrator.universe().particles,
                  universe_integrator.trajectory())?;
    info!("Saved {} frames to '{}'", universe_integrator.trajectory().len(), path.display());
    Ok(())
}
